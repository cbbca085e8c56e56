//! Lets an operator accept or reject install candidates while keeping track of whether the plan is installable.
//!
//! # Usage
//! 1. Create a [`CandidateStore`] from the dependency graph builder's output, usually with [`CandidateStore::from_json()`].
//! 1. [`PlanSession::new()`] to start reviewing the candidates.
//! 1. [`PlanSession::select()`] and [`PlanSession::apply()`] as the operator works through the [`LicenseGroup`]s,
//! each call hands back a fresh [`PlanStatus`] with the current [`BlockingMessage`] and whether the plan can proceed.
//! 1. [`PlanSession::commit()`] once [`PlanStatus::can_proceed`] is set to get a [`CommittedPlan`].
//! 1. [`CommittedPlan::install_order()`] to list the accepted candidates in the order they should be installed.
//!
//! The building blocks used by the session are also exposed on their own:
//! [`group_candidates()`], the decision methods on [`CandidateStore`], [`find_blocking_message()`] and [`can_proceed()`].

use crate::candidate::*;

mod candidate_store;
pub use candidate_store::CandidateStore;

mod license_grouper;
pub use license_grouper::LicenseGroup;
pub use license_grouper::GroupId;
pub use license_grouper::group_candidates;

mod decision_engine;
pub use decision_engine::GroupState;

mod consistency_checker;
pub use consistency_checker::BlockingMessage;
pub use consistency_checker::find_blocking_message;

mod plan_gate;
pub use plan_gate::can_proceed;

mod session;
pub use session::PlanSession;
pub use session::PlanAction;
pub use session::PlanStatus;
pub use session::Focus;
pub use session::CommittedPlan;
