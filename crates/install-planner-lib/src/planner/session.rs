//! A plan under review. Every mutation re-derives the plan status in the same call.

use super::*;
use crate::PlannerOptions;

/// What the operator is currently looking at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Focus {
	#[default] None,
	Candidate(CandidateId),
	Group(GroupId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
	Accept(CandidateId),
	Reject(CandidateId),
	Toggle(CandidateId),
	AcceptGroup(GroupId),
	/// Accepts the focused group, or the group of the focused candidate. Does nothing without a focus.
	AcceptFocusedGroup,
}

/// Everything a front end needs to refresh itself after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanStatus {
	pub message: Option<BlockingMessage>,
	pub can_proceed: bool,
	/// Refers to the focused group, or the group of the focused candidate.
	pub group_fully_accepted: bool,
}

#[derive(Debug)]
pub struct PlanSession {
	store: CandidateStore,
	focus: Focus,
}

impl PlanSession {
	pub fn new(store: CandidateStore) -> Self {
		log::debug!("Starting plan session over {} candidates", store.len());
		Self { store, focus: Focus::None }
	}

	pub fn store(&self) -> &CandidateStore {
		&self.store
	}

	pub fn focus(&self) -> &Focus {
		&self.focus
	}

	fn focused_candidate(&self) -> Option<&CandidateId> {
		match &self.focus {
			Focus::Candidate(id) => Some(id),
			Focus::Group(_) | Focus::None => None,
		}
	}

	fn focused_group(&self) -> Option<&LicenseGroup> {
		let group = match &self.focus {
			Focus::Candidate(id) => self.store.group_of(id).ok()?,
			Focus::Group(group) => *group,
			Focus::None => return None,
		};
		self.store.group(group).ok()
	}

	pub fn status(&self) -> PlanStatus {
		let focus = self.focused_candidate();
		PlanStatus {
			message: find_blocking_message(&self.store, focus),
			can_proceed: can_proceed(&self.store, focus),
			group_fully_accepted: self.focused_group().map_or(false, |g| self.store.fully_accepted(g)),
		}
	}

	/// Moves the focus, unknown candidates or groups are rejected.
	pub fn select(&mut self, focus: Focus) -> crate::Result<PlanStatus> {
		match &focus {
			Focus::Candidate(id) => { self.store.candidate(id)?; },
			Focus::Group(group) => { self.store.group(*group)?; },
			Focus::None => {},
		}
		self.focus = focus;
		Ok(self.status())
	}

	pub fn apply(&mut self, action: PlanAction) -> crate::Result<PlanStatus> {
		match action {
			PlanAction::Accept(id) => self.store.accept(&id)?,
			PlanAction::Reject(id) => self.store.reject(&id)?,
			PlanAction::Toggle(id) => { self.store.toggle(&id)?; },
			PlanAction::AcceptGroup(group) => self.store.accept_group(group)?,
			PlanAction::AcceptFocusedGroup => {
				if let Some(group) = self.focused_group().map(|g| g.id()) {
					self.store.accept_group(group)?;
				}
			},
		}
		Ok(self.status())
	}

	/// Swaps in a new candidate set from the graph builder.
	///
	/// A focused group is cleared since group ids don't carry over to the new set.
	/// A focused candidate is kept even if it no longer exists, a stale candidate focus is treated as no focus.
	pub fn replace_candidates(&mut self, options: &PlannerOptions, candidates: Vec<Candidate>) -> crate::Result<PlanStatus> {
		self.store.replace_candidates(options, candidates)?;
		if let Focus::Group(_) = self.focus {
			log::debug!("Clearing focus on a license group of the replaced candidates");
			self.focus = Focus::None;
		}
		Ok(self.status())
	}

	/// Finalize to get the accepted candidates.
	///
	/// `Err` if the plan can't proceed yet.
	pub fn commit(self) -> Result<CommittedPlan, Box<Self>> {
		if can_proceed(&self.store, self.focused_candidate()) {
			log::debug!("Committing plan with {} accepted candidates", self.store.accepted().count());
			Ok(CommittedPlan { store: self.store })
		} else {
			Err(Box::new(self))
		}
	}

	pub fn cancel(self) {
		log::debug!("Cancelled plan of {} candidates", self.store.len());
	}
}

/// A plan the operator agreed to install.
#[derive(Debug)]
pub struct CommittedPlan {
	store: CandidateStore,
}

impl CommittedPlan {
	/// Accepted candidates in collection order.
	pub fn accepted(&self) -> Vec<&Candidate> {
		self.store.accepted().collect()
	}

	/// Accepted candidates with dependencies ahead of their dependents.
	pub fn install_order(&self) -> crate::Result<Vec<&Candidate>> {
		self.store.install_order()
	}

	pub fn into_accepted(self) -> Vec<Candidate> {
		self.store.into_candidates().into_iter().filter(|c| c.is_accepted()).collect()
	}
}
