//! Finds the single most relevant unmet dependency of a plan.
//!
//! Many candidates can have unmet constraints at once, the checker always reports the same one for the same state.
//! The focused candidate is considered first, after that the first problem in collection order wins.

use super::*;

/// Explanation of why the plan can't be installed as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockingMessage {
	/// The focused candidate is accepted but one of its dependencies is not.
	FocusDependsOn {
		dependency: CandidateId,
		dependency_name: String,
	},
	/// The focused candidate is not accepted but an accepted candidate depends on it.
	FocusRequiredBy {
		dependent: CandidateId,
		dependent_name: String,
	},
	/// `dependent` is accepted while `dependency` is not.
	Unmet {
		dependent: CandidateId,
		dependent_name: String,
		dependency: CandidateId,
		dependency_name: String,
	},
}

impl std::fmt::Display for BlockingMessage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BlockingMessage::FocusDependsOn { dependency_name, .. } => write!(f, "This package depends on '{}'.", dependency_name),
			BlockingMessage::FocusRequiredBy { dependent_name, .. } => write!(f, "Package '{}' depends on this one.", dependent_name),
			BlockingMessage::Unmet { dependent_name, dependency_name, .. } => write!(f, "Package '{}' depends on '{}'", dependent_name, dependency_name),
		}
	}
}

fn first_unaccepted_dependency<'s>(store: &'s CandidateStore, candidate: &Candidate) -> Option<&'s Candidate> {
	candidate.depends_on.iter()
		.filter_map(|id| store.get(id))
		.find(|dep| !dep.is_accepted())
}

fn first_accepted_dependent<'s>(store: &'s CandidateStore, candidate: &Candidate) -> Option<&'s Candidate> {
	candidate.dependency_for.iter()
		.filter_map(|id| store.get(id))
		.find(|dependent| dependent.is_accepted())
}

/// Returns the first unmet dependency of the plan, `None` when the plan is consistent.
///
/// A `focus` that is not part of the store is treated as no focus at all.
pub fn find_blocking_message(store: &CandidateStore, focus: Option<&CandidateId>) -> Option<BlockingMessage> {
	let focus = focus.and_then(|id| store.get(id));

	if let Some(focus) = focus {
		let message = if focus.is_accepted() {
			first_unaccepted_dependency(store, focus).map(|dep| BlockingMessage::FocusDependsOn {
				dependency: dep.id.clone(),
				dependency_name: dep.name.clone(),
			})
		} else {
			first_accepted_dependent(store, focus).map(|dependent| BlockingMessage::FocusRequiredBy {
				dependent: dependent.id.clone(),
				dependent_name: dependent.name.clone(),
			})
		};
		if message.is_some() {
			return message;
		}
	}

	store.candidates().iter()
		.filter(|c| focus.map_or(true, |f| f.id != c.id))
		.find_map(|c| {
			let (dependent, dependency) = if c.is_accepted() {
				(c, first_unaccepted_dependency(store, c)?)
			} else {
				(first_accepted_dependent(store, c)?, c)
			};
			Some(BlockingMessage::Unmet {
				dependent: dependent.id.clone(),
				dependent_name: dependent.name.clone(),
				dependency: dependency.id.clone(),
				dependency_name: dependency.name.clone(),
			})
		})
}
