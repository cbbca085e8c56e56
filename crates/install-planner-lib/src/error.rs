//! Library error type.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

use crate::candidate::CandidateId;
use crate::planner::GroupId;

#[derive(Debug, Error)]
pub enum Error {
	#[error("JSON error: {0}")]
	SerdeJSON(#[from] serde_json::Error),
	#[error("validation error: {0}")]
	Validation(String),
	#[error("invalid reference to {0}")]
	InvalidReference(Reference),
	#[error("dependency cycle through candidate {0}")]
	DependencyCycle(CandidateId),
}

/// Something an operation named that is not part of the current plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
	Candidate(CandidateId),
	Group(GroupId),
}

impl std::fmt::Display for Reference {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Reference::Candidate(id) => write!(f, "candidate `{}`", id),
			Reference::Group(id) => write!(f, "license group #{} of plan {}", id.index, id.plan),
		}
	}
}
