//! Candidates are the individual install actions an operator reviews before a plan is committed.
//!
//! A candidate is either a fresh install or the replacement of an installed archive.
//! The dependency edges between candidates are produced by an external graph builder
//! and are only read here.

use std::sync::Arc;
use serde::{Serialize, Deserialize};

mod license;
pub use license::License;
pub use license::LicenseKey;
pub use license::pretty_license_ref;
pub use license::is_same_license;

/// Opaque identifier of a candidate.
///
/// Not necessarily the package identifier, several candidates can target variants of the same package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for CandidateId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for CandidateId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for CandidateId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl AsRef<CandidateId> for CandidateId {
	fn as_ref(&self) -> &CandidateId {
		self
	}
}

/// The operator's verdict on a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
	/// Only ever the initial state, no operation returns a candidate to it.
	#[default] Undecided,
	Accepted,
	Rejected,
}

impl Decision {
	pub fn is_accepted(self) -> bool {
		self == Decision::Accepted
	}

	pub fn is_rejected(self) -> bool {
		self == Decision::Rejected
	}
}

/// The installed archive a candidate would replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
	pub old_revision: String,
	pub new_revision: String,
	#[serde(default)]
	pub old_api: Option<String>,
	#[serde(default)]
	pub new_api: Option<String>,
}

/// A single planned install or replace action.
#[derive(Debug, Clone)]
pub struct Candidate {
	pub id: CandidateId,
	/// Short human readable description, used in every message naming this candidate.
	pub name: String,
	pub description: String,
	/// Shared by reference with every other candidate built from the same license entry.
	pub license: Option<Arc<License>>,
	/// Candidates that must be accepted for this one to be installable. Order is significant.
	pub depends_on: Vec<CandidateId>,
	/// Inverse of `depends_on`. Order is significant.
	pub dependency_for: Vec<CandidateId>,
	pub replaces: Option<Replacement>,
	pub(crate) decision: Decision,
}

impl Candidate {
	pub fn new(id: impl Into<CandidateId>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			description: String::new(),
			license: None,
			depends_on: Vec::new(),
			dependency_for: Vec::new(),
			replaces: None,
			decision: Decision::Undecided,
		}
	}

	pub fn decision(&self) -> Decision {
		self.decision
	}

	pub fn is_accepted(&self) -> bool {
		self.decision.is_accepted()
	}

	/// A license only gates the candidate when it carries some text.
	pub fn has_license_text(&self) -> bool {
		self.license.as_ref().map_or(false, |l| !l.text.is_empty())
	}

	pub fn license_key(&self) -> LicenseKey {
		LicenseKey::for_license(self.license.as_deref())
	}

	pub fn is_dependency(&self) -> bool {
		!self.dependency_for.is_empty()
	}

	/// Name shown in package lists, dependencies of other candidates are marked with `[*]`.
	pub fn label(&self) -> String {
		if self.is_dependency() {
			format!("{} [*]", self.name)
		} else {
			self.name.clone()
		}
	}

	/// Describes what an update replaces, `None` for fresh installs.
	pub fn update_summary(&self) -> Option<String> {
		let r = self.replaces.as_ref()?;
		match (&r.old_api, &r.new_api) {
			(Some(old_api), Some(new_api)) if old_api != new_api => Some(format!(
				"This update will replace API {} revision {} with API {} revision {}.",
				old_api, r.old_revision, new_api, r.new_revision
			)),
			_ => Some(format!("This update will replace revision {} with revision {}.", r.old_revision, r.new_revision)),
		}
	}

	pub(crate) fn initial_decision(&self, options: &crate::PlannerOptions) -> Decision {
		if options.auto_accept_unlicensed() && !self.has_license_text() {
			Decision::Accepted
		} else {
			Decision::Undecided
		}
	}
}
