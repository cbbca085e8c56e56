use serde::{Serialize, Deserialize};

/// Options controlling how a plan is opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
	auto_accept_unlicensed: bool,
	validate_snapshot: bool,
}

impl Default for PlannerOptions {
	fn default() -> Self {
		Self {
			auto_accept_unlicensed: true,
			validate_snapshot: false,
		}
	}
}

impl PlannerOptions {
	/// Candidates without license text start out accepted when this is set.
	pub fn auto_accept_unlicensed(&self) -> bool {
		self.auto_accept_unlicensed
	}
	pub fn set_auto_accept_unlicensed(&mut self, auto_accept_unlicensed: bool) {
		self.auto_accept_unlicensed = auto_accept_unlicensed;
	}

	/// Snapshot JSON is checked against the bundled schema before it is read.
	/// Should be `false` for most cases as it is slow.
	pub fn validate_snapshot(&self) -> bool {
		self.validate_snapshot
	}
	pub fn set_validate_snapshot(&mut self, validate_snapshot: bool) {
		self.validate_snapshot = validate_snapshot;
	}
}
