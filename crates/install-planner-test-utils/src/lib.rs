//! Various helper functions for testing
//!
//! functions in this module should use results and not use any panics to avoid confusion in callers

use std::collections::HashMap;

use install_planner::candidate::{CandidateId, License, Replacement};
use install_planner::planner::CandidateStore;
use install_planner::snapshot::{CandidateEntry, PlanSnapshot};
use install_planner::PlannerOptions;

/// Stands in for the dependency graph builder, producing snapshots with both edge directions filled in.
///
/// Licenses are referred to by a short name local to the builder.
/// Mistakes such as unknown names are reported when building.
#[derive(Debug, Default, Clone)]
pub struct PlanBuilder {
	snapshot: PlanSnapshot,
	license_names: HashMap<String, usize>,
	error: Option<String>,
}

impl PlanBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	fn fail(&mut self, message: String) {
		if self.error.is_none() {
			self.error = Some(message);
		}
	}

	fn entry(&mut self, id: &str) -> Option<&mut CandidateEntry> {
		self.snapshot.candidates.iter_mut().find(|c| c.id.as_str() == id)
	}

	/// Adds a new license object. Adding the same reference and text twice gives two distinct but equal licenses.
	pub fn license(mut self, name: &str, license_ref: &str, text: &str) -> Self {
		self.snapshot.licenses.push(License::new(license_ref, text));
		self.license_names.insert(name.to_owned(), self.snapshot.licenses.len() - 1);
		self
	}

	pub fn candidate(mut self, id: &str, name: &str) -> Self {
		self.snapshot.candidates.push(CandidateEntry {
			id: CandidateId::new(id),
			name: name.to_owned(),
			description: String::new(),
			license: None,
			depends_on: Vec::new(),
			dependency_for: Vec::new(),
			replaces: None,
		});
		self
	}

	/// Places candidate `id` under the license added as `license_name`.
	pub fn licensed(mut self, id: &str, license_name: &str) -> Self {
		let index = match self.license_names.get(license_name) {
			Some(&i) => i,
			None => { self.fail(format!("unknown license `{}`", license_name)); return self },
		};
		match self.entry(id) {
			Some(entry) => entry.license = Some(index),
			None => self.fail(format!("unknown candidate `{}`", id)),
		}
		self
	}

	/// Records that `dependent` requires `dependency`, in both directions.
	pub fn depends(mut self, dependent: &str, dependency: &str) -> Self {
		match self.entry(dependent) {
			Some(entry) => entry.depends_on.push(CandidateId::new(dependency)),
			None => { self.fail(format!("unknown candidate `{}`", dependent)); return self },
		}
		match self.entry(dependency) {
			Some(entry) => entry.dependency_for.push(CandidateId::new(dependent)),
			None => self.fail(format!("unknown candidate `{}`", dependency)),
		}
		self
	}

	pub fn replaces(mut self, id: &str, old_revision: &str, new_revision: &str) -> Self {
		match self.entry(id) {
			Some(entry) => entry.replaces = Some(Replacement {
				old_revision: old_revision.to_owned(),
				new_revision: new_revision.to_owned(),
				old_api: None,
				new_api: None,
			}),
			None => self.fail(format!("unknown candidate `{}`", id)),
		}
		self
	}

	pub fn snapshot(self) -> install_planner::Result<PlanSnapshot> {
		match self.error {
			Some(e) => Err(install_planner::Error::Validation(e)),
			None => Ok(self.snapshot),
		}
	}

	/// Builds a store using the default options.
	pub fn build(self) -> install_planner::Result<CandidateStore> {
		self.build_with(&PlannerOptions::default())
	}

	pub fn build_with(self, options: &PlannerOptions) -> install_planner::Result<CandidateStore> {
		CandidateStore::from_snapshot(options, self.snapshot()?)
	}
}

/// Options where every candidate starts out undecided.
pub fn undecided_options() -> PlannerOptions {
	let mut options = PlannerOptions::default();
	options.set_auto_accept_unlicensed(false);
	options
}
