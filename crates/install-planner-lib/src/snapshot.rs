//! The wire shape an external dependency graph builder hands over when a plan is opened.

use std::sync::Arc;
use serde::{Serialize, Deserialize};

use crate::candidate::*;
use crate::Error::Validation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
	/// Every candidate referring to the same entry shares one [`License`] object.
	#[serde(default)]
	pub licenses: Vec<License>,
	pub candidates: Vec<CandidateEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEntry {
	pub id: CandidateId,
	pub name: String,
	#[serde(default)]
	pub description: String,
	/// Index into [`PlanSnapshot::licenses`].
	#[serde(default)]
	pub license: Option<usize>,
	#[serde(default)]
	pub depends_on: Vec<CandidateId>,
	#[serde(default)]
	pub dependency_for: Vec<CandidateId>,
	#[serde(default)]
	pub replaces: Option<Replacement>,
}

impl PlanSnapshot {
	/// Reads a snapshot from JSON text.
	/// # Parameters
	/// - `do_validation` - Check the JSON against the bundled schema first. Slow, only worth it when the builder can't be trusted.
	pub fn from_json(json: &str, do_validation: bool) -> crate::Result<Self> {
		let value = serde_json::from_str::<serde_json::Value>(json)?;

		if do_validation {
			let compiled_schema = jsonschema::JSONSchema::compile(
				&serde_json::from_str(include_str!("snapshot/plan.schema.json")).expect("schema isn't valid json")
			).expect("schema isn't invalid");

			let result = compiled_schema.validate(&value);
			if let Err(errors) = result {
				let reasons = errors.map(|e| e.to_string()).collect::<Vec<_>>();
				return Err(Validation(format!("snapshot does not match schema: {}", reasons.join("; "))));
			}
		}

		Ok(serde_json::from_value(value)?)
	}

	pub fn to_json(&self) -> crate::Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Materializes the candidates, resolving license indices into shared license objects.
	pub fn into_candidates(self) -> crate::Result<Vec<Candidate>> {
		let licenses: Vec<Arc<License>> = self.licenses.into_iter().map(Arc::new).collect();

		self.candidates.into_iter().map(|entry| -> crate::Result<Candidate> {
			let license = match entry.license {
				Some(i) => Some(licenses.get(i).cloned().ok_or_else(|| {
					Validation(format!("candidate `{}` refers to license #{} but only {} exist", entry.id, i, licenses.len()))
				})?),
				None => None,
			};

			let mut candidate = Candidate::new(entry.id, entry.name);
			candidate.description = entry.description;
			candidate.license = license;
			candidate.depends_on = entry.depends_on;
			candidate.dependency_for = entry.dependency_for;
			candidate.replaces = entry.replaces;
			Ok(candidate)
		}).collect()
	}
}
