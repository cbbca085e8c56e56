use std::collections::BTreeMap;

use super::*;

/// Names a [`LicenseGroup`] of one particular candidate set.
///
/// Ids are only valid for the candidate set they were handed out for, once a [`CandidateStore`] swaps its candidates
/// every earlier id becomes an invalid reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId {
	/// The candidate set the group belongs to, `0` for groups computed outside of a store.
	pub(crate) plan: u64,
	pub(crate) index: usize,
}

impl GroupId {
	/// Position of the group within [`CandidateStore::groups()`].
	pub fn index(self) -> usize {
		self.index
	}
}

/// Candidates sharing one license, kept in their original relative order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseGroup {
	id: GroupId,
	key: LicenseKey,
	members: Vec<CandidateId>,
}

impl LicenseGroup {
	pub fn id(&self) -> GroupId {
		self.id
	}

	pub fn key(&self) -> &LicenseKey {
		&self.key
	}

	/// Human readable name, either the rendered license reference or "No license".
	pub fn name(&self) -> String {
		self.key.to_string()
	}

	pub fn members(&self) -> &[CandidateId] {
		&self.members
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn contains(&self, id: &CandidateId) -> bool {
		self.members.contains(id)
	}
}

/// Partitions `candidates` by license.
///
/// The "No license" group comes first, the rest follow ordered by their rendered license reference.
pub fn group_candidates(candidates: &[Candidate]) -> Vec<LicenseGroup> {
	group_candidates_of_plan(0, candidates)
}

pub(crate) fn group_candidates_of_plan(plan: u64, candidates: &[Candidate]) -> Vec<LicenseGroup> {
	let mut map = BTreeMap::<LicenseKey, Vec<CandidateId>>::new();
	for candidate in candidates {
		map.entry(candidate.license_key()).or_default().push(candidate.id.clone());
	}

	map.into_iter()
		.enumerate()
		.map(|(i, (key, members))| LicenseGroup { id: GroupId { plan, index: i }, key, members })
		.collect()
}
