//! The only place candidate decisions are changed.

use super::*;

/// Summary of the decisions inside a license group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
	/// Every member is accepted.
	Accepted,
	/// Every member is rejected.
	Rejected,
	/// Anything else, including an empty group.
	Mixed,
}

impl CandidateStore {
	fn decide(&mut self, id: &CandidateId, decision: Decision) -> crate::Result<()> {
		let candidate = self.candidate_mut(id)?;
		log::trace!("Setting decision of candidate {} to {:?}", id, decision);
		candidate.decision = decision;
		Ok(())
	}

	/// Accepts a single candidate, no other candidate is touched.
	pub fn accept(&mut self, id: &CandidateId) -> crate::Result<()> {
		self.decide(id, Decision::Accepted)
	}

	/// Rejects a single candidate, no other candidate is touched.
	pub fn reject(&mut self, id: &CandidateId) -> crate::Result<()> {
		self.decide(id, Decision::Rejected)
	}

	/// Flips a candidate between accepted and rejected, an undecided candidate becomes accepted.
	pub fn toggle(&mut self, id: &CandidateId) -> crate::Result<Decision> {
		let next = if self.candidate(id)?.is_accepted() { Decision::Rejected } else { Decision::Accepted };
		self.decide(id, next)?;
		Ok(next)
	}

	/// Accepts every candidate in the group regardless of earlier decisions.
	pub fn accept_group(&mut self, group: GroupId) -> crate::Result<()> {
		let members = self.group(group)?.members().to_vec();
		log::trace!("Accepting all {} candidates of license group {}", members.len(), group.index());
		for id in &members {
			self.decide(id, Decision::Accepted)?;
		}
		Ok(())
	}

	/// Whether the whole group has been accepted under a single license.
	///
	/// Members that ended up in the same group while carrying different licenses never count as fully accepted.
	/// The "No license" group has no terms to agree to, so its members always count as sharing one license.
	pub fn is_group_fully_accepted(&self, group: GroupId) -> crate::Result<bool> {
		Ok(self.fully_accepted(self.group(group)?))
	}

	pub(super) fn fully_accepted(&self, group: &LicenseGroup) -> bool {
		let Some(first) = group.members().first().and_then(|id| self.get(id)) else { return false };
		let check_license = *group.key() != LicenseKey::NoLicense;

		for id in group.members() {
			let Some(candidate) = self.get(id) else { return false };
			if !candidate.is_accepted() {
				return false;
			}
			if check_license && !is_same_license(first.license.as_ref(), candidate.license.as_ref()) {
				log::warn!("License group \"{}\" holds candidates with differing licenses ({} and {})", group.name(), first.id, candidate.id);
				return false;
			}
		}
		true
	}

	pub fn group_state(&self, group: GroupId) -> crate::Result<GroupState> {
		let group = self.group(group)?;
		let mut all_accepted = true;
		let mut all_rejected = true;
		for id in group.members() {
			let decision = self.candidate(id)?.decision();
			all_accepted &= decision.is_accepted();
			all_rejected &= decision.is_rejected();
		}

		Ok(match (all_accepted, all_rejected) {
			(true, false) => GroupState::Accepted,
			(false, true) => GroupState::Rejected,
			_ => GroupState::Mixed,
		})
	}
}
