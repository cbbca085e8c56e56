use super::*;

/// Whether installation may proceed: nothing is blocking and at least one candidate is accepted.
pub fn can_proceed(store: &CandidateStore, focus: Option<&CandidateId>) -> bool {
	if find_blocking_message(store, focus).is_some() {
		return false;
	}

	let focus_accepted = focus.and_then(|id| store.get(id)).map_or(false, |c| c.is_accepted());
	focus_accepted || store.candidates().iter().any(|c| c.is_accepted())
}
