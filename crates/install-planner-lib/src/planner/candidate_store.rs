//! The flat collection of candidates for one plan along with their dependency edges.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::prelude::*;

use super::*;
use crate::error::Reference;
use crate::Error::{InvalidReference, Validation};
use crate::PlannerOptions;

/// Source of plan numbers, `0` is left for groups computed outside of a store.
static NEXT_PLAN: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
pub struct CandidateStore {
	/// Distinguishes this candidate set from every other one, stamped into its [`GroupId`]s.
	plan: u64,
	candidates: Vec<Candidate>,
	index: HashMap<CandidateId, usize>,
	/// Node `i` is candidate `i`, edges point from a candidate to its dependencies.
	graph: DiGraph<CandidateId, ()>,
	groups: Vec<LicenseGroup>,
	group_index: HashMap<CandidateId, GroupId>,
}

impl CandidateStore {
	/// Takes ownership of the candidates produced by the dependency graph builder.
	///
	/// Decisions are reset to their initial state and the license groups are computed.
	/// # Errors
	/// - [`crate::Error::InvalidReference`] when an edge names a candidate that is not part of the set.
	/// - [`crate::Error::Validation`] for duplicate ids or edges that are not mirrored by their inverse.
	pub fn new(options: &PlannerOptions, mut candidates: Vec<Candidate>) -> crate::Result<Self> {
		let mut index = HashMap::<CandidateId, usize>::with_capacity(candidates.len());
		for (i, c) in candidates.iter().enumerate() {
			if index.insert(c.id.clone(), i).is_some() {
				return Err(Validation(format!("candidate `{}` appears more than once", c.id)));
			}
		}

		let lookup = |id: &CandidateId| index.get(id).copied().ok_or_else(|| InvalidReference(Reference::Candidate(id.clone())));

		let mut graph = DiGraph::<CandidateId, ()>::with_capacity(candidates.len(), 0);
		for c in &candidates {
			graph.add_node(c.id.clone());
		}

		for (i, c) in candidates.iter().enumerate() {
			for dep in &c.depends_on {
				let d = lookup(dep)?;
				if !candidates[d].dependency_for.contains(&c.id) {
					return Err(Validation(format!("`{}` depends on `{}` but is not listed as one of its dependents", c.id, dep)));
				}
				graph.add_edge(NodeIndex::new(i), NodeIndex::new(d), ());
			}
			for dependent in &c.dependency_for {
				let d = lookup(dependent)?;
				if !candidates[d].depends_on.contains(&c.id) {
					return Err(Validation(format!("`{}` is listed as a dependency for `{}` which does not depend on it", c.id, dependent)));
				}
			}
		}

		for c in &mut candidates {
			c.decision = c.initial_decision(options);
		}

		let plan = NEXT_PLAN.fetch_add(1, Ordering::Relaxed);
		let groups = super::license_grouper::group_candidates_of_plan(plan, &candidates);
		let group_index = groups.iter()
			.flat_map(|g| g.members().iter().map(move |id| (id.clone(), g.id())))
			.collect();

		log::debug!("Opened plan {} with {} candidates in {} license groups", plan, candidates.len(), groups.len());

		Ok(Self { plan, candidates, index, graph, groups, group_index })
	}

	pub fn from_snapshot(options: &PlannerOptions, snapshot: crate::PlanSnapshot) -> crate::Result<Self> {
		Self::new(options, snapshot.into_candidates()?)
	}

	pub fn from_json(options: &PlannerOptions, json: &str) -> crate::Result<Self> {
		Self::from_snapshot(options, crate::PlanSnapshot::from_json(json, options.validate_snapshot())?)
	}

	/// Swaps in a new candidate set, every decision made so far is dropped.
	///
	/// [`GroupId`]s of the old set are no longer accepted. On error the current candidates are kept.
	pub fn replace_candidates(&mut self, options: &PlannerOptions, candidates: Vec<Candidate>) -> crate::Result<()> {
		*self = Self::new(options, candidates)?;
		Ok(())
	}

	/* Candidates */

	/// All candidates in their original collection order.
	pub fn candidates(&self) -> &[Candidate] {
		&self.candidates
	}

	pub fn len(&self) -> usize {
		self.candidates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.candidates.is_empty()
	}

	pub fn get(&self, id: &CandidateId) -> Option<&Candidate> {
		self.index.get(id).map(|&i| &self.candidates[i])
	}

	/// Like [`Self::get()`] but an unknown id is an error.
	pub fn candidate(&self, id: &CandidateId) -> crate::Result<&Candidate> {
		self.get(id).ok_or_else(|| InvalidReference(Reference::Candidate(id.clone())))
	}

	pub(super) fn candidate_mut(&mut self, id: &CandidateId) -> crate::Result<&mut Candidate> {
		match self.index.get(id) {
			Some(&i) => Ok(&mut self.candidates[i]),
			None => Err(InvalidReference(Reference::Candidate(id.clone()))),
		}
	}

	/// Accepted candidates in collection order.
	pub fn accepted(&self) -> impl Iterator<Item = &Candidate> {
		self.candidates.iter().filter(|c| c.is_accepted())
	}

	pub fn into_candidates(self) -> Vec<Candidate> {
		self.candidates
	}

	/* Groups */

	pub fn groups(&self) -> &[LicenseGroup] {
		&self.groups
	}

	/// # Errors
	/// [`crate::Error::InvalidReference`] when `id` is out of range or was handed out for another candidate set.
	pub fn group(&self, id: GroupId) -> crate::Result<&LicenseGroup> {
		self.groups.get(id.index)
			.filter(|_| id.plan == self.plan)
			.ok_or(InvalidReference(Reference::Group(id)))
	}

	/// The group `id` was placed in.
	pub fn group_of(&self, id: &CandidateId) -> crate::Result<GroupId> {
		self.group_index.get(id).copied().ok_or_else(|| InvalidReference(Reference::Candidate(id.clone())))
	}

	/* Ordering */

	/// Accepted candidates ordered so that every candidate comes after its accepted dependencies.
	///
	/// Candidates with no ordering constraint between them keep their collection order.
	pub fn install_order(&self) -> crate::Result<Vec<&Candidate>> {
		let accepted = petgraph::visit::NodeFiltered::from_fn(&self.graph, |n: NodeIndex| self.candidates[n.index()].is_accepted());
		petgraph::algo::toposort(&accepted, None)
			.map_err(|cycle| crate::Error::DependencyCycle(self.graph[cycle.node_id()].clone()))?;

		/* Post-order walk over `depends_on` rather than the graph's neighbours to keep the stored edge order */
		let mut visited = HashSet::<usize>::new();
		let mut order = Vec::<&Candidate>::new();
		let mut stack = Vec::<(usize, usize)>::new();
		for (root, candidate) in self.candidates.iter().enumerate() {
			if !candidate.is_accepted() || !visited.insert(root) { continue; }
			stack.push((root, 0));
			while let Some((i, next)) = stack.pop() {
				let candidate = &self.candidates[i];
				match candidate.depends_on.get(next) {
					Some(dep) => {
						stack.push((i, next + 1));
						if let Some(&d) = self.index.get(dep) {
							if self.candidates[d].is_accepted() && visited.insert(d) {
								stack.push((d, 0));
							}
						}
					},
					None => order.push(candidate),
				}
			}
		}
		Ok(order)
	}
}
