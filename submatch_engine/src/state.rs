//! Per-invocation search state.
//!
//! The transient `visited` marks and the pattern-to-target assignment
//! live here, owned by a single matcher call, instead of as mutable
//! fields on the shared graph elements. Two searches over the same target
//! therefore cannot observe each other's bookkeeping, and the target is
//! left exactly as found no matter how a search ends.

use submatch_graph::NodeId;

use crate::matches::Match;
use crate::pattern::PatternNodeId;

pub(crate) struct State {
    // Pattern node -> target node, indexed by pattern-node order.
    assignment: Vec<Option<NodeId>>,
    // Target nodes consumed by the in-progress mapping.
    used: Vec<bool>,
}

impl State {
    pub(crate) fn new(pattern_nodes: usize, target_nodes: usize) -> Self {
        State {
            assignment: vec![None; pattern_nodes],
            used: vec![false; target_nodes],
        }
    }

    pub(crate) fn is_mapped(&self, p: PatternNodeId) -> bool {
        self.assignment[p.index()].is_some()
    }

    pub(crate) fn is_used(&self, t: NodeId) -> bool {
        self.used[t.index()]
    }

    #[contracts::debug_requires(!self.is_mapped(p))]
    #[contracts::debug_requires(!self.is_used(t))]
    #[contracts::debug_ensures(self.is_mapped(p) && self.is_used(t))]
    pub(crate) fn map(&mut self, p: PatternNodeId, t: NodeId) {
        self.assignment[p.index()] = Some(t);
        self.used[t.index()] = true;
    }

    #[contracts::debug_requires(self.is_mapped(p) && self.is_used(t))]
    #[contracts::debug_ensures(!self.is_mapped(p) && !self.is_used(t))]
    pub(crate) fn unmap(&mut self, p: PatternNodeId, t: NodeId) {
        self.assignment[p.index()] = None;
        self.used[t.index()] = false;
    }

    /// Target node assigned to `p`. The spanning order guarantees the
    /// assignment exists for every edge endpoint the search dereferences.
    pub(crate) fn target_of(&self, p: PatternNodeId) -> NodeId {
        self.assignment[p.index()].expect("spanning order maps endpoints before use")
    }

    /// Snapshots the completed assignment into an owned [`Match`].
    pub(crate) fn to_match(&self) -> Match {
        let nodes = self
            .assignment
            .iter()
            .map(|slot| slot.expect("complete mapping assigns every pattern node"))
            .collect();
        Match::new(nodes)
    }
}
