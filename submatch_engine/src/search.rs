//! Backtracking walk of a pattern's edge spans over a target graph.
//!
//! The search proceeds seed by seed: every unvisited, compatible target
//! node is tried as the image of the current seed, then the seed's span
//! is walked edge by edge. Tree edges expand the mapping into the target
//! neighborhood of their already-mapped `begin` endpoint; closure edges
//! only verify connectivity between two already-mapped images. Every
//! assignment is undone when the recursion returns, so the state is
//! restored on every backtrack.
//!
//! `FindFirst` termination is an explicit sentinel ([`Flow::Stop`])
//! checked after every recursive call, unwinding the seed and neighbor
//! loops without exceptions.

use tracing::{debug, trace};

use submatch_graph::Graph;

use crate::config::MatchMode;
use crate::matches::Match;
use crate::pattern::{Pattern, PatternEdge};
use crate::state::State;

/// Unwind signal propagated through the recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// Keep exploring sibling candidates.
    Continue,
    /// A `FindFirst` search completed; unwind every enclosing loop.
    Stop,
}

pub(crate) struct SearchCore<'p, 't, N, E> {
    pattern: &'p Pattern<N, E>,
    target: &'t Graph<N, E>,
    mode: MatchMode,
    state: State,
    results: Vec<Match>,
}

impl<'p, 't, N, E> SearchCore<'p, 't, N, E> {
    pub(crate) fn new(pattern: &'p Pattern<N, E>, target: &'t Graph<N, E>, mode: MatchMode) -> Self {
        SearchCore {
            pattern,
            target,
            mode,
            state: State::new(pattern.node_count(), target.node_count()),
            results: Vec::new(),
        }
    }

    pub(crate) fn run(mut self) -> Vec<Match> {
        if self.pattern.node_count() > self.target.node_count() {
            debug!(
                "pattern larger than target ({} > {} nodes), no embedding possible",
                self.pattern.node_count(),
                self.target.node_count()
            );
            return self.results;
        }
        let _ = self.match_seed(0);
        self.results
    }

    /// Tries every unvisited, compatible target node as the image of the
    /// seed at `seed_idx`, walking the seed's span under each tentative
    /// assignment. Later seeds nest under the visited state established
    /// by earlier components, so components cannot share target nodes.
    fn match_seed(&mut self, seed_idx: usize) -> Flow {
        let pattern = self.pattern;
        let target = self.target;
        let seed = &pattern.seeds()[seed_idx];

        for candidate in target.node_ids() {
            if self.state.is_used(candidate) {
                continue;
            }
            if !pattern.node(seed.node()).matches(target.node(candidate)) {
                continue;
            }

            self.state.map(seed.node(), candidate);
            let flow = self.walk_span(seed_idx, 0);
            self.state.unmap(seed.node(), candidate);

            if flow == Flow::Stop {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    /// Walks the span of the seed at `seed_idx` from cursor position
    /// `pos`. At the end of the span, either advances to the next seed or
    /// records the completed mapping.
    fn walk_span(&mut self, seed_idx: usize, pos: usize) -> Flow {
        let pattern = self.pattern;
        let seed = &pattern.seeds()[seed_idx];

        if pos == seed.span().len() {
            if seed_idx + 1 < pattern.seeds().len() {
                return self.match_seed(seed_idx + 1);
            }
            let found = self.state.to_match();
            trace!("embedding complete: {:?}", found.nodes());
            self.results.push(found);
            return match self.mode {
                MatchMode::FindFirst => Flow::Stop,
                MatchMode::FindAll => Flow::Continue,
            };
        }

        let edge = pattern.edge(seed.span()[pos]);
        if edge.is_closure() {
            self.verify_closure(edge, seed_idx, pos)
        } else {
            self.expand_tree_edge(edge, seed_idx, pos)
        }
    }

    /// A closure edge consumes no new target node: the images of both
    /// endpoints are already fixed, and the branch survives only if some
    /// compatible target edge connects them.
    fn verify_closure(&mut self, edge: &PatternEdge<E>, seed_idx: usize, pos: usize) -> Flow {
        let target = self.target;
        let begin = self.state.target_of(edge.begin());
        let end = self.state.target_of(edge.end());

        for (neighbor, via) in target.neighbors(begin) {
            if neighbor == end && edge.matches(target.edge(via)) {
                return self.walk_span(seed_idx, pos + 1);
            }
        }
        Flow::Continue
    }

    /// A tree edge extends the mapping: every unvisited neighbor of the
    /// `begin` image that satisfies the end-node predicate, reached over
    /// an edge satisfying the edge predicate, is tried as the image of
    /// the `end` endpoint.
    fn expand_tree_edge(&mut self, edge: &PatternEdge<E>, seed_idx: usize, pos: usize) -> Flow {
        let pattern = self.pattern;
        let target = self.target;
        let anchor = self.state.target_of(edge.begin());

        for (neighbor, via) in target.neighbors(anchor) {
            if self.state.is_used(neighbor) {
                continue;
            }
            if !pattern.node(edge.end()).matches(target.node(neighbor)) {
                continue;
            }
            if !edge.matches(target.edge(via)) {
                continue;
            }

            self.state.map(edge.end(), neighbor);
            let flow = self.walk_span(seed_idx, pos + 1);
            self.state.unmap(edge.end(), neighbor);

            if flow == Flow::Stop {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}
