//! Pattern graphs: nodes and edges carrying compatibility predicates,
//! plus the builder that fixes the traversal plan at construction time.
//!
//! A pattern is only constructible through [`PatternBuilder`]. `build`
//! discovers the pattern's connected components, picks one seed per
//! component, orients every edge along a breadth-first spanning traversal
//! and flags the edges that close a cycle. The resulting spans are valid
//! matching orders by construction: when the matcher reaches a tree edge,
//! its `begin` endpoint is already mapped, and when it reaches a closure
//! edge, both endpoints are.

use std::collections::VecDeque;
use std::fmt;

use submatch_graph::{Edge, Node};
use thiserror::Error;

/// Node compatibility predicate supplied by the caller.
///
/// Evaluated against candidate target nodes; must be side-effect-free and
/// deterministic for reproducible results.
pub type NodePredicate<N> = Box<dyn Fn(&Node<N>) -> bool>;

/// Edge compatibility predicate supplied by the caller.
pub type EdgePredicate<E> = Box<dyn Fn(&Edge<E>) -> bool>;

/// Dense handle to a node of a [`Pattern`].
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternNodeId(u32);

impl PatternNodeId {
    const fn new(raw: usize) -> Self {
        Self(raw as u32)
    }

    /// Position of this node in the pattern's insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Dense handle to an edge of a [`Pattern`].
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternEdgeId(u32);

impl PatternEdgeId {
    const fn new(raw: usize) -> Self {
        Self(raw as u32)
    }

    /// Position of this edge in the pattern's insertion order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A pattern node: a compatibility predicate over target nodes.
pub struct PatternNode<N> {
    predicate: NodePredicate<N>,
}

impl<N> PatternNode<N> {
    /// Evaluates this node's predicate against a target node.
    #[must_use]
    pub fn matches(&self, node: &Node<N>) -> bool {
        (self.predicate)(node)
    }
}

/// A pattern edge: endpoints, a compatibility predicate over target
/// edges, and the closure flag fixed at build time.
pub struct PatternEdge<E> {
    begin: PatternNodeId,
    end: PatternNodeId,
    closure: bool,
    predicate: EdgePredicate<E>,
}

impl<E> PatternEdge<E> {
    /// Endpoint that is already mapped when the matcher reaches this edge.
    #[must_use]
    pub const fn begin(&self) -> PatternNodeId {
        self.begin
    }

    /// Endpoint mapped by walking this edge (tree edges), or the other
    /// already-mapped endpoint (closure edges).
    #[must_use]
    pub const fn end(&self) -> PatternNodeId {
        self.end
    }

    /// True when this edge closes a cycle: both endpoints are mapped by
    /// the time it is processed, so it is verified rather than expanded.
    #[must_use]
    pub const fn is_closure(&self) -> bool {
        self.closure
    }

    /// Evaluates this edge's predicate against a target edge.
    #[must_use]
    pub fn matches(&self, edge: &Edge<E>) -> bool {
        (self.predicate)(edge)
    }
}

/// Entry point of one connected pattern component: the component's seed
/// node paired with the spanning-ordered edge span walked from it.
#[derive(Clone, Debug)]
pub struct Seed {
    node: PatternNodeId,
    span: Vec<PatternEdgeId>,
}

impl Seed {
    /// The component's entry node.
    #[must_use]
    pub const fn node(&self) -> PatternNodeId {
        self.node
    }

    /// The component's edges in matching order.
    #[must_use]
    pub fn span(&self) -> &[PatternEdgeId] {
        &self.span
    }
}

/// Rejected pattern shapes, detected at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A pattern must contain at least one node.
    #[error("pattern has no nodes")]
    Empty,

    /// An edge endpoint does not name a node of this builder.
    #[error("edge {edge} references a node outside this pattern")]
    DanglingEdge {
        /// Insertion index of the offending edge.
        edge: usize,
    },
}

/// A pattern graph ready to be matched against targets.
///
/// Immutable once built; one pattern can be matched against any number of
/// target graphs, sequentially or with interleaved lifetimes.
pub struct Pattern<N, E> {
    nodes: Vec<PatternNode<N>>,
    edges: Vec<PatternEdge<E>>,
    seeds: Vec<Seed>,
}

impl<N, E> Pattern<N, E> {
    /// Starts building a pattern.
    #[must_use]
    pub fn builder() -> PatternBuilder<N, E> {
        PatternBuilder::new()
    }

    /// Number of pattern nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of pattern edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The pattern node addressed by `id`.
    #[must_use]
    pub fn node(&self, id: PatternNodeId) -> &PatternNode<N> {
        &self.nodes[id.index()]
    }

    /// The pattern edge addressed by `id`.
    #[must_use]
    pub fn edge(&self, id: PatternEdgeId) -> &PatternEdge<E> {
        &self.edges[id.index()]
    }

    /// One seed per connected component, in node-id order.
    #[must_use]
    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }
}

impl<N, E> fmt::Debug for Pattern<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("seeds", &self.seeds)
            .finish()
    }
}

/// Incremental builder for [`Pattern`]s.
pub struct PatternBuilder<N, E> {
    nodes: Vec<PatternNode<N>>,
    edges: Vec<(PatternNodeId, PatternNodeId, EdgePredicate<E>)>,
}

impl<N, E> Default for PatternBuilder<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> PatternBuilder<N, E> {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a pattern node with the given compatibility predicate.
    pub fn add_node(&mut self, predicate: impl Fn(&Node<N>) -> bool + 'static) -> PatternNodeId {
        let id = PatternNodeId::new(self.nodes.len());
        self.nodes.push(PatternNode {
            predicate: Box::new(predicate),
        });
        id
    }

    /// Adds a pattern edge between `a` and `b` with the given
    /// compatibility predicate. Orientation and the closure flag are
    /// decided later, in [`build`](Self::build).
    pub fn add_edge(
        &mut self,
        a: PatternNodeId,
        b: PatternNodeId,
        predicate: impl Fn(&Edge<E>) -> bool + 'static,
    ) -> PatternEdgeId {
        let id = PatternEdgeId::new(self.edges.len());
        self.edges.push((a, b, Box::new(predicate)));
        id
    }

    /// Finalizes the pattern: validates endpoints, discovers connected
    /// components, and fixes each component's seed, edge orientation,
    /// span order and closure flags.
    pub fn build(self) -> Result<Pattern<N, E>, PatternError> {
        if self.nodes.is_empty() {
            return Err(PatternError::Empty);
        }

        let node_count = self.nodes.len();
        for (idx, (a, b, _)) in self.edges.iter().enumerate() {
            if a.index() >= node_count || b.index() >= node_count {
                return Err(PatternError::DanglingEdge { edge: idx });
            }
        }

        let (endpoints, predicates): (Vec<_>, Vec<_>) = self
            .edges
            .into_iter()
            .map(|(a, b, predicate)| ((a, b), predicate))
            .unzip();

        let mut adjacency: Vec<Vec<(usize, PatternNodeId)>> = vec![Vec::new(); node_count];
        for (idx, &(a, b)) in endpoints.iter().enumerate() {
            adjacency[a.index()].push((idx, b));
            if a != b {
                adjacency[b.index()].push((idx, a));
            }
        }

        // Breadth-first spanning traversal per component. The first edge
        // reaching an undiscovered node becomes that node's tree edge,
        // oriented away from the already-mapped endpoint; every other
        // in-component edge closes a cycle.
        let mut orientation: Vec<Option<(PatternNodeId, PatternNodeId, bool)>> =
            vec![None; endpoints.len()];
        let mut discovered = vec![false; node_count];
        let mut seeds = Vec::new();

        for start in 0..node_count {
            if discovered[start] {
                continue;
            }
            let seed_node = PatternNodeId::new(start);
            discovered[start] = true;

            let mut span = Vec::new();
            let mut queue = VecDeque::from([seed_node]);
            while let Some(current) = queue.pop_front() {
                for &(edge_idx, other) in &adjacency[current.index()] {
                    if orientation[edge_idx].is_some() {
                        continue;
                    }
                    let closes_cycle = discovered[other.index()];
                    orientation[edge_idx] = Some((current, other, closes_cycle));
                    span.push(PatternEdgeId::new(edge_idx));
                    if !closes_cycle {
                        discovered[other.index()] = true;
                        queue.push_back(other);
                    }
                }
            }

            seeds.push(Seed {
                node: seed_node,
                span,
            });
        }

        let edges = orientation
            .into_iter()
            .zip(predicates)
            .map(|(oriented, predicate)| {
                let (begin, end, closure) =
                    oriented.expect("every edge belongs to exactly one component");
                PatternEdge {
                    begin,
                    end,
                    closure,
                    predicate,
                }
            })
            .collect();

        Ok(Pattern {
            nodes: self.nodes,
            edges,
            seeds,
        })
    }
}

impl<N, E> fmt::Debug for PatternBuilder<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternBuilder")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}
