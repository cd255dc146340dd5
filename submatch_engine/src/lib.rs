//! Subgraph pattern matching over arena-backed graphs.
//!
//! This crate provides the core matching engine that identifies instances
//! of a small pattern graph within a larger target graph. It uses a
//! backtracking search over a precomputed spanning order of the pattern's
//! edges, with cycle-closure verification and per-component seeds for
//! disconnected patterns.
//!
//! A [`Pattern`] is built through [`PatternBuilder`], which derives the
//! seeds, edge spans and closure flags at construction time. Searches run
//! through [`PatternMatcher`] in either [`MatchMode::FindFirst`] or
//! [`MatchMode::FindAll`] mode and produce a [`MatchSet`] of read-only
//! [`Match`] snapshots.

mod config;
mod matcher;
mod matches;
mod pattern;
mod search;
mod state;

pub use crate::config::MatchMode;
pub use crate::matcher::{MatchError, PatternMatcher};
pub use crate::matches::{Match, MatchSet};
pub use crate::pattern::{
    EdgePredicate, NodePredicate, Pattern, PatternBuilder, PatternEdge, PatternEdgeId,
    PatternError, PatternNode, PatternNodeId, Seed,
};
pub use submatch_graph::{AlreadyLocked, Edge, EdgeId, Graph, Neighbors, Node, NodeId};
