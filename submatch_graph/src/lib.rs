//! Arena-backed graph model for substructure matching.
//!
//! This crate provides the target-side graph container shared across the
//! submatch workspace: a [`Graph`] owning its [`Node`]s and [`Edge`]s in
//! contiguous arenas, addressed through [`NodeId`] / [`EdgeId`] handles.
//! Elements hold handles rather than references, so the cyclic
//! node/edge/container relationships never turn into ownership cycles.
//!
//! The container also carries the single-traversal reentrancy lock used by
//! the matching engine; see [`Graph::lock_traversal`].

mod edge;
mod graph;
mod node;

pub use crate::edge::{Edge, EdgeId};
pub use crate::graph::{AlreadyLocked, Graph, Neighbors, TraversalGuard};
pub use crate::node::{Node, NodeId};
