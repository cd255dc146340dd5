//! Entry points for pattern searches.
//!
//! [`PatternMatcher`] owns one search invocation: it locks the target for
//! the duration of the traversal, runs the backtracking walk, and returns
//! the accumulated [`MatchSet`]. The traversal lock is held through an
//! RAII guard, so it is released on every exit path, including unwinds
//! out of caller-supplied predicates.

use thiserror::Error;
use tracing::info;

use submatch_graph::{AlreadyLocked, Graph};

use crate::config::MatchMode;
use crate::matches::{Match, MatchSet};
use crate::pattern::Pattern;
use crate::search::SearchCore;

/// Failures surfaced by a search invocation.
///
/// A search that simply finds nothing is not an error; it returns an
/// empty [`MatchSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The target graph is mid-traversal: a second search was started on
    /// a target an enclosing, not-yet-completed search already locked.
    /// No results are produced and no state is mutated.
    #[error("reentrant search on a target graph: {0}")]
    Reentrancy(#[from] AlreadyLocked),
}

/// A single search of `pattern` against `target`.
pub struct PatternMatcher<'p, 't, N, E> {
    pattern: &'p Pattern<N, E>,
    target: &'t Graph<N, E>,
}

impl<'p, 't, N, E> PatternMatcher<'p, 't, N, E> {
    /// Pairs a pattern with a target graph.
    #[must_use]
    pub const fn new(pattern: &'p Pattern<N, E>, target: &'t Graph<N, E>) -> Self {
        PatternMatcher { pattern, target }
    }

    /// Enumerates every embedding of the pattern in the target.
    ///
    /// # Errors
    /// Returns [`MatchError::Reentrancy`] if the target is already locked
    /// by an in-progress search.
    pub fn find_all(
        pattern: &'p Pattern<N, E>,
        target: &'t Graph<N, E>,
    ) -> Result<MatchSet, MatchError> {
        Self::new(pattern, target).enumerate(MatchMode::FindAll)
    }

    /// Returns the first embedding of the pattern in the target, if any.
    ///
    /// # Errors
    /// Returns [`MatchError::Reentrancy`] if the target is already locked
    /// by an in-progress search.
    pub fn find_first(
        pattern: &'p Pattern<N, E>,
        target: &'t Graph<N, E>,
    ) -> Result<Option<Match>, MatchError> {
        Self::new(pattern, target)
            .enumerate(MatchMode::FindFirst)
            .map(|set| set.items.into_iter().next())
    }

    /// Runs the search in the given mode.
    ///
    /// Locks the target for the duration of the traversal, walks every
    /// seed's span with backtracking, and collects completed embeddings.
    /// The target graph is left exactly as found whether the search
    /// succeeds, fails or unwinds.
    ///
    /// # Errors
    /// Returns [`MatchError::Reentrancy`] if the target is already locked
    /// by an in-progress search.
    pub fn enumerate(&self, mode: MatchMode) -> Result<MatchSet, MatchError> {
        let _guard = self.target.lock_traversal()?;

        info!(
            "starting pattern search: pattern nodes: {}, target nodes: {}, mode: {:?}",
            self.pattern.node_count(),
            self.target.node_count(),
            mode
        );

        let items = SearchCore::new(self.pattern, self.target, mode).run();

        info!("search complete: {} embedding(s)", items.len());

        Ok(MatchSet::new(items))
    }
}
