//! Search-mode configuration for the pattern matcher.
//!
//! The single knob exposed to consumers is how many embeddings a search
//! should produce:
//!
//! - `FindFirst`: stop at the first complete embedding. The short-circuit
//!   unwinds through every level of the search (seed iteration, neighbor
//!   iteration) as soon as a mapping completes.
//! - `FindAll`: exhaust the search space and accumulate every embedding.
//!
//! A `FindFirst` result is always a member of the corresponding `FindAll`
//! result set: the two modes walk candidates in the same order and differ
//! only in when they stop.

/// How many embeddings a single search should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Stop after the first complete embedding.
    FindFirst,
    /// Enumerate every embedding.
    FindAll,
}

impl MatchMode {
    /// True for [`MatchMode::FindFirst`].
    #[must_use]
    pub const fn is_first_only(self) -> bool {
        matches!(self, Self::FindFirst)
    }
}

impl Default for MatchMode {
    /// Defaults to exhaustive enumeration.
    fn default() -> Self {
        Self::FindAll
    }
}
