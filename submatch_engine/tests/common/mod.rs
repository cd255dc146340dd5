#![allow(dead_code)]

use std::sync::Once;

use submatch_engine::{Graph, MatchSet, Pattern, PatternBuilder};

static INIT: Once = Once::new();

/// Configures logging for the test runner.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// An n-cycle target with unit payloads.
pub fn cycle(n: usize) -> Graph<(), ()> {
    let mut g = Graph::with_capacity(n, n);
    let ids: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for i in 0..n {
        g.add_edge(ids[i], ids[(i + 1) % n], ());
    }
    g
}

/// An n-node path target with unit payloads.
pub fn path(n: usize) -> Graph<(), ()> {
    let mut g = Graph::with_capacity(n, n.saturating_sub(1));
    let ids: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for w in ids.windows(2) {
        g.add_edge(w[0], w[1], ());
    }
    g
}

/// A complete graph on n nodes with unit payloads.
pub fn complete(n: usize) -> Graph<(), ()> {
    let mut g = Graph::with_capacity(n, n * (n - 1) / 2);
    let ids: Vec<_> = (0..n).map(|_| g.add_node(())).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            g.add_edge(ids[i], ids[j], ());
        }
    }
    g
}

/// A chain pattern of `len` nodes with trivially-true predicates.
pub fn chain_pattern(len: usize) -> Pattern<(), ()> {
    let mut b: PatternBuilder<(), ()> = Pattern::builder();
    let ids: Vec<_> = (0..len).map(|_| b.add_node(|_| true)).collect();
    for w in ids.windows(2) {
        b.add_edge(w[0], w[1], |_| true);
    }
    b.build().expect("chain pattern is well-formed")
}

/// A cycle pattern of `len` nodes with trivially-true predicates.
pub fn cycle_pattern(len: usize) -> Pattern<(), ()> {
    let mut b: PatternBuilder<(), ()> = Pattern::builder();
    let ids: Vec<_> = (0..len).map(|_| b.add_node(|_| true)).collect();
    for i in 0..len {
        b.add_edge(ids[i], ids[(i + 1) % len], |_| true);
    }
    b.build().expect("cycle pattern is well-formed")
}

/// Asserts that every embedding maps pattern nodes to pairwise distinct
/// target nodes.
#[track_caller]
pub fn assert_injective(matches: &MatchSet) {
    for m in matches {
        for (i, a) in m.nodes().iter().enumerate() {
            for b in &m.nodes()[i + 1..] {
                assert_ne!(a, b, "embedding reuses a target node: {:?}", m.nodes());
            }
        }
    }
}
