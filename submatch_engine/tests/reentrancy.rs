mod common;

use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use submatch_engine::{MatchError, Pattern, PatternMatcher};

use crate::common::{chain_pattern, cycle, setup_test_logging};

#[test]
fn reentrant_search_fails_fast_without_corrupting_the_outer_search() {
    setup_test_logging();

    let target = Rc::new(cycle(4));
    let inner_errors: Rc<RefCell<Vec<MatchError>>> = Rc::new(RefCell::new(Vec::new()));

    // The seed predicate re-enters the matcher on the same target graph,
    // simulating indirect recursive misuse mid-traversal.
    let mut b = Pattern::builder();
    let reentrant_target = Rc::clone(&target);
    let sink = Rc::clone(&inner_errors);
    let seed = b.add_node(move |_| {
        let mut probe: submatch_engine::PatternBuilder<(), ()> = Pattern::builder();
        probe.add_node(|_| true);
        let probe = probe.build().unwrap();

        match PatternMatcher::find_all(&probe, &reentrant_target) {
            Ok(_) => {}
            Err(err) => sink.borrow_mut().push(err),
        }
        true
    });
    let other = b.add_node(|_| true);
    b.add_edge(seed, other, |_| true);
    let pattern = b.build().unwrap();

    let outer = PatternMatcher::find_all(&pattern, &target).unwrap();

    // The outer search is undisturbed: the usual 8 embeddings of a
    // 2-chain in a 4-cycle.
    assert_eq!(outer.len(), 8);

    // Every inner attempt was rejected by the traversal lock.
    let errors = inner_errors.borrow();
    assert!(!errors.is_empty());
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, MatchError::Reentrancy(_)))
    );

    // The lock is released once the outer search returns.
    assert!(!target.is_locked());
}

#[test]
fn lock_is_released_after_successful_and_empty_searches() {
    setup_test_logging();

    let target = cycle(4);

    let found = PatternMatcher::find_all(&chain_pattern(2), &target).unwrap();
    assert!(found.found());
    assert!(!target.is_locked());

    let none = PatternMatcher::find_all(&chain_pattern(6), &target).unwrap();
    assert!(none.is_empty());
    assert!(!target.is_locked());
}

#[test]
fn lock_is_released_when_a_predicate_panics() {
    setup_test_logging();

    let target = cycle(3);

    let mut b: submatch_engine::PatternBuilder<(), ()> = Pattern::builder();
    b.add_node(|_| panic!("predicate aborted the search"));
    let pattern = b.build().unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = PatternMatcher::find_all(&pattern, &target);
    }));
    assert!(result.is_err());

    // The guard released the lock during the unwind; the target is
    // immediately reusable.
    assert!(!target.is_locked());
    let matches = PatternMatcher::find_all(&chain_pattern(2), &target).unwrap();
    assert_eq!(matches.len(), 6);
}

#[test]
fn explicit_guard_blocks_a_search_until_dropped() {
    setup_test_logging();

    let target = cycle(4);
    let pattern = chain_pattern(2);

    let guard = target.lock_traversal().unwrap();
    let err = PatternMatcher::find_all(&pattern, &target).unwrap_err();
    assert!(matches!(err, MatchError::Reentrancy(_)));

    drop(guard);
    assert_eq!(PatternMatcher::find_all(&pattern, &target).unwrap().len(), 8);
}

#[test]
fn graphs_lock_independently() {
    setup_test_logging();

    let first = Rc::new(cycle(4));
    let second = cycle(4);
    let results: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));

    // A predicate traversing a *different* graph is not reentrant.
    let mut b = Pattern::builder();
    let other_target = Rc::new(second);
    let inner_target = Rc::clone(&other_target);
    let sink = Rc::clone(&results);
    b.add_node(move |_| {
        let probe = chain_pattern(2);
        if let Ok(found) = PatternMatcher::find_all(&probe, &inner_target) {
            sink.borrow_mut().push(found.len());
        }
        true
    });
    let pattern = b.build().unwrap();

    let outer = PatternMatcher::find_all(&pattern, &first).unwrap();
    assert_eq!(outer.len(), 4);
    assert!(results.borrow().iter().all(|&n| n == 8));
    assert!(!results.borrow().is_empty());
}
