//! Property-based tests for the capability laws.
//!
//! Verifies that every container honors the contracts of its capabilities:
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//! - **Monad laws**: left identity, right identity, associativity for `bind`
//! - **Applicative identity**: `pure(a).lift2(pure(b), f) == pure(f(a, b))`
//! - **Short-circuit**: a failed container never invokes a transformation
//!
//! proptest generates random inputs; the spy tests use call counters to
//! observe that short-circuits really skip the closures.

#![cfg(feature = "container")]

use monadkit::capability::{
    lift2_via_bind, sequence, Chainable, ChainableMut, Combinable, Mappable,
};
use monadkit::container::{NonDet, Optional, Outcome, Reader};
use proptest::prelude::*;
use rstest::rstest;

fn optional(value: Option<i32>) -> Optional<i32> {
    Optional::from_option(value)
}

fn outcome(value: Result<i32, String>) -> Outcome<String, i32> {
    match value {
        Ok(payload) => Outcome::success(payload),
        Err(error) => Outcome::failure(error),
    }
}

// =============================================================================
// Mappable: identity and composition
// =============================================================================

proptest! {
    #[test]
    fn prop_optional_map_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(optional(value).map(|x| x), optional(value));
    }

    #[test]
    fn prop_optional_map_composition(value in any::<Option<i32>>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);

        let left = optional(value).map(f).map(g);
        let right = optional(value).map(|x| g(f(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_map_identity(value in any::<Result<i32, String>>()) {
        prop_assert_eq!(outcome(value.clone()).map(|x| x), outcome(value));
    }

    #[test]
    fn prop_outcome_map_composition(value in any::<Result<i32, String>>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);

        let left = outcome(value.clone()).map(f).map(g);
        let right = outcome(value).map(|x| g(f(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_nondet_map_identity(items in any::<Vec<i32>>()) {
        prop_assert_eq!(NonDet::of(items.clone()).map(|x| x), NonDet::of(items));
    }

    #[test]
    fn prop_nondet_map_composition(items in any::<Vec<i32>>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);

        let left = NonDet::of(items.clone()).map(f).map(g);
        let right = NonDet::of(items).map(|x| g(f(x)));
        prop_assert_eq!(left, right);
    }

    /// Reader laws are observed through `run`, the only way to inspect one.
    #[test]
    fn prop_reader_map_identity(environment in any::<i32>()) {
        let plain = Reader::new(|e: i32| e.wrapping_mul(3));
        let mapped = Reader::new(|e: i32| e.wrapping_mul(3)).map(|x| x);
        prop_assert_eq!(plain.run(environment), mapped.run(environment));
    }

    #[test]
    fn prop_reader_map_composition(environment in any::<i32>()) {
        let f = |n: i32| n.wrapping_add(1);
        let g = |n: i32| n.wrapping_mul(2);

        let left = Reader::new(|e: i32| e).map(f).map(g);
        let right = Reader::new(|e: i32| e).map(move |x| g(f(x)));
        prop_assert_eq!(left.run(environment), right.run(environment));
    }
}

// =============================================================================
// Chainable: monad laws
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_bind_left_identity(value in any::<i32>()) {
        let f = |x: i32| Outcome::<String, i32>::success(x.wrapping_mul(2));
        prop_assert_eq!(Outcome::<String, ()>::pure(value).bind(f), f(value));
    }

    #[test]
    fn prop_outcome_bind_right_identity(value in any::<Result<i32, String>>()) {
        let m = outcome(value);
        prop_assert_eq!(m.clone().bind(Outcome::<String, ()>::pure), m);
    }

    #[test]
    fn prop_optional_bind_associativity(value in any::<Option<i32>>()) {
        let f = |x: i32| Optional::present(x.wrapping_add(1));
        let g = |x: i32| Optional::present(x.wrapping_mul(2));

        let left = optional(value).bind(f).bind(g);
        let right = optional(value).bind(|x| f(x).bind(g));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_nondet_bind_associativity(items in prop::collection::vec(any::<i32>(), 0..16)) {
        let f = |x: i32| NonDet::of([x, x.wrapping_add(1)]);
        let g = |x: i32| NonDet::of([x.wrapping_mul(2)]);

        let left = NonDet::of(items.clone()).bind_mut(f).bind_mut(g);
        let right = NonDet::of(items).bind_mut(|x| f(x).bind_mut(g));
        prop_assert_eq!(left, right);
    }

    /// Every hand-rolled `lift2` agrees with the bind + pure derivation.
    #[test]
    fn prop_outcome_lift2_matches_derivation(
        a in any::<Result<i32, String>>(),
        b in any::<Result<i32, String>>(),
    ) {
        let left = lift2_via_bind(outcome(a.clone()), outcome(b.clone()), |x, y| x.wrapping_add(y));
        let right = outcome(a).lift2(outcome(b), |x, y| x.wrapping_add(y));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Combinable: applicative identity and tie-breaks
// =============================================================================

#[rstest]
fn applicative_identity_for_every_container() {
    assert_eq!(
        Optional::<()>::pure(3).lift2(Optional::<()>::pure(4), |a, b| a * b),
        Optional::<()>::pure(12)
    );
    assert_eq!(
        Outcome::<String, ()>::pure(3).lift2(Outcome::<String, ()>::pure(4), |a, b| a * b),
        Outcome::<String, ()>::pure(12)
    );
    assert_eq!(
        NonDet::<()>::pure(3).lift2(NonDet::<()>::pure(4), |a: i32, b| a * b),
        NonDet::<()>::pure(12)
    );
}

#[rstest]
#[case(Outcome::failure("left"), Outcome::success(6), Outcome::failure("left"))]
#[case(Outcome::success(5), Outcome::failure("right"), Outcome::failure("right"))]
#[case(Outcome::failure("left"), Outcome::failure("right"), Outcome::failure("left"))]
fn lift2_left_failure_wins_the_tie_break(
    #[case] a: Outcome<&str, i32>,
    #[case] b: Outcome<&str, i32>,
    #[case] expected: Outcome<&str, i32>,
) {
    assert_eq!(a.lift2(b, |x, y| x + y), expected);
}

// =============================================================================
// Short-circuit spies
// =============================================================================

#[rstest]
fn map_is_never_invoked_past_a_short_circuit() {
    let mut calls = 0;
    let absent: Optional<i32> = Optional::absent();
    let result = absent.map(|x| {
        calls += 1;
        x + 1
    });
    assert_eq!(result, Optional::absent());
    assert_eq!(calls, 0);
}

#[rstest]
fn bind_is_never_invoked_past_a_short_circuit() {
    let mut calls = 0;
    let failed: Outcome<&str, i32> = Outcome::failure("err");
    let result = failed.bind(|x| {
        calls += 1;
        Outcome::success(x + 1)
    });
    assert_eq!(result, Outcome::failure("err"));
    assert_eq!(calls, 0);
}

#[rstest]
fn empty_nondet_invokes_nothing() {
    let mut calls = 0;
    let result = NonDet::<i32>::empty().bind_mut(|x| {
        calls += 1;
        NonDet::of([x])
    });
    assert_eq!(result, NonDet::empty());
    assert_eq!(calls, 0);
}

// =============================================================================
// Sequencing
// =============================================================================

proptest! {
    #[test]
    fn prop_sequence_of_successes_collects_in_order(items in prop::collection::vec(any::<i32>(), 0..32)) {
        let wrapped: Vec<Outcome<String, i32>> =
            items.iter().copied().map(Outcome::success).collect();
        prop_assert_eq!(sequence(wrapped), Outcome::success(items));
    }

    /// The first short-circuiting operand wins regardless of position.
    #[test]
    fn prop_sequence_first_failure_wins(
        items in prop::collection::vec(any::<i32>(), 1..16),
        position in any::<prop::sample::Index>(),
    ) {
        let position = position.index(items.len());
        let wrapped: Vec<Outcome<String, i32>> = items
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if index == position {
                    Outcome::failure(format!("broken at {index}"))
                } else {
                    Outcome::success(*value)
                }
            })
            .collect();
        prop_assert_eq!(sequence(wrapped), Outcome::failure(format!("broken at {position}")));
    }
}

#[rstest]
fn sequence_of_nothing_is_pure_nothing() {
    let none: Vec<Optional<i32>> = vec![];
    assert_eq!(sequence(none), Optional::present(Vec::<i32>::new()));
}
