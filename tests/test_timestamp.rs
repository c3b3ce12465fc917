//! Property-based tests for the timestamp algebra
//!
//! This module tests the properties every hybrid logical clock relies on:
//! - Total order: antisymmetric, reflexive, transitive, agrees with equality
//! - Advance monotonicity: a local event always sorts after its predecessor
//! - Merge dominance: a merge sorts after both the local and remote inputs
//! - Closeness: the physical part never exceeds the largest input reading

#![allow(special_module_name)]

use hlclock::prelude::*;
use proptest::prelude::*;

use lib::*;

proptest! {
    #![proptest_config(algebra_config())]

    /// Property: compare(a, b) == -compare(b, a) and compare(a, a) == 0
    #[test]
    fn compare_is_antisymmetric(
        a in any_timestamp_strategy(),
        b in any_timestamp_strategy(),
    ) {
        prop_assert_eq!(a.compare(&b), -b.compare(&a));
        prop_assert_eq!(a.compare(&a), 0);
    }

    /// Property: compare(a, b) == 0 exactly when a == b
    #[test]
    fn compare_agrees_with_equality(
        a in timestamp_strategy(),
        b in timestamp_strategy(),
    ) {
        prop_assert_eq!(a.compare(&b) == 0, a == b);
        prop_assert_eq!(
            a == b,
            a.physical() == b.physical() && a.counter() == b.counter()
        );
    }

    /// Property: a <= b and b <= c imply a <= c
    #[test]
    fn compare_is_transitive(
        a in timestamp_strategy(),
        b in timestamp_strategy(),
        c in timestamp_strategy(),
    ) {
        if a.compare(&b) <= 0 && b.compare(&c) <= 0 {
            prop_assert!(a.compare(&c) <= 0);
        }
    }

    /// Property: physical time decides before the counter
    #[test]
    fn compare_is_lexicographic(
        a in any_timestamp_strategy(),
        b in any_timestamp_strategy(),
    ) {
        let expected = (a.physical(), a.counter()).cmp(&(b.physical(), b.counter()));
        prop_assert_eq!(a.cmp(&b), expected);
    }

    /// Property: advancing always moves strictly forward
    #[test]
    fn advance_is_strictly_monotonic(
        t in timestamp_strategy(),
        observed in physical_strategy(),
    ) {
        let next = t.advanced(observed);
        prop_assert!(assert_strictly_after(&t, &next));
    }

    /// Property: advancing lands on max(physical, observed), counter resets on progress
    #[test]
    fn advance_tracks_physical_time(
        t in timestamp_strategy(),
        observed in wide_physical_strategy(),
    ) {
        let next = t.advanced(observed);
        prop_assert_eq!(next.physical(), t.physical().max(observed));
        if observed > t.physical() {
            prop_assert_eq!(next.counter(), 0);
        } else {
            prop_assert_eq!(next.counter(), t.counter() + 1);
        }
    }

    /// Property: the in-place and value forms agree and leave copies alone
    #[test]
    fn advance_in_place_matches_value_form(
        t in any_timestamp_strategy(),
        observed in wide_physical_strategy(),
    ) {
        let copy = t;
        let mut in_place = t;
        in_place.advance(observed);
        prop_assert_eq!(in_place, t.advanced(observed));
        prop_assert_eq!(copy, t);
    }

    /// Property: a merge sorts strictly after both inputs
    #[test]
    fn merge_dominates_both_inputs(
        local in timestamp_strategy(),
        remote in timestamp_strategy(),
        observed in physical_strategy(),
    ) {
        let merged = local.merged(observed, remote);
        prop_assert!(assert_strictly_after(&local, &merged));
        prop_assert!(assert_strictly_after(&remote, &merged));
    }

    /// Property: a merge never runs ahead of the largest physical input
    #[test]
    fn merge_stays_close_to_physical_time(
        local in timestamp_strategy(),
        remote in timestamp_strategy(),
        observed in physical_strategy(),
    ) {
        let merged = local.merged(observed, remote);
        let max_physical = local.physical().max(remote.physical()).max(observed);
        prop_assert_eq!(merged.physical(), max_physical);
        if observed > local.physical() && observed > remote.physical() {
            prop_assert_eq!(merged.counter(), 0);
        }
    }

    /// Property: the in-place and value forms of merge agree
    #[test]
    fn merge_in_place_matches_value_form(
        local in any_timestamp_strategy(),
        remote in any_timestamp_strategy(),
        observed in wide_physical_strategy(),
    ) {
        let mut in_place = local;
        in_place.merge(observed, remote);
        prop_assert_eq!(in_place, local.merged(observed, remote));
    }

    /// Property: merging is symmetric in its two logical inputs
    #[test]
    fn merge_is_symmetric_in_inputs(
        local in timestamp_strategy(),
        remote in timestamp_strategy(),
        observed in physical_strategy(),
    ) {
        prop_assert_eq!(
            local.merged(observed, remote),
            remote.merged(observed, local)
        );
    }

    /// Property: merging a timestamp with itself is a local event
    #[test]
    fn merge_with_self_is_advance(
        t in timestamp_strategy(),
        observed in physical_strategy(),
    ) {
        prop_assert_eq!(t.merged(observed, t), t.advanced(observed));
    }
}

const T: i64 = 1_700_000_000;
const BEFORE: i64 = T - 1000;
const AFTER: i64 = T + 1000;

#[test]
fn advance_scenarios() {
    let cases = [
        ("physical newer", Timestamp::new(T, 0), AFTER, Timestamp::new(AFTER, 0)),
        ("physical drifted back", Timestamp::new(T, 0), BEFORE, Timestamp::new(T, 1)),
        ("physical equal", Timestamp::new(T, 0), T, Timestamp::new(T, 1)),
    ];

    for (name, start, observed, want) in cases {
        assert_eq!(start.advanced(observed), want, "{name}");
    }
}

#[test]
fn merge_scenarios() {
    let cases = [
        (
            "physical newer than both",
            Timestamp::new(T, 0),
            AFTER,
            Timestamp::new(T, 1),
            Timestamp::new(AFTER, 0),
        ),
        (
            "physical drifted back, remote counter newer",
            Timestamp::new(T, 0),
            BEFORE,
            Timestamp::new(T, 1),
            Timestamp::new(T, 2),
        ),
        (
            "physical equal to remote, remote newer",
            Timestamp::new(T, 0),
            AFTER,
            Timestamp::new(AFTER, 1),
            Timestamp::new(AFTER, 2),
        ),
        (
            "physical equal to local, local newer",
            Timestamp::new(AFTER, 0),
            AFTER,
            Timestamp::new(T, 3),
            Timestamp::new(AFTER, 1),
        ),
    ];

    for (name, local, observed, remote, want) in cases {
        assert_eq!(local.merged(observed, remote), want, "{name}");
    }
}

#[test]
fn compare_scenarios() {
    let cases = [
        ("equal", Timestamp::new(T, 0), Timestamp::new(T, 0), 0),
        ("greater counter", Timestamp::new(T, 1), Timestamp::new(T, 0), 1),
        ("greater physical", Timestamp::new(AFTER, 0), Timestamp::new(T, 0), 1),
        ("lesser physical", Timestamp::new(BEFORE, 0), Timestamp::new(T, 0), -1),
        ("lesser counter", Timestamp::new(T, 0), Timestamp::new(T, 1), -1),
    ];

    for (name, a, b, want) in cases {
        assert_eq!(a.compare(&b), want, "{name}");
    }
}
