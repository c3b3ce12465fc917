//! QuickCheck tests for the timestamp total order
//!
//! Timestamps are generated as raw `(physical, counter)` pairs so the whole
//! value range is covered, including the sign boundary of the physical part.

use hlclock::prelude::*;
use quickcheck_macros::quickcheck;

fn ts((physical, counter): (i64, u16)) -> Timestamp {
    Timestamp::new(physical, counter)
}

#[quickcheck]
fn ordering_matches_tuple_ordering(a: (i64, u16), b: (i64, u16)) -> bool {
    ts(a).cmp(&ts(b)) == a.cmp(&b)
}

#[quickcheck]
fn compare_is_antisymmetric(a: (i64, u16), b: (i64, u16)) -> bool {
    ts(a).compare(&ts(b)) == -ts(b).compare(&ts(a)) && ts(a).compare(&ts(a)) == 0
}

#[quickcheck]
fn compare_is_transitive(a: (i64, u16), b: (i64, u16), c: (i64, u16)) -> bool {
    let (a, b, c) = (ts(a), ts(b), ts(c));
    !(a.compare(&b) <= 0 && b.compare(&c) <= 0) || a.compare(&c) <= 0
}

#[quickcheck]
fn byte_order_matches_timestamp_order(a: (i64, u16), b: (i64, u16)) -> bool {
    ts(a).to_bytes().cmp(&ts(b).to_bytes()) == ts(a).cmp(&ts(b))
}

#[quickcheck]
fn binary_round_trip(a: (i64, u16)) -> bool {
    Timestamp::decode(&ts(a).to_bytes()) == Ok(ts(a))
}

#[quickcheck]
fn sorting_is_stable_under_encoding(raw: Vec<(i64, u16)>) -> bool {
    let mut by_value: Vec<Timestamp> = raw.iter().copied().map(ts).collect();
    let mut by_bytes = by_value.clone();

    by_value.sort();
    by_bytes.sort_by_key(Timestamp::to_bytes);

    by_value == by_bytes
}
