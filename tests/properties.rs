// Copyright 2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Property tests driven by arbitrary operation sequences, checking
//! the invariants a hand-picked scenario can't cover: differential
//! agreement with `std::collections::HashMap`, round-trip set equality
//! independent of insertion order, and the load-factor bound.

use std::collections::HashSet;

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use robin_map::HashMap;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32, i32),
    Remove(i32),
}

impl quickcheck::Arbitrary for Op {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let key = i32::arbitrary(g) % 64;
        if bool::arbitrary(g) {
            Op::Insert(key, i32::arbitrary(g))
        } else {
            Op::Remove(key)
        }
    }
}

/// A reference model: `std::collections::HashMap` already has this
/// crate's target semantics for "what does the map contain", so
/// differential-test against it rather than re-deriving the expected
/// state by hand for every sequence.
fn apply_to_both(ops: &[Op]) -> (HashMap<i32, i32>, std::collections::HashMap<i32, i32>) {
    let mut map = HashMap::new();
    let mut model = std::collections::HashMap::new();
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                map.insert(k, v);
                model.insert(k, v);
            }
            Op::Remove(k) => {
                map.remove(&k);
                model.remove(&k);
            }
        }
    }
    (map, model)
}

#[quickcheck]
fn matches_std_hashmap_contents(ops: Vec<Op>) -> bool {
    let (map, model) = apply_to_both(&ops);
    if map.len() != model.len() {
        return false;
    }
    model.iter().all(|(k, v)| map.get(k) == Some(v))
}

#[quickcheck]
fn absent_keys_are_absent(ops: Vec<Op>, probe: i32) -> bool {
    let probe = probe % 64;
    let (map, model) = apply_to_both(&ops);
    (map.get(&probe).is_some()) == (model.get(&probe).is_some())
}

#[quickcheck]
fn len_matches_occupied_count(ops: Vec<Op>) -> bool {
    let (map, _) = apply_to_both(&ops);
    map.len() == map.iter().count()
}

#[quickcheck]
fn load_factor_bound_holds(ops: Vec<Op>) -> bool {
    let (map, _) = apply_to_both(&ops);
    map.capacity() == 0 || map.len() <= (map.max_load_factor() * map.capacity() as f32) as usize + 1
}

/// A lookup on every surviving key after a sequence of inserts/removes
/// must return the same result a table built fresh from just the
/// surviving entries would — i.e. erasure's backward shift can't leave
/// a key unreachable behind a gap it should have closed.
#[quickcheck]
fn survivors_match_a_freshly_built_table(ops: Vec<Op>) -> bool {
    let (map, model) = apply_to_both(&ops);
    let fresh: HashMap<i32, i32> = model.iter().map(|(&k, &v)| (k, v)).collect();

    map.len() == fresh.len() && fresh.iter().all(|(k, v)| map.get(k) == Some(v))
}

#[quickcheck]
fn idempotent_double_insert_then_remove(key: i32, v1: i32, v2: i32) -> bool {
    let mut map = HashMap::new();
    map.insert(key, v1);
    map.insert(key, v2);
    map.remove(&key);
    map.get(&key).is_none()
}

#[quickcheck]
fn remove_on_absent_key_is_noop(existing: Vec<i32>, absent: i32) -> TestResult {
    if existing.contains(&absent) {
        return TestResult::discard();
    }
    let mut map: HashMap<i32, i32> = existing.iter().map(|&k| (k, k)).collect();
    let before = map.len();
    let removed = map.remove(&absent);
    TestResult::from_bool(removed.is_none() && map.len() == before)
}

#[quickcheck]
fn round_trip_independent_of_insertion_order(keys: HashSet<i32>, rotate_by: usize) -> bool {
    let forward: Vec<i32> = keys.into_iter().collect();
    let mut rotated = forward.clone();
    if !rotated.is_empty() {
        rotated.rotate_left(rotate_by % rotated.len());
    }

    let map_a: HashMap<i32, i32> = forward.iter().map(|&k| (k, k)).collect();
    let map_b: HashMap<i32, i32> = rotated.iter().map(|&k| (k, k)).collect();

    map_a.len() == map_b.len() && map_a.iter().all(|(k, v)| map_b.get(k) == Some(v))
}
