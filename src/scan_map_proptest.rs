#![cfg(test)]

// Property tests for ScanMap kept inside the crate so they do not
// require feature gates to access internal modules.

use crate::scan_map::{InsertError, ScanMap, CAPACITY};
use proptest::prelude::*;
use std::collections::VecDeque;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    RemoveWhere(i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-f]{0,3}", 1..=6).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-f]{0,3}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            any::<i32>().prop_map(OpI::RemoveWhere),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// The model is a plain slot vector running the legacy algorithm
// directly: append below capacity, first-live-match scans, tombstones in
// place.
type Model = Vec<Option<(String, i32)>>;

fn model_get<'a>(model: &'a Model, key: &str) -> Option<&'a i32> {
    model
        .iter()
        .flatten()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

// Property: State-machine equivalence against the slot-vector model.
// Invariants exercised across random operation sequences:
// - Insert appends below CAPACITY and fails without mutation at CAPACITY.
// - Lookup returns the first live match in slot order (oldest wins).
// - Remove tombstones the first live match and returns the owned pair.
// - remove_where tombstones exactly the selected entries and counts them.
// - len equals accepted inserts (never decreases, capped at CAPACITY);
//   live_len and slot-order iteration match the model after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ScanMap<String, i32> = ScanMap::new();
        let mut model: Model = Vec::new();
        let mut accepted = 0usize;

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    if model.len() < CAPACITY {
                        prop_assert_eq!(sut.insert(k.clone(), v), Ok(()));
                        model.push(Some((k, v)));
                        accepted += 1;
                    } else {
                        prop_assert_eq!(
                            sut.insert(k, v),
                            Err(InsertError::CapacityExhausted)
                        );
                    }
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    let pos = model.iter().position(|slot| {
                        slot.as_ref().map(|(mk, _)| mk == k).unwrap_or(false)
                    });
                    let expected = pos.and_then(|p| model[p].take());
                    prop_assert_eq!(sut.remove(k.as_str()), expected);
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k.as_str()), model_get(&model, k));
                }
                OpI::Contains(s) => {
                    let has = sut.contains_key(s.as_str());
                    prop_assert_eq!(has, model_get(&model, &s).is_some());
                }
                OpI::RemoveWhere(t) => {
                    let mut expected = 0usize;
                    for slot in model.iter_mut() {
                        if slot.as_ref().map(|(_, v)| *v < t).unwrap_or(false) {
                            *slot = None;
                            expected += 1;
                        }
                    }
                    let got = sut.remove_where(|_, v| *v < t);
                    prop_assert_eq!(got, expected);
                }
                OpI::Iterate => {
                    let s: Vec<(String, i32)> =
                        sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    let m: Vec<(String, i32)> =
                        model.iter().flatten().cloned().collect();
                    prop_assert_eq!(s, m);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.len(), accepted);
            prop_assert!(sut.len() <= CAPACITY);
            prop_assert_eq!(sut.live_len(), model.iter().flatten().count());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            for k in &pool {
                prop_assert_eq!(sut.get(k.as_str()), model_get(&model, k));
            }
        }
    }
}

// Property: a single repeated key behaves as a FIFO of shadowed values.
// Lookup always sees the oldest surviving insertion; removal pops it and
// resurfaces the next duplicate; tombstones keep consuming slots.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_shadowed_duplicates_resurface_in_order(
        ops in proptest::collection::vec(
            prop_oneof![any::<i32>().prop_map(Some), Just(None)],
            1..40,
        )
    ) {
        let mut sut: ScanMap<String, i32> = ScanMap::new();
        let mut queue: VecDeque<i32> = VecDeque::new();
        let mut slots = 0usize;

        for op in ops {
            match op {
                Some(v) => {
                    if slots < CAPACITY {
                        prop_assert_eq!(sut.insert("k".to_string(), v), Ok(()));
                        queue.push_back(v);
                        slots += 1;
                    } else {
                        prop_assert!(sut.insert("k".to_string(), v).is_err());
                    }
                }
                None => {
                    let expected = queue.pop_front().map(|v| ("k".to_string(), v));
                    prop_assert_eq!(sut.remove("k"), expected);
                }
            }

            prop_assert_eq!(sut.get("k"), queue.front());
            prop_assert_eq!(sut.live_len(), queue.len());
            prop_assert_eq!(sut.len(), slots);
        }
    }
}
