// DynArray integration suite (consolidated).
//
// The core invariants exercised:
// - Geometry: tracked capacity starts at 16 and doubles exactly when a
//   push would pass it; it never shrinks.
// - Order: pushes append; indexing and the slice view agree; draining
//   yields elements in insertion order.
// - Ownership: the array owns its elements and drops them with itself.
use legacy_collections::DynArray;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug)]
struct Counted(Rc<Cell<usize>>);

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

// Test: doubling growth schedule across the first few thresholds.
// Assumes: capacity changes only when a push would exceed it.
// Verifies: (len, capacity) checkpoints while pushing 100 elements.
#[test]
fn growth_doubles_at_thresholds() {
    let mut arr = DynArray::new();
    let mut checkpoints = Vec::new();
    for i in 0..100usize {
        arr.push(i);
        if matches!(arr.len(), 16 | 17 | 32 | 33 | 64 | 65 | 100) {
            checkpoints.push((arr.len(), arr.capacity()));
        }
    }
    assert_eq!(
        checkpoints,
        [
            (16, 16),
            (17, 32),
            (32, 32),
            (33, 64),
            (64, 64),
            (65, 128),
            (100, 128),
        ]
    );
}

// Test: ordering through the slice view and indexing.
// Verifies: as_slice equals the push order; index agrees with get.
#[test]
fn preserves_push_order() {
    let mut arr = DynArray::new();
    for v in ["a", "b", "c"] {
        arr.push(v.to_string());
    }
    assert_eq!(arr.as_slice().len(), 3);
    assert_eq!(arr[0], "a");
    assert_eq!(arr[2], "c");
    assert_eq!(arr.get(1).map(String::as_str), Some("b"));
    assert_eq!(arr.get(3), None);

    let joined: String = arr.iter().map(String::as_str).collect();
    assert_eq!(joined, "abc");
}

// Test: draining moves elements out in order.
// Verifies: into_elements yields the push order and reports its length.
#[test]
fn into_elements_drains_in_order() {
    let mut arr = DynArray::new();
    for i in 0..20 {
        arr.push(i);
    }
    let drained = arr.into_elements();
    assert_eq!(drained.len(), 20);
    let values: Vec<i32> = drained.collect();
    assert_eq!(values, (0..20).collect::<Vec<_>>());
}

// Test: element ownership ends with the array.
// Assumes: Counted::drop runs once per element.
// Verifies: dropping the array drops every element exactly once.
#[test]
fn drop_releases_elements() {
    let drops = Rc::new(Cell::new(0));
    let mut arr = DynArray::new();
    for _ in 0..3 {
        arr.push(Counted(drops.clone()));
    }
    assert_eq!(drops.get(), 0);
    drop(arr);
    assert_eq!(drops.get(), 3);
}
