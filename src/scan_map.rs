//! Fixed-capacity associative store with linear-scan lookup and
//! tombstoned removal.
//!
//! This is a faithful port of a legacy hash-table shim, not a general
//! purpose map. The shim's observable quirks are load-bearing for code
//! ported against it, so they are preserved here as documented contract:
//!
//! * Storage is a flat run of [`CAPACITY`] slots. Insertion appends at
//!   the high-water position and never probes, so a key content-equal to
//!   an existing live entry is stored again and shadowed by the older
//!   entry until that entry is removed.
//! * Lookup walks the slots in insertion order and returns the first
//!   live entry whose key compares equal. No hashing is involved.
//! * Removal blanks the slot in place (a tombstone). Tombstones keep
//!   their position, still count against capacity, and are never reused.
//! * [`len`](ScanMap::len) reports the high-water slot count, live and
//!   tombstoned alike. It never decreases.
//!
//! The store still carries a [`BuildHasher`] so callers can compute the
//! hash a legacy caller would have registered, but no operation consults
//! it for slot selection. Key equality is the `Eq` impl of the key type;
//! with the default [`ContentBuildHasher`] seat the pairing matches the
//! original byte-content hash and equality callbacks.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use thiserror::Error;

use crate::content::ContentBuildHasher;

/// Slot count of every store. Fixed; tombstones count against it.
pub const CAPACITY: usize = 16;

/// Error returned by [`ScanMap::insert`] when no slot is left.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    /// Every slot is occupied or tombstoned. The store is unchanged.
    #[error("store is full: all {cap} slots are occupied or tombstoned", cap = CAPACITY)]
    CapacityExhausted,
}

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity, append-only associative store. See the module docs
/// for the legacy semantics it preserves.
pub struct ScanMap<K, V, S = ContentBuildHasher> {
    slots: Vec<Option<Entry<K, V>>>,
    hash_builder: S,
}

impl<K, V> ScanMap<K, V> {
    pub fn new() -> Self {
        ScanMap::with_hasher(ContentBuildHasher::default())
    }

    /// Same as [`new`](ScanMap::new); the hint is accepted for call-site
    /// compatibility and ignored, capacity is always [`CAPACITY`].
    pub fn with_capacity_hint(_hint: usize) -> Self {
        ScanMap::new()
    }
}

impl<K, V, S> ScanMap<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        ScanMap {
            slots: Vec::with_capacity(CAPACITY),
            hash_builder,
        }
    }

    /// High-water slot count: the number of insertions ever accepted.
    /// Tombstoned entries still count. This is the legacy `size` field
    /// and never decreases.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Count of live (non-tombstoned) entries.
    pub fn live_len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// True when no slot has ever been written. A store whose entries
    /// have all been tombstoned is not empty, matching [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Stores `key`/`value` in the next free slot.
    ///
    /// No equality scan happens on insertion: a duplicate of a live key
    /// is appended and stays shadowed by the older entry. When the store
    /// is full the pair is rejected and dropped; callers that must keep
    /// ownership on failure should check `len() < CAPACITY` first.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), InsertError> {
        if self.slots.len() == CAPACITY {
            return Err(InsertError::CapacityExhausted);
        }
        self.slots.push(Some(Entry { key, value }));
        Ok(())
    }

    /// First live entry whose key compares equal, in insertion order.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).map(|entry| &entry.value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.slots
            .iter_mut()
            .flatten()
            .find(|entry| entry.key.borrow() == key)
            .map(|entry| &mut entry.value)
    }

    /// Like [`get`](Self::get) but also hands back the stored key, so a
    /// caller probing with an equal-but-not-identical key can recover
    /// the spelling the store holds.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).map(|entry| (&entry.key, &entry.value))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Tombstones the first live entry whose key compares equal and
    /// returns the owned pair. The slot is not reclaimed. If a shadowed
    /// duplicate of the key exists in a later slot it becomes visible.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let idx = self.slots.iter().position(|slot| {
            slot.as_ref()
                .map(|entry| entry.key.borrow() == key)
                .unwrap_or(false)
        })?;
        self.slots[idx]
            .take()
            .map(|entry| (entry.key, entry.value))
    }

    /// Tombstones every live entry the predicate selects, dropping the
    /// removed pairs in place. Returns how many entries were removed.
    pub fn remove_where<F>(&mut self, mut pred: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut removed = 0;
        for slot in &mut self.slots {
            let selected = slot
                .as_ref()
                .map(|entry| pred(&entry.key, &entry.value))
                .unwrap_or(false);
            if selected {
                *slot = None;
                removed += 1;
            }
        }
        removed
    }

    /// Live entries in slot (insertion) order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// Hash of `key` under the carried hasher. Provided for callers that
    /// interoperate with the legacy callback pair; the store itself
    /// never consults it.
    pub fn key_hash(&self, key: &K) -> u64
    where
        K: Hash,
        S: BuildHasher,
    {
        self.hash_builder.hash_one(key)
    }

    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.slots
            .iter()
            .flatten()
            .find(|entry| entry.key.borrow() == key)
    }
}

impl<K, V, S: Default> Default for ScanMap<K, V, S> {
    fn default() -> Self {
        ScanMap::with_hasher(S::default())
    }
}

/// Iterator over live entries in slot order.
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Option<Entry<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .flatten()
            .next()
            .map(|entry| (&entry.key, &entry.value))
    }
}
