//! legacy-collections: string and collection primitives that preserve
//! the observable behavior of a legacy C utility shim, for porting
//! applications that were written against it.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: turn the shim's quirks into a documented, tested contract
//!   while giving each container a safe, owning Rust API.
//! - Pieces:
//!   - ScanMap<K, V, S>: fixed-capacity associative store; lookups scan
//!     slots in insertion order, insertion appends without probing,
//!     removal tombstones in place, `len` is a high-water count. Carries
//!     a `BuildHasher` it never consults for placement.
//!   - DynArray<T>: growable array with a fixed initial capacity and an
//!     explicitly tracked doubling growth schedule.
//!   - NodeList<T>: doubly-linked list in a slotmap arena addressed by
//!     copyable `NodeRef` handles; keeps the head-threading call
//!     contract where every mutating call returns the current head.
//!   - content: the byte-content hash (djb2 times-33) and equality pair
//!     the shim registered for string keys, plus a `Hasher` adapter.
//!   - strings: formatted construction sized by a counting dry run,
//!     length-bounded duplication, and terminator-delimited release of
//!     string vectors.
//!
//! Constraints
//! - Single-threaded call discipline: mutation goes through `&mut self`;
//!   no interior mutability, no atomics.
//! - ScanMap capacity is fixed at 16 slots and tombstones are never
//!   reclaimed; exhaustion is a reportable error, not a growth trigger.
//! - Lookup cost is O(live entries). These containers exist for small,
//!   compatibility-sensitive data sets.
//!
//! Ported-behavior contract
//! - A duplicate ScanMap key occupies a fresh slot and stays shadowed by
//!   the oldest live entry; removing that entry resurfaces the next one.
//! - `ScanMap::len` counts accepted insertions and never decreases.
//! - `NodeList::append` walks from the given node to the tail, an
//!   O(length) traversal; callers thread the returned head handle.
//! - The carried hasher is observable through `key_hash` but placement
//!   and lookup are driven by key equality alone.
//!
//! Redesigned edges (where the original was unsafe rather than quirky)
//! - Capacity exhaustion returns an `InsertError` instead of a status
//!   flag callers routinely ignored.
//! - Removal hands back the owned pair (the original unlinked entries
//!   and leaked them); `remove_where` and container drop release values
//!   in place.
//! - A stale `NodeRef` resolves to `None` thanks to generational arena
//!   keys instead of dangling; a stale list anchor panics rather than
//!   corrupting a chain.
//! - String-vector release tolerates malformed vectors: counting stops
//!   at the first terminator but every held buffer is still freed.
//!
//! Notes and non-goals
//! - Not thread-safe and not meant to become so.
//! - No growth or tombstone compaction for ScanMap; repairing the data
//!   structure would change behavior ported callers depend on.
//! - NodeList arenas may hold several chains; `len` counts nodes across
//!   all of them.

pub mod content;
pub mod dyn_array;
pub mod node_list;
pub mod scan_map;
mod scan_map_proptest;
pub mod strings;

// Public surface
pub use content::{content_eq, content_hash, ContentBuildHasher, ContentHasher};
pub use dyn_array::DynArray;
pub use node_list::{NodeList, NodeRef};
pub use scan_map::{InsertError, ScanMap};
pub use strings::{bounded_dup, formatted, release_string_vec};
