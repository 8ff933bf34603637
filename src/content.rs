//! Byte-string content hash and equality.
//!
//! The hash is the classic multiplicative string hash: state seeded with
//! 5381, each byte folded as `state * 33 + byte` with wrapping 32-bit
//! arithmetic. In this crate the hash value is only ever produced for call
//! sites that structurally need one; [`ScanMap`](crate::ScanMap) compares
//! keys by content and never consults the hash for slot selection.
//! [`ContentHasher`] adapts the same fold to `core::hash::Hasher` so it can
//! occupy a `BuildHasher` seat.

use core::hash::{BuildHasherDefault, Hasher};

/// Hash the exact bytes of `key`: seed 5381, fold `state * 33 + byte`.
#[inline]
pub fn content_hash(key: &[u8]) -> u32 {
    let mut state: u32 = 5381;
    for &byte in key {
        // state * 33 + byte, the shift-add form of the original.
        state = state
            .wrapping_shl(5)
            .wrapping_add(state)
            .wrapping_add(u32::from(byte));
    }
    state
}

/// Byte-wise content equality of two byte strings.
#[inline]
pub fn content_eq(a: &[u8], b: &[u8]) -> bool {
    a == b
}

/// `Hasher` that folds every written byte through the [`content_hash`] step.
///
/// `finish` widens the 32-bit state to `u64`. Note that hashing through the
/// `Hash` trait includes whatever framing bytes the type's `Hash` impl
/// writes (e.g. `str` appends a terminator), so `hash_one` on a `&str` is
/// not byte-for-byte [`content_hash`]; feeding raw bytes via `write` is.
#[derive(Clone, Debug)]
pub struct ContentHasher {
    state: u32,
}

impl Default for ContentHasher {
    fn default() -> Self {
        ContentHasher { state: 5381 }
    }
}

impl Hasher for ContentHasher {
    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self
                .state
                .wrapping_shl(5)
                .wrapping_add(self.state)
                .wrapping_add(u32::from(byte));
        }
    }
}

/// Default `BuildHasher` seat for [`ScanMap`](crate::ScanMap).
pub type ContentBuildHasher = BuildHasherDefault<ContentHasher>;
