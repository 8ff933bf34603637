//! String utilities for the ported boundary: formatted construction with an
//! exact-size dry run, bounded duplication, and release of a
//! terminator-delimited vector of owned strings.
//!
//! Each produced string is an independently owned `String`; the original
//! convention of a trailing NUL dissolves into the Rust length. A "vector
//! of strings" is `Vec<Option<String>>` where the first `None` entry is the
//! terminator.

use core::fmt::{self, Write};

/// `fmt::Write` sink that only counts bytes. Used for the dry-run pass.
struct CountWriter {
    written: usize,
}

impl Write for CountWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.written += s.len();
        Ok(())
    }
}

/// Formats `args` into a freshly allocated `String` of exactly the required
/// length, learned from a dry-run pass over the same arguments.
///
/// Prefer the [`formatted!`](macro@crate::formatted) macro, which builds
/// the `Arguments` for you.
///
/// # Panics
/// Panics if a `Display` implementation returns an error without an
/// underlying writer failure (the same contract as `ToString`).
pub fn formatted(args: fmt::Arguments<'_>) -> String {
    let mut counter = CountWriter { written: 0 };
    fmt::write(&mut counter, args)
        .expect("a Display implementation returned an error unexpectedly");

    let mut out = String::with_capacity(counter.written);
    fmt::write(&mut out, args)
        .expect("a Display implementation returned an error unexpectedly");

    // Both passes see the same arguments; formatting is deterministic.
    debug_assert_eq!(out.len(), counter.written);
    out
}

/// Builds a `String` from format arguments via [`formatted`].
///
/// ```
/// # use legacy_collections::formatted;
/// assert_eq!(formatted!("{}-{}", 7, "x"), "7-x");
/// ```
#[macro_export]
macro_rules! formatted {
    ($($arg:tt)*) => {
        $crate::strings::formatted(::core::format_args!($($arg)*))
    };
}

/// Copies at most `min(n, src.len())` bytes of `src` into a new `String`.
///
/// When the byte limit falls inside a multi-byte character, the copy backs
/// off to the previous character boundary so the result is always valid
/// UTF-8. On ASCII input this is byte-for-byte the classic bounded
/// duplication.
pub fn bounded_dup(src: &str, n: usize) -> String {
    let mut end = src.len().min(n);
    while !src.is_char_boundary(end) {
        end -= 1;
    }
    src[..end].to_owned()
}

/// Releases a terminator-delimited vector of owned strings.
///
/// A `None` argument is a no-op returning 0. Otherwise every entry up to
/// the first `None` terminator is released, then the vector itself; the
/// returned count is the number of strings released up to the terminator.
/// Entries after a terminator (a malformed input the original convention
/// would have leaked) are freed together with the container and are not
/// counted.
pub fn release_string_vec(vec: Option<Vec<Option<String>>>) -> usize {
    let Some(entries) = vec else {
        return 0;
    };
    entries.iter().take_while(|entry| entry.is_some()).count()
    // `entries` (terminator prefix, any malformed tail, and the container)
    // is dropped here.
}
