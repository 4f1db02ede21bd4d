//! Text normalization.
//!
//! Before a book is split into tokens it is lower-cased and stripped of a
//! fixed set of nuisance characters:
//!
//! | Class | Matches |
//! |-------|---------|
//! | Ideographic full stop | `。` (U+3002) |
//! | At sign | `@` |
//! | Hash | `#` |
//! | Decimal digit | any char in Unicode category `Nd` (`0`-`9`, `٣`, `３`, ...) |
//!
//! Matches are deleted, not replaced, so the fragments on either side fuse:
//!
//! ```text
//! "Data#1@Book。2"  ->  lower  ->  "data#1@book。2"  ->  strip  ->  "databook"
//! ```
//!
//! Word boundaries are only introduced later, by [`tokenize`](crate::tokenize),
//! on whatever non-word characters survive.

use std::sync::LazyLock;

use regex::Regex;

/// Character class removed by [`normalize`].
pub const NUISANCE_PATTERN: &str = r"[\x{3002}@#\p{Nd}]";

static NUISANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUISANCE_PATTERN).expect("nuisance pattern is valid"));

/// Lower-case `text` and delete every nuisance character.
///
/// Pure and total: any `&str` normalizes.
///
/// ```rust
/// use bookslice::normalize;
///
/// assert_eq!(normalize("Data#1@Book。2"), "databook");
/// assert_eq!(normalize("Saxo Grammaticus"), "saxo grammaticus");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NUISANCE.replace_all(&lowered, "").into_owned()
}

/// Whether `c` is removed by [`normalize`].
pub fn is_nuisance(c: char) -> bool {
    let mut buf = [0u8; 4];
    NUISANCE.is_match(c.encode_utf8(&mut buf))
}
