//! Tokenization of normalized text.
//!
//! Normalized text is split on maximal runs of non-word characters. A word
//! character is a letter (`\p{L}`), a number of any kind (`\p{N}`: `7`, `²`,
//! `½`, `Ⅻ`) or `_`. Combining marks and other connector punctuation such as
//! `‿` separate words.
//! Pieces whose length in chars is at most `min_len` are dropped, which
//! also discards the empty pieces produced by leading, trailing, or doubled
//! separators.
//!
//! ```text
//! "a bb c dd"  --split-->  ["a", "bb", "c", "dd"]  --len > 1-->  ["bb", "dd"]
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DEFAULT_MIN_TOKEN_LEN;

/// Character class of word characters.
pub const WORD_CLASS: &str = r"[\p{L}\p{N}_]";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_]+").expect("separator pattern is valid"));

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_CLASS).expect("word pattern is valid"));

/// Whether `c` can be part of a token.
pub fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD.is_match(c.encode_utf8(&mut buf))
}

/// A word-like unit borrowed from normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// The token text.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Wrap a piece of normalized text.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The token text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in chars, the measure the minimum-length filter uses.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

/// Split normalized text into tokens longer than one char.
///
/// ```rust
/// use bookslice::tokenize;
///
/// let tokens: Vec<&str> = tokenize("a bb c dd").iter().map(|t| t.text).collect();
/// assert_eq!(tokens, ["bb", "dd"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    tokenize_with_min_len(text, DEFAULT_MIN_TOKEN_LEN)
}

/// Split normalized text into tokens longer than `min_len` chars.
///
/// Order is preserved; nothing is sorted or deduplicated.
pub fn tokenize_with_min_len(text: &str, min_len: usize) -> Vec<Token<'_>> {
    NON_WORD
        .split(text)
        .map(Token::new)
        .filter(|t| t.char_len() > min_len)
        .collect()
}
