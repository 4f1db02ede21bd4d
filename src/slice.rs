//! The Slice type: a window of tokens with position metadata.

/// A contiguous window of tokens from one book.
///
/// ## Token Offsets
///
/// `start` and `end` index the book's filtered token sequence, not bytes of
/// the raw text. Rejoining the tokens with single spaces is lossy: the
/// punctuation and whitespace that separated them in the source is gone, only
/// their order survives.
///
/// ```text
/// Tokens:  [rex, danorum, erat, potens, bello]   window = 2
/// Slice 0: "rex danorum"    [0..2]
/// Slice 1: "erat potens"    [2..4]
/// Slice 2: "bello"          [4..5]  <- last slice may be shorter
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    /// Space-joined token text.
    pub text: String,
    /// Index of the first token of this slice in the book.
    pub start: usize,
    /// Index one past the last token of this slice in the book.
    pub end: usize,
    /// Zero-based position of this slice in its book.
    pub index: usize,
}

impl Slice {
    /// Create a new slice.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// Number of tokens in this slice.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.end - self.start
    }

    /// Whether this slice holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The token span of this slice in the book.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slice {{ index: {}, tokens: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.token_count()
        )
    }
}
