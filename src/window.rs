//! Fixed-size token windows.
//!
//! ## How It Works
//!
//! ```text
//! size = 3
//!
//! Tokens:  [t0 t1 t2 t3 t4 t5 t6 t7]
//!
//! Slice 0: "t0 t1 t2"   [0..3]
//! Slice 1: "t3 t4 t5"   [3..6]   <- starts at 0 + 3
//! Slice 2: "t6 t7"      [6..8]   <- final slice holds the remainder
//! ```
//!
//! Windows never overlap and the step always equals the size, so a book of
//! `L` tokens yields `ceil(L / size)` slices, and zero slices (not one empty
//! slice) when `L == 0`.

use crate::config::DEFAULT_WINDOW_SIZE;
use crate::{Error, Result, Slice, Token};

/// Splits a token sequence into consecutive windows of at most `size` tokens.
///
/// ## Example
///
/// ```rust
/// use bookslice::{tokenize, TokenWindower};
///
/// let windower = TokenWindower::new(2);
/// let tokens = tokenize("rex danorum erat potens bello");
/// let slices = windower.window(&tokens);
///
/// assert_eq!(slices.len(), 3);
/// assert_eq!(slices[0].text, "rex danorum");
/// assert_eq!(slices[2].text, "bello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenWindower {
    size: usize,
}

impl TokenWindower {
    /// Create a windower.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "window size must be > 0");
        Self { size }
    }

    /// Create a windower, rejecting a zero size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindowSize`] if `size == 0`.
    pub fn try_new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidWindowSize(size));
        }
        Ok(Self { size })
    }

    /// Maximum tokens per slice.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Partition `tokens` into slices, rejoining each window with single spaces.
    pub fn window(&self, tokens: &[Token<'_>]) -> Vec<Slice> {
        let mut slices = Vec::with_capacity(self.estimate_slices(tokens.len()));

        for (index, window) in tokens.chunks(self.size).enumerate() {
            let start = index * self.size;
            let end = start + window.len();
            slices.push(Slice::new(join(window), start, end, index));
        }

        slices
    }

    /// Exact number of slices for `token_count` tokens.
    #[must_use]
    pub fn estimate_slices(&self, token_count: usize) -> usize {
        token_count.div_ceil(self.size)
    }
}

impl Default for TokenWindower {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

fn join(window: &[Token<'_>]) -> String {
    let capacity = window.iter().map(|t| t.text.len() + 1).sum::<usize>();
    let mut text = String::with_capacity(capacity);
    for (i, token) in window.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(token.text);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", letters(i))).collect::<Vec<_>>().join(" ")
    }

    // Digit-free distinct words so the tokens survive normalization too.
    fn letters(mut i: usize) -> String {
        let mut s = String::new();
        loop {
            s.push((b'a' + (i % 26) as u8) as char);
            i /= 26;
            if i == 0 {
                return s;
            }
        }
    }

    #[test]
    fn test_basic_windowing() {
        let text = words(8);
        let tokens = tokenize(&text);
        let slices = TokenWindower::new(3).window(&tokens);

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].span(), 0..3);
        assert_eq!(slices[1].span(), 3..6);
        assert_eq!(slices[2].span(), 6..8);
        assert_eq!(slices[2].text, "wg wh");
    }

    #[test]
    fn test_exact_multiple() {
        let text = words(500);
        let tokens = tokenize(&text);
        let slices = TokenWindower::default().window(&tokens);

        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.token_count() == 250));
    }

    #[test]
    fn test_remainder() {
        let text = words(260);
        let tokens = tokenize(&text);
        let slices = TokenWindower::default().window(&tokens);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].token_count(), 250);
        assert_eq!(slices[1].token_count(), 10);
        assert_eq!(slices[1].text.split(' ').count(), 10);
    }

    #[test]
    fn test_no_tokens_no_slices() {
        let slices = TokenWindower::new(250).window(&[]);
        assert!(slices.is_empty());
    }

    #[test]
    fn test_indices_dense() {
        let text = words(31);
        let tokens = tokenize(&text);
        let slices = TokenWindower::new(4).window(&tokens);

        for (i, slice) in slices.iter().enumerate() {
            assert_eq!(slice.index, i);
        }
    }

    #[test]
    fn test_estimate_is_exact() {
        let windower = TokenWindower::new(250);
        assert_eq!(windower.estimate_slices(0), 0);
        assert_eq!(windower.estimate_slices(1), 1);
        assert_eq!(windower.estimate_slices(250), 1);
        assert_eq!(windower.estimate_slices(251), 2);
    }

    #[test]
    fn test_try_new_rejects_zero() {
        assert!(matches!(
            TokenWindower::try_new(0),
            Err(Error::InvalidWindowSize(0))
        ));
        assert_eq!(TokenWindower::try_new(7).map(|w| w.size()).ok(), Some(7));
    }

    #[test]
    #[should_panic]
    fn test_zero_size_panics() {
        let _ = TokenWindower::new(0);
    }
}
