//! Slicing configuration.
//!
//! Three knobs shape the output table:
//!
//! - `window_size`: tokens per slice (the last slice of a book may be shorter)
//! - `min_token_len`: tokens of at most this many chars are dropped
//! - `thresholds`: identity cut points for the period label
//!
//! The defaults (250, 1, 8/9) are the values the dataset was published with.

use crate::{Error, PeriodThresholds, Result};

/// Default number of tokens per slice.
pub const DEFAULT_WINDOW_SIZE: usize = 250;

/// Default minimum token length; tokens of this many chars or fewer are dropped.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 1;

/// Configuration for [`SliceBuilder`](crate::SliceBuilder).
///
/// # Examples
///
/// ```rust
/// use bookslice::SliceConfig;
///
/// let config = SliceConfig::default();
/// assert_eq!(config.window_size(), 250);
/// assert_eq!(config.min_token_len(), 1);
///
/// let config = SliceConfig::default().with_window_size(100).unwrap();
/// assert_eq!(config.window_size(), 100);
///
/// assert!(SliceConfig::default().with_window_size(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceConfig {
    window_size: usize,
    min_token_len: usize,
    thresholds: PeriodThresholds,
}

impl SliceConfig {
    /// Tokens per slice.
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Tokens of at most this many chars are dropped.
    #[must_use]
    pub const fn min_token_len(&self) -> usize {
        self.min_token_len
    }

    /// Period cut points.
    #[must_use]
    pub const fn thresholds(&self) -> PeriodThresholds {
        self.thresholds
    }

    /// Set the window size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWindowSize`] if `window_size == 0`.
    pub fn with_window_size(self, window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidWindowSize(window_size));
        }
        Ok(Self {
            window_size,
            ..self
        })
    }

    /// Set the minimum token length. Any value is valid; `0` keeps every
    /// non-empty token.
    #[must_use]
    pub const fn with_min_token_len(self, min_token_len: usize) -> Self {
        Self {
            min_token_len,
            ..self
        }
    }

    /// Set the period thresholds.
    #[must_use]
    pub const fn with_thresholds(self, thresholds: PeriodThresholds) -> Self {
        Self { thresholds, ..self }
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            thresholds: PeriodThresholds::default(),
        }
    }
}
