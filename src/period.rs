//! Period labels derived from a book's position.
//!
//! Books are numbered 1, 2, 3, ... in their sorted input order, and the label
//! depends on that number alone, never on the text:
//!
//! ```text
//! identity:  1  2  3  4  5  6  7  8 | 9         | 10 11 12 ...
//! label:     early                  | uncertain | late
//! ```
//!
//! The cut points live in [`PeriodThresholds`]. The defaults reproduce the
//! labels of the published dataset and should only be changed for a
//! different corpus.

use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

/// Last identity labelled [`Period::Early`] by default.
pub const DEFAULT_EARLY_MAX: usize = 8;

/// Identity labelled [`Period::Uncertain`] by default.
pub const DEFAULT_UNCERTAIN: usize = 9;

/// Coarse period of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Up to and including the early maximum.
    Early,
    /// Exactly the uncertain identity.
    Uncertain,
    /// Everything else.
    Late,
}

impl Period {
    /// The label as written to the output table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Uncertain => "uncertain",
            Self::Late => "late",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Period`] label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown period label: {0:?}")]
pub struct ParsePeriodError(String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "early" => Ok(Self::Early),
            "uncertain" => Ok(Self::Uncertain),
            "late" => Ok(Self::Late),
            other => Err(ParsePeriodError(other.to_owned())),
        }
    }
}

/// Identity cut points for [`Period`] classification.
///
/// # Examples
///
/// ```rust
/// use bookslice::{Period, PeriodThresholds};
///
/// let thresholds = PeriodThresholds::default();
/// assert_eq!(thresholds.classify(8), Period::Early);
/// assert_eq!(thresholds.classify(9), Period::Uncertain);
/// assert_eq!(thresholds.classify(10), Period::Late);
///
/// // A corpus with an ambiguous fourth book
/// let thresholds = PeriodThresholds::new(3, 4).unwrap();
/// assert_eq!(thresholds.classify(4), Period::Uncertain);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodThresholds {
    early_max: usize,
    uncertain: usize,
}

impl PeriodThresholds {
    /// Create thresholds.
    ///
    /// Identities in `early_max + 1 .. uncertain` (empty with the defaults)
    /// are labelled late along with everything above `uncertain`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThresholds`] unless `uncertain > early_max`.
    pub fn new(early_max: usize, uncertain: usize) -> Result<Self> {
        if uncertain <= early_max {
            return Err(Error::InvalidThresholds {
                early_max,
                uncertain,
            });
        }
        Ok(Self {
            early_max,
            uncertain,
        })
    }

    /// Last identity labelled early.
    #[must_use]
    pub const fn early_max(&self) -> usize {
        self.early_max
    }

    /// The identity labelled uncertain.
    #[must_use]
    pub const fn uncertain(&self) -> usize {
        self.uncertain
    }

    /// Label a book by its 1-based identity.
    #[must_use]
    pub const fn classify(&self, identity: usize) -> Period {
        if identity <= self.early_max {
            Period::Early
        } else if identity == self.uncertain {
            Period::Uncertain
        } else {
            Period::Late
        }
    }
}

impl Default for PeriodThresholds {
    fn default() -> Self {
        Self {
            early_max: DEFAULT_EARLY_MAX,
            uncertain: DEFAULT_UNCERTAIN,
        }
    }
}

/// Label a book by its 1-based identity with the default thresholds.
///
/// ```rust
/// use bookslice::{classify, Period};
///
/// assert_eq!(classify(1), Period::Early);
/// assert_eq!(classify(9), Period::Uncertain);
/// assert_eq!(classify(16), Period::Late);
/// ```
#[must_use]
pub fn classify(identity: usize) -> Period {
    PeriodThresholds::default().classify(identity)
}
