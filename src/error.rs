//! Error types for bookslice.

use std::path::PathBuf;

/// Errors that can occur while preparing a slice table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid window size (must be > 0).
    #[error("invalid window size: {0} (must be > 0)")]
    InvalidWindowSize(usize),

    /// The uncertain identity does not come after the early range.
    #[error("uncertain identity {uncertain} must be greater than early maximum {early_max}")]
    InvalidThresholds {
        /// Last identity labelled early.
        early_max: usize,
        /// The identity labelled uncertain.
        uncertain: usize,
    },

    /// An input directory or book could not be read (a book must be UTF-8).
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// The path that failed.
        path: PathBuf,
        /// Underlying I/O error (includes invalid UTF-8).
        #[source]
        source: std::io::Error,
    },

    /// Directory listing or output I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the delimited table failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for bookslice operations.
pub type Result<T> = std::result::Result<T, Error>;
