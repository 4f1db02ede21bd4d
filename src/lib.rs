//! # bookslice
//!
//! Turn a corpus of plain-text books into a table of fixed-size token slices,
//! each labelled with a coarse period derived from the book's position.
//!
//! ## The Pipeline
//!
//! ```text
//! book.txt ──► normalize ──► tokenize ──► window ──► label ──► row
//!              lower-case     split \W+    250 tokens  early /
//!              strip 。@#0-9  drop len<=1  per slice   uncertain /
//!                                                      late
//! ```
//!
//! Every book is processed independently. Output rows are grouped by book in
//! input order and numbered `slice_id = 0, 1, 2, ...` within each book.
//!
//! ### Normalization
//!
//! Lower-case, then delete the ideographic full stop `。`, `@`, `#`, and every
//! decimal digit. Deleting rather than replacing fuses neighbours:
//! `"Data#1@Book。2"` becomes `"databook"`.
//!
//! ### Tokenization
//!
//! Split on runs of non-word characters and keep tokens longer than one char.
//! `"a bb c dd"` yields `["bb", "dd"]`.
//!
//! ### Windowing
//!
//! Consecutive, non-overlapping windows of 250 tokens, rejoined with single
//! spaces. The last window holds the remainder; a book without tokens yields
//! no slices at all.
//!
//! ```text
//! 260 tokens, window 250
//!
//! Slice 0: tokens [0..250]
//! Slice 1: tokens [250..260]
//! ```
//!
//! ### Labels
//!
//! The label depends only on the book's 1-based position: books 1-8 are
//! `early`, book 9 is `uncertain`, later books are `late`.
//!
//! ## Quick Start
//!
//! ```rust
//! use bookslice::{output, Document, SliceBuilder};
//!
//! let docs = Document::numbered([
//!     "Dani ab Humblo et Lothero fratribus...",
//!     "Post hunc Skioldus regnavit...",
//! ]);
//!
//! let rows = SliceBuilder::default().build_rows(&docs);
//! assert_eq!(rows.len(), 2);
//!
//! let mut csv = Vec::new();
//! output::write_rows(&mut csv, &rows)?;
//! # Ok::<(), bookslice::Error>(())
//! ```
//!
//! From disk, with the natural file ordering the dataset relies on:
//!
//! ```rust,no_run
//! use bookslice::{corpus, output, SliceBuilder};
//!
//! let docs = corpus::load_dir("books/")?;
//! let rows = SliceBuilder::default().build_rows(&docs);
//! output::write_csv_file("saxo_class.csv", &rows)?;
//! # Ok::<(), bookslice::Error>(())
//! ```

mod builder;
mod config;
pub mod corpus;
mod document;
mod error;
mod normalize;
pub mod output;
mod period;
mod row;
mod slice;
mod token;
mod window;

pub use builder::SliceBuilder;
pub use config::{SliceConfig, DEFAULT_MIN_TOKEN_LEN, DEFAULT_WINDOW_SIZE};
pub use document::Document;
pub use error::{Error, Result};
pub use normalize::{is_nuisance, normalize, NUISANCE_PATTERN};
pub use period::{
    classify, ParsePeriodError, Period, PeriodThresholds, DEFAULT_EARLY_MAX, DEFAULT_UNCERTAIN,
};
pub use row::{Row, COLUMNS};
pub use slice::Slice;
pub use token::{is_word_char, tokenize, tokenize_with_min_len, Token, WORD_CLASS};
pub use window::TokenWindower;

/// A text slicing strategy.
///
/// ```rust
/// use bookslice::{SliceBuilder, SliceConfig, Slicer};
///
/// fn count(slicer: &dyn Slicer, text: &str) -> usize {
///     slicer.slice(text).len()
/// }
///
/// let small = SliceBuilder::new(SliceConfig::default().with_window_size(2).unwrap());
/// assert_eq!(count(&small, "una duae tres quattuor quinque"), 3);
/// ```
pub trait Slicer: Send + Sync {
    /// Normalize, tokenize, and window `text`.
    ///
    /// Each [`Slice`] carries its space-joined text, its token offsets, and
    /// its zero-based position.
    fn slice(&self, text: &str) -> Vec<Slice>;

    /// Number of slices for a text with `token_count` surviving tokens.
    fn estimate_slices(&self, token_count: usize) -> usize;
}
