//! Output records.

use serde::Serialize;

use crate::Period;

/// Column names of the output table, in order.
pub const COLUMNS: [&str; 4] = ["book", "book_class", "slice_id", "content"];

/// One row of the output table: a single slice of a single book.
///
/// Field order is the column order; the `csv` writer relies on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Identity of the book the slice came from.
    pub book: usize,
    /// Period label derived from `book`.
    pub book_class: Period,
    /// Zero-based position of the slice in its book.
    pub slice_id: usize,
    /// Space-joined slice text.
    pub content: String,
}
