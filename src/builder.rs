//! Turning books into labelled rows.
//!
//! Each book runs through the same linear pipeline:
//!
//! ```text
//! raw text -> normalize -> tokenize (len > eta) -> window (size n) -> label -> rows
//! ```
//!
//! Books are independent; the only cross-book guarantee is that rows come out
//! grouped by book in input order, each group numbered `slice_id = 0, 1, ...`.

use crate::{
    normalize, tokenize_with_min_len, Document, Row, Slice, SliceConfig, Slicer, TokenWindower,
};

/// Builds the slice table for a corpus.
///
/// ## Example
///
/// ```rust
/// use bookslice::{Document, Period, SliceBuilder};
///
/// let builder = SliceBuilder::default();
/// let docs = Document::numbered(["Gesta Danorum, liber primus.", "Liber secundus."]);
/// let rows = builder.build_rows(&docs);
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].content, "gesta danorum liber primus");
/// assert_eq!(rows[1].book, 2);
/// assert_eq!(rows[1].book_class, Period::Early);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SliceBuilder {
    config: SliceConfig,
}

impl SliceBuilder {
    /// Create a builder from a validated configuration.
    #[must_use]
    pub const fn new(config: SliceConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &SliceConfig {
        &self.config
    }

    fn windower(&self) -> TokenWindower {
        TokenWindower::new(self.config.window_size())
    }

    /// Slice one book's text.
    pub fn slice_document(&self, document: &Document) -> Vec<Slice> {
        self.slice(&document.text)
    }

    /// Rows for a single book, in slice order.
    pub fn rows_for(&self, document: &Document) -> Vec<Row> {
        let book_class = self.config.thresholds().classify(document.identity);
        let slices = self.slice_document(document);

        tracing::debug!(
            title = %document.title,
            book = document.identity,
            %book_class,
            slices = slices.len(),
            tokens = slices.last().map_or(0, |s| s.end),
            "sliced book"
        );
        if slices.is_empty() {
            tracing::warn!(
                title = %document.title,
                book = document.identity,
                "no tokens survived normalization; book contributes no rows"
            );
        }

        slices
            .into_iter()
            .map(|slice| Row {
                book: document.identity,
                book_class,
                slice_id: slice.index,
                content: slice.text,
            })
            .collect()
    }

    /// Rows for every book, grouped by book in the given order.
    ///
    /// Each document's `identity` is used as given; loaders number books by
    /// their 1-based position in the sorted input, as
    /// [`Document::numbered`] and [`corpus::load_dir`](crate::corpus::load_dir) do.
    pub fn build_rows(&self, documents: &[Document]) -> Vec<Row> {
        let mut rows = Vec::new();
        for document in documents {
            rows.extend(self.rows_for(document));
        }
        tracing::info!(
            books = documents.len(),
            rows = rows.len(),
            window_size = self.config.window_size(),
            "built slice table"
        );
        rows
    }
}

impl Slicer for SliceBuilder {
    fn slice(&self, text: &str) -> Vec<Slice> {
        let normalized = normalize(text);
        let tokens = tokenize_with_min_len(&normalized, self.config.min_token_len());
        self.windower().window(&tokens)
    }

    fn estimate_slices(&self, token_count: usize) -> usize {
        self.windower().estimate_slices(token_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Period, PeriodThresholds};

    fn book(tokens: usize) -> String {
        (0..tokens).map(|_| "verbum").collect::<Vec<_>>().join(", ")
    }

    #[test]
    fn test_pipeline_order() {
        let builder = SliceBuilder::default();
        let slices = builder.slice("Data#1@Book。2 a ab");
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].text, "databook ab");
    }

    #[test]
    fn test_rows_grouped_and_dense() {
        let config = SliceConfig::default().with_window_size(3).unwrap();
        let builder = SliceBuilder::new(config);
        let docs = Document::numbered([book(7), book(2), book(3)]);
        let rows = builder.build_rows(&docs);

        let keys: Vec<(usize, usize)> = rows.iter().map(|r| (r.book, r.slice_id)).collect();
        assert_eq!(keys, [(1, 0), (1, 1), (1, 2), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_empty_book_skipped() {
        let builder = SliceBuilder::default();
        let docs = Document::numbered([book(3), "1 2 3 # @ a b".to_owned(), book(1)]);
        let rows = builder.build_rows(&docs);

        let books: Vec<usize> = rows.iter().map(|r| r.book).collect();
        assert_eq!(books, [1, 3]);
    }

    #[test]
    fn test_labels_follow_identity() {
        let builder = SliceBuilder::default();
        let docs = Document::numbered((0..11).map(|_| book(1)));
        let rows = builder.build_rows(&docs);

        assert_eq!(rows.len(), 11);
        assert_eq!(rows[7].book_class, Period::Early);
        assert_eq!(rows[8].book_class, Period::Uncertain);
        assert_eq!(rows[9].book_class, Period::Late);
    }

    #[test]
    fn test_custom_config() {
        let config = SliceConfig::default()
            .with_min_token_len(3)
            .with_thresholds(PeriodThresholds::new(0, 1).unwrap());
        let builder = SliceBuilder::new(config);
        let rows = builder.rows_for(&Document::new(1, "one", "rex et regina"));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].content, "regina");
        assert_eq!(rows[0].book_class, Period::Uncertain);
    }

    #[test]
    fn test_no_documents() {
        assert!(SliceBuilder::default().build_rows(&[]).is_empty());
    }

    #[test]
    fn test_estimate_matches() {
        let builder = SliceBuilder::default();
        let text = book(501);
        assert_eq!(builder.slice(&text).len(), builder.estimate_slices(501));
    }
}
