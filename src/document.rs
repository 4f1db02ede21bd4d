//! Input books.

/// One book of the corpus.
///
/// `identity` is the book's 1-based position in the sorted input order. It is
/// assigned by whoever loads the corpus (see [`corpus`](crate::corpus)) and is
/// never derived from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// 1-based position in the input order.
    pub identity: usize,
    /// Human-readable name, e.g. the file stem. Only used for logging.
    pub title: String,
    /// Full text content.
    pub text: String,
}

impl Document {
    /// Create a new document.
    #[must_use]
    pub fn new(identity: usize, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identity,
            title: title.into(),
            text: text.into(),
        }
    }

    /// Number the given texts 1, 2, 3, ... in order, titled by identity.
    ///
    /// ```rust
    /// use bookslice::Document;
    ///
    /// let docs = Document::numbered(["prima pars", "secunda pars"]);
    /// assert_eq!(docs[1].identity, 2);
    /// assert_eq!(docs[1].title, "2");
    /// ```
    pub fn numbered<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Self::new(i + 1, (i + 1).to_string(), text))
            .collect()
    }
}
