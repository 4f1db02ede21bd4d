//! Loading a corpus of books from a directory.
//!
//! Books are the `*.txt` files directly inside one directory. Their identity
//! is their 1-based position in *natural* file-name order, so the numbering is
//! stable across runs and independent of how the file system lists entries:
//!
//! ```text
//! read_dir:  book10.txt  Book2.txt  book1.txt
//! natural:   book1.txt   Book2.txt  book10.txt
//! identity:  1           2          3
//! ```

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Document, Error, Result};

/// File extension of input books.
pub const BOOK_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl<'a> Segment<'a> {
    const fn new(run: &'a str, digits: bool) -> Self {
        if digits {
            Self::Digits(run)
        } else {
            Self::Text(run)
        }
    }
}

fn segments(s: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut current = None;
    for (i, c) in s.char_indices() {
        let digits = c.is_ascii_digit();
        if let Some(prev) = current {
            if prev != digits {
                out.push(Segment::new(&s[start..i], prev));
                start = i;
            }
        }
        current = Some(digits);
    }
    if let Some(digits) = current {
        out.push(Segment::new(&s[start..], digits));
    }
    out
}

fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_caseless(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compare two names in natural order.
///
/// Runs of ASCII digits compare by numeric value, everything else compares
/// case-insensitively, and a digit run sorts before text. Names that are
/// equal under those rules fall back to plain byte order, so the ordering is
/// total and stable.
///
/// ```rust
/// use std::cmp::Ordering;
/// use bookslice::corpus::natural_cmp;
///
/// assert_eq!(natural_cmp("book2", "book10"), Ordering::Less);
/// assert_eq!(natural_cmp("Book2", "book10"), Ordering::Less);
/// assert_eq!(natural_cmp("book02", "book2"), Ordering::Less);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (left, right) = (segments(a), segments(b));

    for (x, y) in left.iter().zip(&right) {
        let ord = match (x, y) {
            (Segment::Digits(x), Segment::Digits(y)) => cmp_digits(x, y),
            (Segment::Digits(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Digits(_)) => Ordering::Greater,
            (Segment::Text(x), Segment::Text(y)) => cmp_caseless(x, y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Title of a book file: its name up to the first `.`.
fn title(path: &Path) -> String {
    let name = file_name(path);
    name.split('.').next().unwrap_or_default().to_owned()
}

/// List the `*.txt` files directly inside `dir`, in natural order.
///
/// Hidden files (names starting with `.`) and subdirectories are skipped.
///
/// # Errors
///
/// Returns [`Error::Read`] if `dir` cannot be listed.
pub fn discover(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let read_err = |source| Error::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();

        if file_name(&path).starts_with('.') || !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(BOOK_EXTENSION) {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
    Ok(paths)
}

/// Read books from `paths`, numbering them 1, 2, 3, ... in the given order.
///
/// # Errors
///
/// Returns [`Error::Read`] for the first file that cannot be read as UTF-8
/// text. No partial corpus is returned.
pub fn load_paths(paths: &[PathBuf]) -> Result<Vec<Document>> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let text = fs::read_to_string(path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;
            let document = Document::new(i + 1, title(path), text);
            tracing::debug!(
                book = document.identity,
                title = %document.title,
                bytes = document.text.len(),
                "loaded book"
            );
            Ok(document)
        })
        .collect()
}

/// Discover and read every book in `dir`.
///
/// # Errors
///
/// See [`discover`] and [`load_paths`].
pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Document>> {
    let dir = dir.as_ref();
    let paths = discover(dir)?;
    let documents = load_paths(&paths)?;
    tracing::info!(dir = %dir.display(), books = documents.len(), "loaded corpus");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| (*s).to_owned()).collect();
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn test_numeric_runs() {
        assert_eq!(
            sorted(&["book10.txt", "book2.txt", "book1.txt", "book16.txt"]),
            ["book1.txt", "book2.txt", "book10.txt", "book16.txt"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            sorted(&["b.txt", "A.txt", "C.txt", "a2.txt"]),
            ["a2.txt", "A.txt", "b.txt", "C.txt"]
        );
    }

    #[test]
    fn test_digits_before_text() {
        assert_eq!(natural_cmp("1abc", "abc"), Ordering::Less);
        assert_eq!(natural_cmp("x9", "xa"), Ordering::Less);
    }

    #[test]
    fn test_total_order_on_ties() {
        assert_eq!(natural_cmp("Book", "book"), Ordering::Less);
        assert_eq!(natural_cmp("book01", "book1"), Ordering::Less);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_huge_numbers_do_not_overflow() {
        let a = format!("v{}", "9".repeat(40));
        let b = format!("v1{}", "0".repeat(40));
        assert_eq!(natural_cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_title() {
        assert_eq!(title(Path::new("/data/saxo_book3.clean.txt")), "saxo_book3");
        assert_eq!(title(Path::new("book1.txt")), "book1");
    }

    #[test]
    fn test_segments() {
        let segs = segments("ab12c");
        assert_eq!(segs.len(), 3);
        assert!(matches!(segs[1], Segment::Digits("12")));
        assert!(segments("").is_empty());
    }
}
