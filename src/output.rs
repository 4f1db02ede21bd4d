//! Writing the slice table.
//!
//! The table is comma-separated with a header row and exactly four columns,
//! [`COLUMNS`](crate::COLUMNS), and no index column:
//!
//! ```text
//! book,book_class,slice_id,content
//! 1,early,0,gesta danorum liber primus
//! 9,uncertain,0,...
//! ```
//!
//! Fields are quoted only when they must be, and records end in `\n`. The
//! header is written even when there are no rows.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Result, Row, COLUMNS};

/// Write `rows` as CSV to `writer`.
///
/// ```rust
/// use bookslice::{output, Document, SliceBuilder};
///
/// let rows = SliceBuilder::default().build_rows(&Document::numbered(["Rex, et regina."]));
/// let mut buf = Vec::new();
/// output::write_rows(&mut buf, &rows).unwrap();
///
/// assert_eq!(
///     String::from_utf8(buf).unwrap(),
///     "book,book_class,slice_id,content\n1,early,0,rex et regina\n"
/// );
/// ```
///
/// # Errors
///
/// Returns [`Error::Csv`](crate::Error::Csv) if a record cannot be written.
pub fn write_rows<W: Write>(writer: W, rows: &[Row]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(COLUMNS)?;
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `rows` as CSV to the file at `path`, replacing it.
///
/// The table goes to a sibling temporary file first and is renamed into
/// place once complete, so a failed run never leaves a partial table at
/// `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) or [`Error::Csv`](crate::Error::Csv).
pub fn write_csv_file(path: impl AsRef<Path>, rows: &[Row]) -> Result<()> {
    let path = path.as_ref();
    let tmp = temp_path(path);

    let result = fs::File::create(&tmp)
        .map_err(Into::into)
        .and_then(|file| write_rows(std::io::BufWriter::new(file), rows))
        .and_then(|()| fs::rename(&tmp, path).map_err(Into::into));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    } else {
        tracing::info!(path = %path.display(), rows = rows.len(), "wrote slice table");
    }
    result
}
