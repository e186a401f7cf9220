use std::{
    error,
    io::{self, BufRead},
};

use derive_more::{Display, From};

use super::Section;

/// An error that occurred while scanning lines into sections.
/// Scanning performs no semantic validation of keys or values, so the only
/// way it can fail is the underlying read failing, and that aborts the whole
/// scan with no partial result.
#[derive(Debug, Display, From)]
#[display("read failure while scanning: {_0}")]
pub struct ScanError(io::Error);

impl error::Error for ScanError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.0)
    }
}

/// A reader that turns a line-oriented text source into committed [Section]s.
/// This is the single-pass scanning half of the parser; builders attach
/// meaning to the committed sections afterwards.
///
/// # Line classification
///
/// - A line whose first character is `[` and whose last character is `]` is a
///   section header; the name is everything strictly between the brackets,
///   verbatim. No trimming is performed, so ` [A]` is not a header.
/// - A line containing at least one `=` is a property of the currently open
///   section: the key is the text before the first `=`, the value everything
///   after it (values may themselves contain `=`). Neither side is trimmed.
///   Property lines seen before any header are dropped.
/// - Every other line (blank lines, comments) carries no meaning and is
///   skipped.
///
/// A new header commits the open section, and end of input commits the last
/// open section even if it holds no properties. An input with zero headers
/// yields zero sections.
///
/// # Example
///
/// ```
/// let reader = SectionReader::new(Cursor::new("[Sword]\nWeight=3"));
/// for section in reader {
///     println!("Section: {}", section?.get_name());
/// }
/// ```
pub struct SectionReader<R: BufRead> {
    /// The line source being consumed.
    lines: io::Lines<R>,
    /// The section the scanner is currently accumulating into, if any.
    /// Deliberately local to the reader so that independent files can be
    /// scanned independently.
    open: Option<Section>,
}

impl<R: BufRead> SectionReader<R> {
    /// Create a new section reader over a buffered text source.
    pub fn new(source: R) -> Self {
        SectionReader {
            lines: source.lines(),
            open: None,
        }
    }
}

impl<R: BufRead> Iterator for SectionReader<R> {
    type Item = Result<Section, ScanError>;

    /// Get the next committed section, in encounter order.
    /// Returns None once the input is exhausted and the last section has been
    /// committed.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if line.starts_with('[') && line.ends_with(']') {
                        // brackets are ASCII, the byte slice is safe
                        let name = line[1..line.len() - 1].to_owned();
                        if let Some(committed) = self.open.replace(Section::new(name)) {
                            return Some(Ok(committed));
                        }
                    } else if let Some((key, value)) = line.split_once('=') {
                        if let Some(open) = &mut self.open {
                            open.insert(key.to_owned(), value.to_owned());
                        }
                    }
                }
                Some(Err(err)) => {
                    self.open = None;
                    return Some(Err(err.into()));
                }
                None => return self.open.take().map(Ok),
            }
        }
    }
}
