/// A submodule that provides the [Section] value type, the unit of data
/// exchanged between the scanner and the typed builders.
mod section;
pub use section::{Section, SectionError};

/// A submodule that provides the [SectionReader], the scanning half of the
/// parser.
mod section_reader;
pub use section_reader::{ScanError, SectionReader};

use std::error;

use derive_more::{Display, From};

/// An error that occurred somewhere within the broadly defined parsing
/// process, raised at the boundary between the parser and its callers.
#[derive(Debug, Display, From)]
pub enum ParsingError {
    ScanError(ScanError),
    SectionError(SectionError),
}

impl error::Error for ParsingError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::ScanError(err) => Some(err),
            Self::SectionError(err) => Some(err),
        }
    }
}
