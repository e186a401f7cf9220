use std::{
    collections::{hash_map, HashMap},
    error,
    num::ParseIntError,
};

use derive_more::Display;

/// An error that occurred while interpreting the properties of a section.
#[derive(Debug, Display)]
pub enum SectionError {
    /// A value was present for the key but was not a valid base-10 integer.
    /// Only the *absence* of a value defaults; malformed presence is terminal.
    #[display("value of key {_0} is not a valid integer: {_1}")]
    InvalidInteger(String, ParseIntError),
}

impl error::Error for SectionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidInteger(_, err) => Some(err),
        }
    }
}

/// One committed `[Name]` section: the header name plus every `key=value`
/// property line seen between that header and the next one (or end of input).
/// Sections are created by the [SectionReader](super::SectionReader), handed
/// to a builder, then discarded.
///
/// Keys are case-sensitive and matched verbatim; a repeated key overwrites
/// the earlier value, so only the final value of a key is observable.
#[derive(Debug, PartialEq)]
pub struct Section {
    name: String,
    properties: HashMap<String, String>,
}

impl Section {
    /// Create a new empty section from a header name.
    pub fn new(name: String) -> Self {
        Section {
            name,
            properties: HashMap::new(),
        }
    }

    /// Get the name of the section, taken verbatim from between the brackets
    /// of the header line. May be empty.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Add a property to the section. A repeated key overwrites the earlier
    /// value (last write wins).
    pub fn insert(&mut self, key: String, value: String) {
        self.properties.insert(key, value);
    }

    /// Get the raw value of a key, verbatim as it appeared after the first
    /// `=` of the property line.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Get the value of a key as a base-10 integer.
    /// A missing or empty value yields 0; a present but malformed value is an
    /// error.
    pub fn get_integer(&self, key: &str) -> Result<i32, SectionError> {
        match self.properties.get(key) {
            None => Ok(0),
            Some(val) if val.is_empty() => Ok(0),
            Some(val) => val
                .parse()
                .map_err(|err| SectionError::InvalidInteger(key.to_owned(), err)),
        }
    }

    /// Get the number of properties in the section.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the section holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
