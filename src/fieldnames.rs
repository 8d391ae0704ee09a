//! Fieldnames table: per record type, the names of the columns after the
//! record-type column.
//!
//! Format: `RT:name,name,name;RT:name,name,name`

use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::AddressError;

/// Maps a record type to the ordered names of its columns 1..n.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fieldnames {
    tables: IndexMap<String, Vec<String>>,
}

impl Fieldnames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column names of a record type, replacing any previous list.
    pub fn insert<I, S>(&mut self, record_type: impl Into<String>, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .insert(record_type.into(), names.into_iter().map(Into::into).collect());
    }

    pub fn get(&self, record_type: &str) -> Option<&[String]> {
        self.tables.get(record_type).map(Vec::as_slice)
    }

    /// Column index of `name` for `record_type`, shifted by one to skip the
    /// record-type column. The first occurrence wins.
    pub fn column_of(&self, record_type: &str, name: &str) -> Option<usize> {
        self.get(record_type)?
            .iter()
            .position(|n| n == name)
            .map(|i| i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }
}

impl FromStr for Fieldnames {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fieldnames = Fieldnames::new();
        for segment in s.split(';') {
            let (record_type, names) = segment
                .split_once(':')
                .filter(|(_, names)| !names.contains(':'))
                .ok_or_else(|| AddressError::MalformedFieldnames {
                    segment: segment.to_string(),
                })?;
            fieldnames.insert(record_type, names.split(','));
        }
        Ok(fieldnames)
    }
}

/// Parse a fieldnames specification string.
///
/// An empty string means "no table" and yields `Ok(None)`.
pub fn parse_fieldnames(spec: &str) -> Result<Option<Fieldnames>, AddressError> {
    if spec.is_empty() {
        return Ok(None);
    }
    spec.parse().map(Some)
}
