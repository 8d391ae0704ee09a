//! Counting rows per record type.

use indexmap::IndexMap;

use crate::address::RecordAddress;
use crate::error::ExtractError;
use crate::extract::record_type_of;

/// Counts rows per record type, in first-seen order.
///
/// With a [`RecordAddress`], only rows whose record type and subtype match
/// are counted.
#[derive(Debug, Default)]
pub struct RecordCounter {
    filter: Option<RecordAddress>,
    subtype_column: Option<usize>,
    counts: IndexMap<String, usize>,
}

impl RecordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: RecordAddress, subtype_column: Option<usize>) -> Self {
        Self {
            filter: Some(filter),
            subtype_column,
            counts: IndexMap::new(),
        }
    }

    /// Count one row. Returns whether the row was counted.
    pub fn process<S: AsRef<str>>(&mut self, row: &[S]) -> Result<bool, ExtractError> {
        if let Some(filter) = &self.filter
            && !filter.matches_row(row, self.subtype_column)?
        {
            return Ok(false);
        }
        let record_type = record_type_of(row)?;
        *self.counts.entry(record_type.to_string()).or_default() += 1;
        Ok(true)
    }

    pub fn counts(&self) -> &IndexMap<String, usize> {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn finish(self) -> IndexMap<String, usize> {
        self.counts
    }
}
