//! Address parser.
//!
//! Path grammar:
//! ```text
//! records path:  RT;RT:st;RT:st|st
//! fields path:   RT.f|f;RT:st.f;RT:st|st.f|f
//! ```
//!
//! - `;` separates segments
//! - `:` separates the record type from its subtypes
//! - `|` separates alternative subtypes, and alternative field selectors
//! - `.` separates the record type (and subtypes) from the field selectors
//!
//! A field selector made only of digits is a 0-based column index; anything
//! else is the name of a `name:type:value` tagged cell, unless a fieldnames
//! table translates it into a column index.
//!
//! Repeated mentions of the same record type and subtype append their
//! selectors in path order.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{AddressError, ExtractError};
use crate::extract::{record_type_of, subtype_matches};
use crate::fieldnames::Fieldnames;
use crate::selector::{Selector, Subtype};

/// Selectors per subtype, in path order.
pub type SubtypeSelectors = IndexMap<Subtype, Vec<Selector>>;

/// Parsed fields path: record type -> subtype -> field selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    entries: IndexMap<String, SubtypeSelectors>,
}

impl Address {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append selectors to the entry of (record type, subtype), creating it
    /// if absent.
    pub fn push<I>(&mut self, record_type: impl Into<String>, subtype: Subtype, selectors: I)
    where
        I: IntoIterator<Item = Selector>,
    {
        self.entries
            .entry(record_type.into())
            .or_default()
            .entry(subtype)
            .or_default()
            .extend(selectors);
    }

    pub fn get(&self, record_type: &str) -> Option<&SubtypeSelectors> {
        self.entries.get(record_type)
    }

    pub fn selectors(&self, record_type: &str, subtype: &Subtype) -> Option<&[Selector]> {
        self.get(record_type)?.get(subtype).map(Vec::as_slice)
    }

    pub fn contains_record_type(&self, record_type: &str) -> bool {
        self.entries.contains_key(record_type)
    }

    pub fn record_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubtypeSelectors)> {
        self.entries.iter().map(|(rt, subtypes)| (rt.as_str(), subtypes))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Does the row's record type and some subtype of it match this address?
    pub fn matches_row<S: AsRef<str>>(
        &self,
        row: &[S],
        subtype_column: Option<usize>,
    ) -> Result<bool, ExtractError> {
        let Some(subtypes) = self.get(record_type_of(row)?) else {
            return Ok(false);
        };
        for subtype in subtypes.keys() {
            if subtype_matches(row, subtype, subtype_column)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fields_path(s, None)
    }
}

/// Serializes back to a fields path, one segment per (record type, subtype).
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (record_type, subtypes) in &self.entries {
            for (subtype, selectors) in subtypes {
                if !first {
                    f.write_str(";")?;
                }
                first = false;
                f.write_str(record_type)?;
                if let Some(tag) = subtype.as_tag() {
                    write!(f, ":{tag}")?;
                }
                f.write_str(".")?;
                for (i, selector) in selectors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{selector}")?;
                }
            }
        }
        Ok(())
    }
}

/// Parsed records path: record type -> subtypes, in path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordAddress {
    entries: IndexMap<String, Vec<Subtype>>,
}

impl RecordAddress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<I>(&mut self, record_type: impl Into<String>, subtypes: I)
    where
        I: IntoIterator<Item = Subtype>,
    {
        self.entries
            .entry(record_type.into())
            .or_default()
            .extend(subtypes);
    }

    pub fn get(&self, record_type: &str) -> Option<&[Subtype]> {
        self.entries.get(record_type).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Subtype])> {
        self.entries
            .iter()
            .map(|(rt, subtypes)| (rt.as_str(), subtypes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Does the row's record type and one of its subtypes match this address?
    pub fn matches_row<S: AsRef<str>>(
        &self,
        row: &[S],
        subtype_column: Option<usize>,
    ) -> Result<bool, ExtractError> {
        let Some(subtypes) = self.get(record_type_of(row)?) else {
            return Ok(false);
        };
        for subtype in subtypes {
            if subtype_matches(row, subtype, subtype_column)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl FromStr for RecordAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_records_path(s)
    }
}

impl fmt::Display for RecordAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (record_type, subtypes) in &self.entries {
            for subtype in subtypes {
                if !first {
                    f.write_str(";")?;
                }
                first = false;
                f.write_str(record_type)?;
                if let Some(tag) = subtype.as_tag() {
                    write!(f, ":{tag}")?;
                }
            }
        }
        Ok(())
    }
}

/// Every listed subtype gets an empty selector list.
impl From<RecordAddress> for Address {
    fn from(records: RecordAddress) -> Self {
        let mut address = Address::new();
        for (record_type, subtypes) in records.entries {
            for subtype in subtypes {
                address.push(record_type.clone(), subtype, Vec::new());
            }
        }
        address
    }
}

/// Split `RT` or `RT:st|st` into the record type and its subtypes.
fn parse_record_part<'a>(
    segment: &str,
    part: &'a str,
) -> Result<(&'a str, Vec<Subtype>), AddressError> {
    match part.split_once(':') {
        Some((_, subtypes)) if subtypes.contains(':') => Err(AddressError::malformed_path(
            segment,
            "more than one ':' separator",
        )),
        Some((record_type, subtypes)) => Ok((
            record_type,
            subtypes.split('|').map(Subtype::tag).collect(),
        )),
        None => Ok((part, vec![Subtype::Any])),
    }
}

/// Parse a records path such as `RT1;RT2:st3;RT4:st5|st6`.
pub fn parse_records_path(path: &str) -> Result<RecordAddress, AddressError> {
    let mut address = RecordAddress::new();
    for segment in path.split(';') {
        let (record_type, subtypes) = parse_record_part(segment, segment)?;
        address.push(record_type, subtypes);
    }
    debug!(path, record_types = address.len(), "parsed records path");
    Ok(address)
}

/// Parse a fields path such as `RT1.2|4;RT4:st5.XY;RT7:st8|st9.3|XX`.
///
/// Selector names found in `fieldnames` for the segment's record type are
/// replaced by their column index.
pub fn parse_fields_path(
    path: &str,
    fieldnames: Option<&Fieldnames>,
) -> Result<Address, AddressError> {
    let mut address = Address::new();
    for segment in path.split(';') {
        let Some((record_part, fields_part)) = segment.split_once('.') else {
            return Err(AddressError::malformed_path(
                segment,
                "fields path segment does not contain field names",
            ));
        };
        if fields_part.contains('.') {
            return Err(AddressError::malformed_path(
                segment,
                "more than one '.' separator",
            ));
        }
        let (record_type, subtypes) = parse_record_part(segment, record_part)?;

        let selectors = fields_part
            .split('|')
            .map(|token| -> Result<Selector, AddressError> {
                let selector = Selector::parse_token(token).ok_or_else(|| {
                    AddressError::malformed_path(
                        segment,
                        format!("column index '{token}' out of range"),
                    )
                })?;
                Ok(match (selector, fieldnames) {
                    (Selector::Named(name), Some(table)) => table
                        .column_of(record_type, &name)
                        .map_or(Selector::Named(name), Selector::Positional),
                    (selector, _) => selector,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for subtype in subtypes {
            address.push(record_type, subtype, selectors.iter().cloned());
        }
    }
    debug!(path, record_types = address.len(), "parsed fields path");
    Ok(address)
}

pub use self::parse_fields_path as parse_fields_address;
pub use self::parse_records_path as parse_record_address;
