//! Field extractor.
//!
//! Applies an [`Address`] to one row. Column 0 of the row is the record type;
//! a subtype matches either at a fixed column or, without one, anywhere in
//! the row. Positional selectors read a column, named selectors read the
//! value of a `name:type:value` tagged cell.

use indexmap::IndexMap;
use tracing::trace;

use crate::address::Address;
use crate::error::ExtractError;
use crate::selector::{Selector, Subtype};

/// Extracted values keyed by the selector that produced them.
pub type Extracted = IndexMap<Selector, String>;

const RECORD_TYPE_COLUMN: usize = 0;

fn cell<S: AsRef<str>>(row: &[S], index: usize) -> Result<&str, ExtractError> {
    row.get(index)
        .map(|c| c.as_ref())
        .ok_or(ExtractError::IndexOutOfRange {
            index,
            len: row.len(),
        })
}

/// The record type of a row; an empty row has none.
pub fn record_type_of<S: AsRef<str>>(row: &[S]) -> Result<&str, ExtractError> {
    cell(row, RECORD_TYPE_COLUMN)
}

/// Does `subtype` match the row?
///
/// [`Subtype::Any`] always matches. A tag matches the cell at
/// `subtype_column` exactly, or any cell of the row when no column is fixed.
pub(crate) fn subtype_matches<S: AsRef<str>>(
    row: &[S],
    subtype: &Subtype,
    subtype_column: Option<usize>,
) -> Result<bool, ExtractError> {
    match (subtype, subtype_column) {
        (Subtype::Any, _) => Ok(true),
        (Subtype::Tag(tag), Some(column)) => Ok(cell(row, column)? == tag.as_str()),
        (Subtype::Tag(tag), None) => Ok(row.iter().any(|c| c.as_ref() == tag.as_str())),
    }
}

/// Split a `name:type:value` cell. Cells with fewer than two colons are not
/// tagged; the value keeps any further colons.
pub fn split_tagged_cell(cell: &str) -> Option<(&str, &str, &str)> {
    let mut parts = cell.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(kind), Some(value)) => Some((name, kind, value)),
        _ => None,
    }
}

/// Value of the tagged cell `name` in the row. The last matching cell wins.
pub fn tagged_value<'a, S: AsRef<str>>(row: &'a [S], name: &str) -> Option<&'a str> {
    row.iter()
        .filter_map(|c| split_tagged_cell(c.as_ref()))
        .filter(|(tag, _, _)| *tag == name)
        .map(|(_, _, value)| value)
        .last()
}

/// Extract the fields selected by `address` from `row`.
///
/// Returns an empty map when the record type is not addressed or no subtype
/// matches. Every matching subtype contributes its selectors in order; a
/// selector seen again overwrites the earlier value. A named selector with no
/// matching tagged cell yields no entry.
///
/// Fails when the row is empty, or when a positional selector or the fixed
/// subtype column lies outside the row.
pub fn extract<S: AsRef<str>>(
    row: &[S],
    address: &Address,
    subtype_column: Option<usize>,
) -> Result<Extracted, ExtractError> {
    let mut extracted = Extracted::new();
    let record_type = record_type_of(row)?;
    let Some(subtypes) = address.get(record_type) else {
        return Ok(extracted);
    };

    for (subtype, selectors) in subtypes {
        if !subtype_matches(row, subtype, subtype_column)? {
            continue;
        }
        for selector in selectors {
            match selector {
                Selector::Positional(index) => {
                    extracted.insert(selector.clone(), cell(row, *index)?.to_string());
                }
                Selector::Named(name) => {
                    if let Some(value) = tagged_value(row, name) {
                        extracted.insert(selector.clone(), value.to_string());
                    }
                }
            }
        }
    }

    trace!(record_type, fields = extracted.len(), "extracted fields");
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::parse_fields_path;

    fn address(path: &str) -> Address {
        parse_fields_path(path, None).unwrap()
    }

    #[test]
    fn test_extract_tagged_cell() {
        let mut addr = Address::new();
        addr.push("RT", Subtype::Any, [Selector::from("x")]);
        let extracted = extract(&["RT", "x:int:42"], &addr, None).unwrap();
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[&Selector::from("x")], "42");
    }

    #[test]
    fn test_tag_value_keeps_colons() {
        let extracted = extract(&["RT", "t:Z:12:30:00"], &address("RT.t"), None).unwrap();
        assert_eq!(extracted[&Selector::from("t")], "12:30:00");
    }

    #[test]
    fn test_extract_positional() {
        let row = ["RT1", "a", "b", "c", "d"];
        let extracted = extract(&row, &address("RT1.2|4"), None).unwrap();
        let pairs: Vec<_> = extracted.iter().map(|(k, v)| (k.clone(), v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![(Selector::Positional(2), "b"), (Selector::Positional(4), "d")]
        );
    }

    #[test]
    fn test_unknown_record_type_is_empty() {
        let extracted = extract(&["RT9", "a"], &address("RT1.1;RT2:x.1"), None).unwrap();
        assert!(extracted.is_empty());
        let extracted = extract(&["RT9"], &Address::new(), Some(5)).unwrap();
        assert!(extracted.is_empty());
    }

    #[test]
    fn test_subtype_anywhere_in_row() {
        let addr = address("RT4:st5.1");
        assert_eq!(
            extract(&["RT4", "v", "st5"], &addr, None).unwrap()[&Selector::Positional(1)],
            "v"
        );
        assert!(extract(&["RT4", "v", "st6"], &addr, None).unwrap().is_empty());
        // Whole-cell comparison only
        assert!(extract(&["RT4", "v", "st55"], &addr, None).unwrap().is_empty());
    }

    #[test]
    fn test_subtype_fixed_column() {
        let addr = address("RT4:st5.1");
        assert!(extract(&["RT4", "v", "st5"], &addr, Some(1)).unwrap().is_empty());
        assert_eq!(
            extract(&["RT4", "st5", "v"], &addr, Some(1)).unwrap()[&Selector::Positional(1)],
            "st5"
        );
    }

    #[test]
    fn test_subtype_column_out_of_range() {
        let err = extract(&["RT4", "v"], &address("RT4:st5.1"), Some(3)).unwrap_err();
        assert_eq!(err, ExtractError::IndexOutOfRange { index: 3, len: 2 });
    }

    #[test]
    fn test_wildcard_and_subtype_merge() {
        let addr = address("RT1.1|x;RT1:st.2|x");
        let row = ["RT1", "a", "st", "x:s:first", "x:s:second"];
        let extracted = extract(&row, &addr, None).unwrap();
        assert_eq!(extracted.len(), 3);
        assert_eq!(extracted[&Selector::Positional(1)], "a");
        assert_eq!(extracted[&Selector::Positional(2)], "st");
        assert_eq!(extracted[&Selector::from("x")], "second");
        let keys: Vec<_> = extracted.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                Selector::Positional(1),
                Selector::from("x"),
                Selector::Positional(2)
            ]
        );
    }

    #[test]
    fn test_missing_tag_yields_no_entry() {
        let extracted = extract(&["RT", "y:i:1", "x:i"], &address("RT.x|0"), None).unwrap();
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[&Selector::Positional(0)], "RT");
    }

    #[test]
    fn test_positional_out_of_range() {
        let err = extract(&["RT1", "a"], &address("RT1.1|5"), None).unwrap_err();
        assert_eq!(err, ExtractError::IndexOutOfRange { index: 5, len: 2 });
    }

    #[test]
    fn test_empty_row() {
        let row: [&str; 0] = [];
        assert!(extract(&row, &address("RT1.1"), None).is_err());
    }

    #[test]
    fn test_extract_is_idempotent() {
        let addr = address("RT1.1|x;RT1:st.2");
        let row = vec!["RT1".to_string(), "st".to_string(), "x:i:9".to_string()];
        assert_eq!(
            extract(&row, &addr, None).unwrap(),
            extract(&row, &addr, None).unwrap()
        );
    }

    #[test]
    fn test_split_tagged_cell() {
        assert_eq!(split_tagged_cell("NM:Z:abc"), Some(("NM", "Z", "abc")));
        assert_eq!(split_tagged_cell("NM:Z:"), Some(("NM", "Z", "")));
        assert_eq!(split_tagged_cell("NM:Z"), None);
        assert_eq!(split_tagged_cell("plain"), None);
    }
}
