//! # tabrec
//!
//! Addressing and field extraction for tabular record files.
//!
//! A tabular record file holds heterogeneous rows: the first column of each
//! row is its record type, and later columns may carry a subtype tag or
//! `name:type:value` tagged cells.
//!
//! ## Overview
//!
//! - **Records paths** select rows: `RT1;RT2:st3;RT4:st5|st6`
//! - **Fields paths** select fields of rows: `RT1.2|4;RT4:st5.XY`
//! - **Selectors** are 0-based column indexes or tag names
//! - **Fieldnames** (`RT:name,name;RT:name`) let paths name columns
//!
//! ## Example
//!
//! ```
//! use tabrec::{Selector, extract, parse_fields_path};
//!
//! let address = parse_fields_path("S.1|LN;E:link.1|2", None).unwrap();
//!
//! let row = ["S", "seq1", "ACGT", "LN:i:4"];
//! let fields = extract(&row, &address, None).unwrap();
//!
//! assert_eq!(fields[&Selector::Positional(1)], "seq1");
//! assert_eq!(fields[&Selector::from("LN")], "4");
//! ```

pub mod address;
pub mod count;
pub mod error;
pub mod extract;
pub mod fieldnames;
pub mod logging;
pub mod row;
pub mod run;
pub mod selector;

pub use address::{
    Address, RecordAddress, SubtypeSelectors, parse_fields_address, parse_fields_path,
    parse_record_address, parse_records_path,
};
pub use count::RecordCounter;
pub use error::{AddressError, ExtractError, TabrecError};
pub use extract::{Extracted, extract, record_type_of, split_tagged_cell, tagged_value};
pub use fieldnames::{Fieldnames, parse_fieldnames};
pub use row::{DEFAULT_DELIMITER, split_line};
pub use run::{OutputFormat, RowOptions, count_text, extract_text, read_input};
pub use selector::{Selector, Subtype};
