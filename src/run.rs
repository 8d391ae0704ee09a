//! Whole-file drivers behind the command-line tools.
//!
//! Each driver takes the input text and returns
//! `(output_text, input_count, output_count)`.

use std::fs;
use std::io::{self, Read};

use serde_json::{Map, Value};
use tracing::debug;

use crate::address::{Address, RecordAddress};
use crate::count::RecordCounter;
use crate::error::TabrecError;
use crate::extract::{Extracted, extract};
use crate::row::{DEFAULT_DELIMITER, rows};

/// Read a whole input file; `-` reads stdin.
pub fn read_input(path: &str) -> Result<String, TabrecError> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

/// Settings shared by the drivers.
#[derive(Debug, Clone, Copy)]
pub struct RowOptions {
    pub delimiter: char,
    pub subtype_column: Option<usize>,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            subtype_column: None,
        }
    }
}

/// Output format of [`extract_text`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Extracted values joined by the input delimiter.
    #[default]
    Delimited,
    /// One JSON object per row, keyed by selector.
    Json,
}

fn format_extracted(
    extracted: &Extracted,
    format: OutputFormat,
    delimiter: char,
) -> Result<String, TabrecError> {
    match format {
        OutputFormat::Delimited => Ok(extracted
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(&delimiter.to_string())),
        OutputFormat::Json => {
            let object: Map<String, Value> = extracted
                .iter()
                .map(|(selector, value)| (selector.to_string(), Value::String(value.clone())))
                .collect();
            Ok(serde_json::to_string(&Value::Object(object))?)
        }
    }
}

/// Extract fields from every record line of `input_text`.
///
/// Rows that yield nothing are skipped.
pub fn extract_text(
    input_text: &str,
    address: &Address,
    options: RowOptions,
    format: OutputFormat,
) -> Result<(String, usize, usize), TabrecError> {
    let mut input_count = 0;
    let mut output = Vec::new();

    for (line, row) in rows(input_text, options.delimiter) {
        input_count += 1;
        let extracted = extract(&row, address, options.subtype_column)
            .map_err(|source| TabrecError::Extract { line, source })?;
        if extracted.is_empty() {
            continue;
        }
        output.push(format_extracted(&extracted, format, options.delimiter)?);
    }

    debug!(input_count, output_count = output.len(), "extraction done");
    let output_count = output.len();
    Ok((output.join("\n"), input_count, output_count))
}

/// Count record lines of `input_text` per record type, optionally keeping
/// only rows matched by `filter`.
///
/// Output is one `record_type<TAB>count` line per record type.
pub fn count_text(
    input_text: &str,
    filter: Option<RecordAddress>,
    options: RowOptions,
) -> Result<(String, usize, usize), TabrecError> {
    let mut counter = match filter {
        Some(filter) => RecordCounter::with_filter(filter, options.subtype_column),
        None => RecordCounter::new(),
    };
    let mut input_count = 0;

    for (line, row) in rows(input_text, options.delimiter) {
        input_count += 1;
        counter
            .process(&row)
            .map_err(|source| TabrecError::Extract { line, source })?;
    }

    let output_count = counter.total();
    debug!(input_count, output_count, "count done");
    let output_text = counter
        .finish()
        .into_iter()
        .map(|(record_type, n)| format!("{record_type}\t{n}"))
        .collect::<Vec<_>>()
        .join("\n");
    Ok((output_text, input_count, output_count))
}
