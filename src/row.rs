//! Splitting lines of a tabular record file into rows.

/// Default cell delimiter of tabular record files.
pub const DEFAULT_DELIMITER: char = '\t';

/// Split one line into cells, dropping a trailing line terminator.
///
/// The record type is always the first cell, so a line always yields at
/// least one cell (possibly empty).
pub fn split_line(line: &str, delimiter: char) -> Vec<&str> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);
    line.split(delimiter).collect()
}

/// Empty lines and `#` comment/header lines carry no record.
pub fn is_record_line(line: &str) -> bool {
    !line.trim_end_matches(['\r', '\n']).is_empty() && !line.starts_with('#')
}

/// Rows of a whole text, with their 1-based line numbers.
pub fn rows(text: &str, delimiter: char) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| is_record_line(line))
        .map(move |(i, line)| (i + 1, split_line(line, delimiter)))
}
