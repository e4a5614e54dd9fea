//! Line-oriented input with one expression per line
//!
//! Blank lines and lines starting with `#` are skipped. Every other line is
//! an independent request: a failure on one line does not stop the others.
//!
//! ```text
//! # classic laws
//! p ∨ ¬p
//! (p → q) ↔ (¬q → ¬p)
//! ```

use crate::error::ValidationError;
use crate::table::TableResult;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// The outcome of one line of batch input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    line: usize,
    expression: String,
    outcome: Result<TableResult, ValidationError>,
}

impl BatchEntry {
    /// 1-based line number in the input
    pub fn line(&self) -> usize {
        self.line
    }

    /// The expression as written on the line, trimmed
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The table, or why it could not be built
    pub fn outcome(&self) -> Result<&TableResult, &ValidationError> {
        self.outcome.as_ref()
    }

    /// Whether this line produced a table
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

fn process_line(line_num: usize, line: &str) -> Option<BatchEntry> {
    let expression = line.trim();
    if expression.is_empty() || expression.starts_with('#') {
        return None;
    }

    let outcome = crate::generate_table(expression);
    if let Err(e) = &outcome {
        warn!("line {}: {}", line_num + 1, e);
    }
    Some(BatchEntry {
        line: line_num + 1,
        expression: expression.to_string(),
        outcome,
    })
}

/// Process every expression in a string
///
/// # Examples
///
/// ```
/// use truth_table::generate_tables;
///
/// let entries = generate_tables("# laws\np ∨ ¬p\n\np ∧ x\n");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].line(), 2);
/// assert!(entries[0].is_ok());
/// assert!(!entries[1].is_ok());
/// ```
pub fn generate_tables(input: &str) -> Vec<BatchEntry> {
    input
        .lines()
        .enumerate()
        .filter_map(|(line_num, line)| process_line(line_num, line))
        .collect()
}

/// Process every expression read from `reader`
///
/// # Errors
///
/// Only I/O errors (including invalid UTF-8) are returned; per-line failures
/// are recorded in the entries.
pub fn generate_tables_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<BatchEntry>> {
    let mut entries = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        if let Some(entry) = process_line(line_num, &line?) {
            entries.push(entry);
        }
    }
    debug!("processed {} expression(s)", entries.len());
    Ok(entries)
}

/// Process every expression in a file
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn generate_tables_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<BatchEntry>> {
    let file = File::open(path.as_ref())?;
    generate_tables_from_reader(BufReader::new(file))
}
