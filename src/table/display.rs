//! Text rendering of truth tables
//!
//! ```text
//! p | q | Resultado
//! -----------------
//! 1 | 1 | 1
//! 1 | 0 | 0
//! 0 | 1 | 0
//! 0 | 0 | 0
//! ```

use super::{Row, TableResult, TruthTable};
use std::fmt;

/// Header of the result column
const RESULT_HEADER: &str = "Resultado";

fn join_bits(row: &Row) -> String {
    row.value_bits()
        .into_iter()
        .chain(std::iter::once(row.result_bit()))
        .map(|bit| bit.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_bits(self))
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self
            .variables
            .iter()
            .map(|var| var.to_string())
            .chain(std::iter::once(RESULT_HEADER.to_string()))
            .collect::<Vec<_>>()
            .join(" | ");

        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// The table followed by the verdict sentence
impl fmt::Display for TableResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)?;
        write!(f, "{}", self.classification.sentence())
    }
}
