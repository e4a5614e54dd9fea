//! Variable extraction and assignment enumeration

use crate::expression::Variable;
use std::collections::BTreeSet;

/// Collect the distinct variables an expression mentions, in column order
///
/// Scans the characters of the expression; operator spellings and anything
/// else are ignored.
///
/// # Examples
///
/// ```
/// use truth_table::{extract_variables, Variable};
///
/// assert_eq!(extract_variables("r ∧ (p ∨ r)"), [Variable::P, Variable::R]);
/// assert!(extract_variables("¬()").is_empty());
/// ```
pub fn extract_variables(expression: &str) -> Vec<Variable> {
    expression
        .chars()
        .filter_map(Variable::from_char)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Enumerate every assignment of truth values to `variables`
///
/// Yields exactly `2^n` tuples, one value per variable in the given order.
/// Tuples come in descending lexicographic order with `true > false`: the
/// first has every variable true, the last every variable false, and the
/// first variable changes slowest.
///
/// # Examples
///
/// ```
/// use truth_table::{enumerate_assignments, Variable};
///
/// let rows: Vec<Vec<bool>> = enumerate_assignments(&[Variable::P, Variable::Q]).collect();
/// assert_eq!(
///     rows,
///     [
///         vec![true, true],
///         vec![true, false],
///         vec![false, true],
///         vec![false, false],
///     ]
/// );
/// ```
pub fn enumerate_assignments(variables: &[Variable]) -> Assignments {
    let width = variables.len();
    Assignments {
        width,
        remaining: 1usize << width,
    }
}

/// Iterator over truth-value tuples, see [`enumerate_assignments`]
///
/// Row `k` (counting from the last) is the binary expansion of `k`, most
/// significant bit first, so counting `remaining` down walks the rows
/// top to bottom.
#[derive(Debug, Clone)]
pub struct Assignments {
    width: usize,
    remaining: usize,
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let code = self.remaining;
        Some(
            (0..self.width)
                .map(|column| (code >> (self.width - 1 - column)) & 1 == 1)
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Assignments {}
