//! Semantic classification of a result column

use crate::expression::EvaluationError;
use std::fmt;

/// How a formula behaves across all assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// True under every assignment
    Tautology,
    /// False under every assignment
    Contradiction,
    /// True under some assignments and false under others
    Contingency,
}

impl Classification {
    /// The label shown to users (`TAUTOLOGIA`, `CONTRADIÇÃO`, `CONTINGÊNCIA`)
    pub fn label(self) -> &'static str {
        match self {
            Classification::Tautology => "TAUTOLOGIA",
            Classification::Contradiction => "CONTRADIÇÃO",
            Classification::Contingency => "CONTINGÊNCIA",
        }
    }

    /// The full verdict sentence, e.g. `A proposição é uma TAUTOLOGIA.`
    pub fn sentence(self) -> String {
        format!("A proposição é uma {}.", self.label())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a column of results
///
/// All true is a tautology, all false a contradiction, anything else a
/// contingency. A single row (a formula without variables) is therefore never
/// a contingency.
///
/// # Errors
///
/// [`EvaluationError::NoRows`] if `results` is empty: every truth table has at
/// least one row, so an empty column means something upstream went wrong.
///
/// # Examples
///
/// ```
/// use truth_table::{classify, Classification};
///
/// assert_eq!(classify(&[true, true]), Ok(Classification::Tautology));
/// assert_eq!(classify(&[false]), Ok(Classification::Contradiction));
/// assert_eq!(classify(&[true, false]), Ok(Classification::Contingency));
/// assert!(classify(&[]).is_err());
/// ```
pub fn classify(results: &[bool]) -> Result<Classification, EvaluationError> {
    if results.is_empty() {
        return Err(EvaluationError::NoRows);
    }
    Ok(if results.iter().all(|&r| r) {
        Classification::Tautology
    } else if !results.iter().any(|&r| r) {
        Classification::Contradiction
    } else {
        Classification::Contingency
    })
}
