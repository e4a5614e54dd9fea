//! Error types for truth-table requests
//!
//! [`ValidationError`] is what [`generate_table`](crate::generate_table)
//! reports to its caller. Each variant corresponds to one user-facing message;
//! the wording of those messages belongs to the presentation layer.

use crate::expression::EvaluationError;
use std::fmt;
use std::io;

/// Why a raw expression could not be turned into a truth table
///
/// Checks run in declaration order: parentheses first, then the character
/// set, then parsing and evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The expression has more `(` than `)` or the reverse
    UnbalancedParentheses,

    /// The trimmed expression contains a character that is not a variable,
    /// whitespace, a parenthesis or part of an operator spelling
    InvalidCharacterSet,

    /// The expression passed validation but is not a well-formed formula
    ///
    /// Wraps the underlying [`EvaluationError`] with parser details.
    EvaluationFailure(EvaluationError),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnbalancedParentheses => write!(f, "Unbalanced parentheses"),
            ValidationError::InvalidCharacterSet => write!(
                f,
                "Invalid expression: only the variables p, q, r, parentheses and the \
                 operators ¬ ! ∧ & ∨ | → => ↔ <=> are allowed"
            ),
            ValidationError::EvaluationFailure(e) => write!(f, "Evaluation failed: {}", e),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValidationError::EvaluationFailure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EvaluationError> for ValidationError {
    fn from(err: EvaluationError) -> Self {
        ValidationError::EvaluationFailure(err)
    }
}

impl From<ValidationError> for io::Error {
    fn from(err: ValidationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_evaluation_error_converts_and_chains() {
        let err: ValidationError = EvaluationError::NoRows.into();
        assert!(matches!(err, ValidationError::EvaluationFailure(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("without rows"));
    }

    #[test]
    fn test_validation_errors_have_no_source() {
        assert!(ValidationError::UnbalancedParentheses.source().is_none());
        assert!(ValidationError::InvalidCharacterSet.source().is_none());
    }

    #[test]
    fn test_invalid_character_set_lists_operators() {
        let msg = ValidationError::InvalidCharacterSet.to_string();
        assert!(msg.contains("p, q, r"));
        assert!(msg.contains("<=>"));
    }

    #[test]
    fn test_validation_error_to_io_error() {
        let io_err: io::Error = ValidationError::UnbalancedParentheses.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
