//! Error types for formula parsing and evaluation

use super::Variable;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while turning a canonical formula into truth values
///
/// Character-class validation does not guarantee that an expression is a
/// well-formed formula, so this is the safety net behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// There is nothing to evaluate
    Empty {
        /// The blank input as given
        input: Arc<str>,
    },
    /// The grammar rejected the expression
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The canonical input string that failed to parse
        input: Arc<str>,
        /// Byte offset in `input` where parsing failed, when known
        position: Option<usize>,
    },
    /// The formula references a variable the assignment does not bind
    UnboundVariable {
        /// The unbound variable
        variable: Variable,
    },
    /// A classification was requested for a table without rows
    NoRows,
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::Empty { input } => {
                write!(f, "Empty expression: {:?}", input)
            }
            EvaluationError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse formula at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(f, "Failed to parse formula: {}. Input: {:?}", message, input)
                }
            }
            EvaluationError::UnboundVariable { variable } => {
                write!(f, "Variable '{}' has no value in the assignment", variable)
            }
            EvaluationError::NoRows => {
                write!(f, "Cannot classify a truth table without rows")
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

impl From<EvaluationError> for io::Error {
    fn from(err: EvaluationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_syntax_with_position() {
        let err = EvaluationError::InvalidSyntax {
            message: Arc::from("unexpected token"),
            input: Arc::from("p  q"),
            position: Some(3),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 3"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_invalid_syntax_without_position() {
        let err = EvaluationError::InvalidSyntax {
            message: Arc::from("custom"),
            input: Arc::from("p"),
            position: None,
        };
        let msg = err.to_string();
        assert!(!msg.contains("position"));
        assert!(msg.contains("custom"));
    }

    #[test]
    fn test_unbound_variable_names_the_variable() {
        let err = EvaluationError::UnboundVariable {
            variable: Variable::R,
        };
        assert!(err.to_string().contains("'r'"));
    }

    #[test]
    fn test_evaluation_error_to_io_error() {
        let io_err: io::Error = EvaluationError::NoRows.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
