//! # Truth tables for propositional formulas
//!
//! This crate evaluates propositional formulas over the variables `p`, `q`
//! and `r`, builds their truth tables and classifies them as a tautology,
//! a contradiction or a contingency.
//!
//! ## Overview
//!
//! A request goes through three stages, each usable on its own:
//!
//! 1. **Validation** - [`parentheses_balanced`] and [`validate`] reject input
//!    with unbalanced parentheses or foreign characters.
//! 2. **Normalization and parsing** - [`normalize`] rewrites the operator
//!    spellings into a canonical form that [`Formula::parse`] reads with a
//!    dedicated grammar. Nothing outside that grammar is ever executed.
//! 3. **Tabulation** - [`TruthTable`] enumerates every assignment, evaluates the
//!    formula under each one and [`classify`] reduces the result column.
//!
//! ## Operators
//!
//! | Connective    | Glyph | ASCII |
//! |---------------|-------|-------|
//! | Negation      | `¬`   | `!`   |
//! | Conjunction   | `∧`   | `&`   |
//! | Disjunction   | `∨`   | `\|`  |
//! | Conditional   | `→`   | `=>`  |
//! | Biconditional | `↔`   | `<=>` |
//!
//! Negation binds tightest, then conjunction, then disjunction, then the
//! conditional and biconditional. Binary connectives associate to the left.
//!
//! ## Quick Start
//!
//! ```
//! use truth_table::{generate_table, Classification, Variable};
//!
//! # fn main() -> Result<(), truth_table::ValidationError> {
//! let result = generate_table("(p ∨ q) → r")?;
//!
//! assert_eq!(result.variables(), [Variable::P, Variable::Q, Variable::R]);
//! assert_eq!(result.rows().len(), 8);
//! assert_eq!(result.classification(), Classification::Contingency);
//!
//! // Rows start with every variable true
//! let first = &result.rows()[0];
//! assert_eq!(first.value_bits(), [1, 1, 1]);
//! assert_eq!(first.result_bit(), 1);
//!
//! println!("{}", result);
//! # Ok(())
//! # }
//! ```
//!
//! Errors tell the caller which check failed:
//!
//! ```
//! use truth_table::{generate_table, ValidationError};
//!
//! assert_eq!(
//!     generate_table("(p ∧ q").unwrap_err(),
//!     ValidationError::UnbalancedParentheses
//! );
//! assert_eq!(
//!     generate_table("p ∧ x").unwrap_err(),
//!     ValidationError::InvalidCharacterSet
//! );
//! assert!(matches!(
//!     generate_table("p q").unwrap_err(),
//!     ValidationError::EvaluationFailure(_)
//! ));
//! ```
//!
//! ## Concurrency
//!
//! Every function is pure: no state is kept between calls and every public
//! type is `Send + Sync`.

// Public modules
pub mod batch;
pub mod error;
pub mod expression;
pub mod table;
pub mod validate;

// Re-export high-level public API
pub use batch::{
    generate_tables, generate_tables_from_file, generate_tables_from_reader, BatchEntry,
};
pub use error::ValidationError;
pub use expression::{evaluate, Assignment, EvaluationError, Formula, FormulaNode, Variable};
pub use table::{
    classify, enumerate_assignments, extract_variables, Assignments, Classification, Row,
    TableResult, TruthTable,
};
pub use validate::{normalize, parentheses_balanced, validate};

use log::debug;

/// Build and classify the truth table of a raw expression
///
/// Parentheses are checked first, then the character set, then the
/// expression is parsed and evaluated under every assignment.
///
/// # Errors
///
/// - [`ValidationError::UnbalancedParentheses`] if `(` and `)` counts differ
/// - [`ValidationError::InvalidCharacterSet`] if the trimmed expression has a
///   character outside the allowed set
/// - [`ValidationError::EvaluationFailure`] if the expression is not a
///   well-formed formula
pub fn generate_table(expression: &str) -> Result<TableResult, ValidationError> {
    if !parentheses_balanced(expression) {
        debug!("rejected {:?}: unbalanced parentheses", expression);
        return Err(ValidationError::UnbalancedParentheses);
    }
    if !validate(expression) {
        debug!("rejected {:?}: invalid characters", expression);
        return Err(ValidationError::InvalidCharacterSet);
    }

    let table = TruthTable::generate(expression)?;
    Ok(TableResult::from_table(table)?)
}
