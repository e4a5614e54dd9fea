//! Evaluation of formulas under an assignment

use super::ast::FormulaAst;
use super::error::EvaluationError;
use super::{Formula, Variable};
use std::collections::BTreeMap;

/// A binding of truth values to variables
pub type Assignment = BTreeMap<Variable, bool>;

impl Formula {
    /// Evaluate the formula with a given variable assignment
    ///
    /// Every variable the formula references must be bound; extra bindings
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_table::{Assignment, Formula, Variable};
    ///
    /// let p = Formula::variable(Variable::P);
    /// let q = Formula::variable(Variable::Q);
    /// let conditional = p.implies(&q);
    ///
    /// let mut assignment = Assignment::new();
    /// assignment.insert(Variable::P, true);
    /// assignment.insert(Variable::Q, false);
    /// assert_eq!(conditional.evaluate(&assignment), Ok(false));
    ///
    /// assignment.insert(Variable::P, false);
    /// assert_eq!(conditional.evaluate(&assignment), Ok(true));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvaluationError> {
        evaluate_ast(&self.ast, assignment)
    }
}

fn evaluate_ast(ast: &FormulaAst, assignment: &Assignment) -> Result<bool, EvaluationError> {
    // Both operands are always evaluated so an unbound variable is reported
    // regardless of short-circuiting.
    let binary = |l: &FormulaAst, r: &FormulaAst| -> Result<(bool, bool), EvaluationError> {
        Ok((evaluate_ast(l, assignment)?, evaluate_ast(r, assignment)?))
    };

    Ok(match ast {
        FormulaAst::Variable(variable) => *assignment
            .get(variable)
            .ok_or(EvaluationError::UnboundVariable {
                variable: *variable,
            })?,
        FormulaAst::Not(inner) => !evaluate_ast(inner, assignment)?,
        FormulaAst::And(l, r) => {
            let (l, r) = binary(l, r)?;
            l && r
        }
        FormulaAst::Or(l, r) => {
            let (l, r) = binary(l, r)?;
            l || r
        }
        FormulaAst::Implies(l, r) => {
            // false <= true: only true -> false is false
            let (l, r) = binary(l, r)?;
            l <= r
        }
        FormulaAst::Iff(l, r) => {
            let (l, r) = binary(l, r)?;
            l == r
        }
    })
}

/// Parse a canonical formula and evaluate it in one step
///
/// Convenience for single evaluations; [`TruthTable::generate`] parses once
/// and evaluates the same [`Formula`] for every row.
///
/// [`TruthTable::generate`]: crate::TruthTable::generate
pub fn evaluate(normalized: &str, assignment: &Assignment) -> Result<bool, EvaluationError> {
    Formula::parse(normalized)?.evaluate(assignment)
}
