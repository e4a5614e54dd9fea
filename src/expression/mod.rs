//! Propositional formulas: grammar, AST, evaluation and display
//!
//! Formulas are parsed from the canonical operator form produced by
//! [`normalize`](crate::normalize) with an LALR grammar compiled at build time,
//! or built programmatically with the method API. Parsing and evaluation are
//! closed over the variables `p`, `q`, `r` and the five connectives: nothing
//! outside the grammar can ever be executed.
//!
//! # Canonical operator form
//!
//! | Connective     | Token | Precedence |
//! |----------------|-------|------------|
//! | Negation       | `not` | highest    |
//! | Conjunction    | `and` |            |
//! | Disjunction    | `or`  |            |
//! | Conditional    | `<=`  | lowest     |
//! | Biconditional  | `==`  | lowest     |
//!
//! Binary connectives are left-associative; parentheses override precedence.
//! The conditional is written as the boolean ordering `antecedent <= consequent`,
//! which is false only for `true <= false`.
//!
//! # Examples
//!
//! ```
//! use truth_table::{Assignment, Formula, Variable};
//!
//! # fn main() -> Result<(), truth_table::EvaluationError> {
//! let formula = Formula::parse("( p or q ) <= r")?;
//!
//! let mut assignment = Assignment::new();
//! assignment.insert(Variable::P, true);
//! assignment.insert(Variable::Q, false);
//! assignment.insert(Variable::R, false);
//!
//! assert!(!formula.evaluate(&assignment)?);
//! assert_eq!(formula.to_string(), "p ∨ q → r");
//! # Ok(())
//! # }
//! ```

mod ast;
mod display;
pub mod error;
mod eval;
mod parser;

pub use ast::{FormulaNode, Variable};
pub use error::EvaluationError;
pub use eval::{evaluate, Assignment};

pub(crate) use ast::FormulaAst;

use std::collections::BTreeSet;
use std::sync::Arc;

/// A propositional formula over `p`, `q` and `r`
///
/// Uses `Arc` internally for cheap cloning and structural sharing between
/// formulas built from one another.
///
/// # Examples
///
/// ```
/// use truth_table::{Formula, Variable};
///
/// let p = Formula::variable(Variable::P);
/// let q = Formula::variable(Variable::Q);
///
/// // Contraposition: (p → q) ↔ (¬q → ¬p)
/// let law = p.implies(&q).iff(&q.not().implies(&p.not()));
/// assert_eq!(law.to_string(), "(p → q) ↔ (¬q → ¬p)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Formula {
    ast: Arc<FormulaAst>,
}

impl Formula {
    pub(crate) fn from_ast(ast: Arc<FormulaAst>) -> Self {
        Formula { ast }
    }

    /// Create a formula consisting of a single variable
    pub fn variable(var: Variable) -> Self {
        Formula::from_ast(Arc::new(FormulaAst::Variable(var)))
    }

    /// Negation of this formula
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Self {
        Formula::from_ast(Arc::new(FormulaAst::Not(Arc::clone(&self.ast))))
    }

    /// Conjunction of this formula with another
    pub fn and(&self, other: &Formula) -> Self {
        Formula::from_ast(Arc::new(FormulaAst::And(
            Arc::clone(&self.ast),
            Arc::clone(&other.ast),
        )))
    }

    /// Disjunction of this formula with another
    pub fn or(&self, other: &Formula) -> Self {
        Formula::from_ast(Arc::new(FormulaAst::Or(
            Arc::clone(&self.ast),
            Arc::clone(&other.ast),
        )))
    }

    /// Material conditional with this formula as antecedent
    pub fn implies(&self, consequent: &Formula) -> Self {
        Formula::from_ast(Arc::new(FormulaAst::Implies(
            Arc::clone(&self.ast),
            Arc::clone(&consequent.ast),
        )))
    }

    /// Biconditional of this formula with another
    pub fn iff(&self, other: &Formula) -> Self {
        Formula::from_ast(Arc::new(FormulaAst::Iff(
            Arc::clone(&self.ast),
            Arc::clone(&other.ast),
        )))
    }

    /// Collect the variables referenced by this formula, in column order
    pub fn collect_variables(&self) -> BTreeSet<Variable> {
        self.fold(|node| match node {
            FormulaNode::Variable(var) => BTreeSet::from([var]),
            FormulaNode::Not(inner) => inner,
            FormulaNode::And(mut l, r)
            | FormulaNode::Or(mut l, r)
            | FormulaNode::Implies(mut l, r)
            | FormulaNode::Iff(mut l, r) => {
                l.extend(r);
                l
            }
        })
    }
}
