//! Display and Debug formatting for formulas

use super::ast::FormulaAst;
use super::Formula;
use std::fmt;

/// Binding strength of a node, used to minimize parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Binding {
    Conditional, // → and ↔
    Or,
    And,
    Not, // Negation and atoms
}

fn binding(ast: &FormulaAst) -> Binding {
    match ast {
        FormulaAst::Implies(_, _) | FormulaAst::Iff(_, _) => Binding::Conditional,
        FormulaAst::Or(_, _) => Binding::Or,
        FormulaAst::And(_, _) => Binding::And,
        FormulaAst::Not(_) | FormulaAst::Variable(_) => Binding::Not,
    }
}

/// Write `ast` as an operand of a node binding at `parent`
///
/// Left operands at the parent's own level stay bare (left associativity),
/// except under conditionals, where chains are always bracketed.
fn fmt_operand(
    f: &mut fmt::Formatter<'_>,
    ast: &FormulaAst,
    parent: Binding,
    right: bool,
) -> fmt::Result {
    let own = binding(ast);
    let needs_parens =
        own < parent || (own == parent && (right || parent == Binding::Conditional));

    if needs_parens {
        write!(f, "(")?;
        fmt_ast(f, ast)?;
        write!(f, ")")
    } else {
        fmt_ast(f, ast)
    }
}

fn fmt_binary(
    f: &mut fmt::Formatter<'_>,
    ast: &FormulaAst,
    left: &FormulaAst,
    symbol: &str,
    right: &FormulaAst,
) -> fmt::Result {
    let level = binding(ast);
    fmt_operand(f, left, level, false)?;
    write!(f, " {} ", symbol)?;
    fmt_operand(f, right, level, true)
}

fn fmt_ast(f: &mut fmt::Formatter<'_>, ast: &FormulaAst) -> fmt::Result {
    match ast {
        FormulaAst::Variable(var) => write!(f, "{}", var),
        FormulaAst::Not(inner) => {
            write!(f, "¬")?;
            fmt_operand(f, inner, Binding::Not, false)
        }
        FormulaAst::And(l, r) => fmt_binary(f, ast, l, "∧", r),
        FormulaAst::Or(l, r) => fmt_binary(f, ast, l, "∨", r),
        FormulaAst::Implies(l, r) => fmt_binary(f, ast, l, "→", r),
        FormulaAst::Iff(l, r) => fmt_binary(f, ast, l, "↔", r),
    }
}

/// Debug formatting for formulas
///
/// Formats formulas in glyph notation (`¬ ∧ ∨ → ↔`) with minimal parentheses
/// based on operator precedence. The output is itself valid input for
/// [`generate_table`](crate::generate_table).
///
/// # Examples
///
/// ```
/// use truth_table::{Formula, Variable};
///
/// let p = Formula::variable(Variable::P);
/// let q = Formula::variable(Variable::Q);
/// let r = Formula::variable(Variable::R);
///
/// assert_eq!(format!("{:?}", p.and(&q).or(&r)), "p ∧ q ∨ r");
/// assert_eq!(format!("{:?}", p.or(&q).and(&r)), "(p ∨ q) ∧ r");
/// ```
impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_ast(f, &self.ast)
    }
}

/// Display formatting for formulas
///
/// Delegates to the `Debug` implementation.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
