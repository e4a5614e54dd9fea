//! AST representation and tree traversal operations
//!
//! This module contains the variable alphabet, the AST types and the fold
//! operations for propositional formulas.

use super::Formula;
use std::fmt;
use std::sync::Arc;

/// A propositional variable
///
/// The alphabet is fixed to `p`, `q` and `r`. The derived ordering
/// (`P < Q < R`) is the column order of every truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable {
    /// The variable `p`
    P,
    /// The variable `q`
    Q,
    /// The variable `r`
    R,
}

impl Variable {
    /// Every variable, in column order
    pub const ALL: [Variable; 3] = [Variable::P, Variable::Q, Variable::R];

    /// Map a character to its variable, if it names one
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'p' => Some(Variable::P),
            'q' => Some(Variable::Q),
            'r' => Some(Variable::R),
            _ => None,
        }
    }

    /// The character this variable is written as
    pub fn as_char(self) -> char {
        match self {
            Variable::P => 'p',
            Variable::Q => 'q',
            Variable::R => 'r',
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Node type for formula tree folding
///
/// This enum represents the structure of a formula node without exposing
/// internal Arc types. It's used with [`Formula::fold`] to traverse and
/// transform formula trees bottom-up: `T` is the accumulated result from the
/// child nodes.
///
/// [`Formula::fold`]: Formula::fold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaNode<T> {
    /// A variable
    Variable(Variable),
    /// Negation with the result from the inner subtree
    Not(T),
    /// Conjunction with results from left and right subtrees
    And(T, T),
    /// Disjunction with results from left and right subtrees
    Or(T, T),
    /// Material conditional (antecedent, consequent)
    Implies(T, T),
    /// Biconditional with results from left and right subtrees
    Iff(T, T),
}

/// AST representation of a formula
///
/// Pure tree structure holding `Arc<FormulaAst>` children. Built by the
/// generated parser and by the method API on [`Formula`]. Not reachable from
/// outside the crate: the `ast` module is private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaAst {
    Variable(Variable),
    Not(Arc<FormulaAst>),
    And(Arc<FormulaAst>, Arc<FormulaAst>),
    Or(Arc<FormulaAst>, Arc<FormulaAst>),
    Implies(Arc<FormulaAst>, Arc<FormulaAst>),
    Iff(Arc<FormulaAst>, Arc<FormulaAst>),
}

impl Formula {
    /// Fold the formula tree depth-first from leaves to root
    ///
    /// The function `f` is called on each node with an [`FormulaNode`]
    /// carrying the results already computed for its children.
    ///
    /// # Examples
    ///
    /// Count the number of connectives in a formula:
    ///
    /// ```
    /// use truth_table::{Formula, FormulaNode, Variable};
    ///
    /// let p = Formula::variable(Variable::P);
    /// let q = Formula::variable(Variable::Q);
    /// let formula = p.implies(&q.not());
    ///
    /// let connectives = formula.fold(|node| match node {
    ///     FormulaNode::Variable(_) => 0,
    ///     FormulaNode::Not(inner) => inner + 1,
    ///     FormulaNode::And(l, r)
    ///     | FormulaNode::Or(l, r)
    ///     | FormulaNode::Implies(l, r)
    ///     | FormulaNode::Iff(l, r) => l + r + 1,
    /// });
    ///
    /// assert_eq!(connectives, 2);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(FormulaNode<T>) -> T + Copy,
    {
        Self::fold_ast(&self.ast, &f)
    }

    /// Fold over an AST (helper for fold)
    fn fold_ast<T, F>(ast: &FormulaAst, f: &F) -> T
    where
        F: Fn(FormulaNode<T>) -> T,
    {
        match ast {
            FormulaAst::Variable(var) => f(FormulaNode::Variable(*var)),
            FormulaAst::Not(inner) => {
                let inner_result = Self::fold_ast(inner, f);
                f(FormulaNode::Not(inner_result))
            }
            FormulaAst::And(left, right) => {
                let (l, r) = (Self::fold_ast(left, f), Self::fold_ast(right, f));
                f(FormulaNode::And(l, r))
            }
            FormulaAst::Or(left, right) => {
                let (l, r) = (Self::fold_ast(left, f), Self::fold_ast(right, f));
                f(FormulaNode::Or(l, r))
            }
            FormulaAst::Implies(left, right) => {
                let (l, r) = (Self::fold_ast(left, f), Self::fold_ast(right, f));
                f(FormulaNode::Implies(l, r))
            }
            FormulaAst::Iff(left, right) => {
                let (l, r) = (Self::fold_ast(left, f), Self::fold_ast(right, f));
                f(FormulaNode::Iff(l, r))
            }
        }
    }
}
