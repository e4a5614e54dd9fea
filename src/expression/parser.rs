//! Parsing support for propositional formulas

use super::error::EvaluationError;
use super::Formula;
use lalrpop_util::ParseError;
use log::trace;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/formula.rs"));
}

impl Formula {
    /// Parse a formula from its canonical operator form
    ///
    /// Accepts exactly the tokens `p`, `q`, `r`, `not`, `and`, `or`, `<=`,
    /// `==` and parentheses, separated by any amount of whitespace. Raw user
    /// input must go through [`normalize`](crate::normalize) first.
    ///
    /// # Errors
    ///
    /// [`EvaluationError::Empty`] for blank input and
    /// [`EvaluationError::InvalidSyntax`] for anything the grammar rejects.
    pub fn parse(input: &str) -> Result<Self, EvaluationError> {
        if input.trim().is_empty() {
            return Err(EvaluationError::Empty {
                input: Arc::from(input),
            });
        }

        let ast = parser_impl::ExprParser::new().parse(input).map_err(|e| {
            let position = error_position(&e);
            EvaluationError::InvalidSyntax {
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(input),
                position,
            }
        })?;

        trace!("parsed {:?} into {:?}", input, ast);
        Ok(Formula::from_ast(ast))
    }
}

/// Byte offset in the input at which the parser gave up
fn error_position<T, E>(error: &ParseError<usize, T, E>) -> Option<usize> {
    match error {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        } => Some(*start),
        ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { .. } => None,
    }
}
