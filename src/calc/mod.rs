//! A small calculator built on the combinator engine.
//!
//! Tokens come from a [`lachs`] lexer; the grammar in [`grammar`] handles
//! `+ - * /` with the usual precedence, unary signs and parentheses.

mod grammar;
mod lexer;

pub use grammar::*;
pub use lexer::*;

use log::debug;
use thiserror::Error;

use crate::parser::{ParseError, Position, parse_complete};

#[derive(Debug, Error)]
pub enum CalcError {
    #[error("failed to lex input: {0}")]
    Lex(String),
    #[error("{rendered}")]
    Parse { error: ParseError, rendered: String },
}

impl CalcError {
    /// Renders a parse error against the source of the token it points at.
    fn parse(error: ParseError, tokens: &[CalcToken]) -> Self {
        let msg = error.to_string();
        let rendered = match error.position {
            Position::At(offset) => match tokens.get(offset).map(CalcToken::pos) {
                Some(span) if !span.source.is_empty() => span.to_string(&msg),
                _ => format!("{msg} at {}", error.position),
            },
            Position::Eof => format!("{msg} at end of input"),
            Position::Unknown => msg,
        };
        CalcError::Parse { error, rendered }
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            CalcError::Parse { error, .. } => Some(error),
            CalcError::Lex(_) => None,
        }
    }
}

pub fn lex(input: &str) -> Result<Vec<CalcToken>, CalcError> {
    let tokens = CalcToken::lex(input).map_err(|e| CalcError::Lex(e.to_string()))?;
    debug!("lexed {} token(s) from {input:?}", tokens.len());
    Ok(tokens)
}

impl<S: Semantics> Calculator<S> {
    /// Parses `input` completely with this calculator's semantics.
    pub fn run(&self, input: &str) -> Result<S::Output, CalcError> {
        let tokens = lex(input)?;
        let value = parse_complete(&self.expression(), &tokens)
            .map_err(|e| CalcError::parse(e, &tokens))?;
        debug!("parsed {input:?}");
        Ok(value)
    }
}

/// Parses `input` completely with a one-off [`Calculator`].
pub fn run<S: Semantics>(input: &str, semantics: S) -> Result<S::Output, CalcError> {
    Calculator::new(semantics).run(input)
}

/// Evaluates an arithmetic expression.
pub fn calculate(input: &str) -> Result<f64, CalcError> {
    run(input, Evaluator)
}

/// Prints an arithmetic expression as an s-expression.
pub fn show(input: &str) -> Result<String, CalcError> {
    run(input, Printer)
}
