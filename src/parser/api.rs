//! Entry points and result reduction
//!
//! A grammar returns every way it could parse the input. Callers that want a
//! single application value run [`expect_eof`] then [`expect_single_result`],
//! or both at once via [`parse_complete`].

use super::combinators::{BoxedParser, Value};
use super::error::{ParseError, Position, better_error};
use super::outcome::Outcome;
use super::state::Token;

pub fn parse<'t, T: Token, R: Value>(
    grammar: &BoxedParser<T, R>,
    tokens: &'t [T],
) -> Outcome<'t, T, R> {
    grammar.parse_tokens(tokens)
}

/// Keeps only the candidates that consumed every token.
///
/// Each candidate that stopped early contributes an error at the first token
/// it left behind; if none reached the end the outcome fails with the
/// farthest of those.
pub fn expect_eof<T: Token, R>(out: Outcome<'_, T, R>) -> Outcome<'_, T, R> {
    if !out.success {
        return out;
    }
    if out.candidates.is_empty() {
        return Outcome::fail_with(ParseError::new("no result is returned").at(Position::Eof));
    }

    let mut error = out.error;
    let mut complete = Vec::new();
    for candidate in out.candidates {
        match candidate.rest.peek() {
            None => complete.push(candidate),
            Some(tok) => {
                let stopped = ParseError::new(format!(
                    "the parser cannot reach the end of input, stops at {}",
                    tok.describe()
                ))
                .at(candidate.rest.position());
                error = better_error(error, Some(stopped));
            }
        }
    }
    let success = !complete.is_empty();
    Outcome::merge_outcome(complete, error, success)
}

/// Reduces an outcome to its only value.
pub fn expect_single_result<T, R>(out: Outcome<'_, T, R>) -> Result<R, ParseError> {
    if !out.success {
        return Err(out
            .error
            .unwrap_or_else(|| ParseError::new("no alternative matched")));
    }
    let mut candidates = out.candidates.into_iter();
    match (candidates.next(), candidates.next()) {
        (None, _) => Err(ParseError::new("no result is returned")),
        (Some(only), None) => Ok(only.value),
        (Some(_), Some(_)) => Err(ParseError::new("multiple results are returned")),
    }
}

/// Parses `tokens` completely and unambiguously.
pub fn parse_complete<T: Token, R: Value>(
    grammar: &BoxedParser<T, R>,
    tokens: &[T],
) -> Result<R, ParseError> {
    expect_single_result(expect_eof(parse(grammar, tokens)))
}
