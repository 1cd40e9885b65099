use super::combinators::{BoxedParser, Value};
use super::error::ParseError;
use super::outcome::{Candidate, Outcome};
use super::state::{Input, Token};

// === Primitive Parsers ===

/// Low-level token parser with custom error
pub fn token_with_error<T, F>(predicate: F, expected: impl Into<String>) -> BoxedParser<T, T>
where
    T: Token,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let expected = expected.into();
    BoxedParser::new(move |input| match input.peek() {
        Some(tok) if predicate(tok) => {
            Outcome::success_with(vec![Candidate::new(tok.clone(), input.advance())], None)
        }
        Some(tok) => Outcome::fail_with(ParseError::mismatch(
            expected.clone(),
            tok.describe(),
            input.offset(),
        )),
        None => Outcome::fail_with(ParseError::exhausted(expected.clone())),
    })
}

/// Matches one token of the given kind
pub fn tok<T: Token>(kind: T::Kind) -> BoxedParser<T, T> {
    let expected = kind.to_string();
    token_with_error(move |t: &T| t.kind() == kind, expected)
}

/// Matches one token whose lexeme is exactly `text`
pub fn lit<T: Token>(text: impl Into<String>) -> BoxedParser<T, T> {
    let text = text.into();
    let expected = format!("'{text}'");
    token_with_error(move |t: &T| t.lexeme() == text, expected)
}

/// Consumes any single token; fails only at end of input
pub fn any_token<T: Token>() -> BoxedParser<T, T> {
    token_with_error(|_: &T| true, "any token")
}

/// Consumes nothing and always yields `value`
pub fn succeed<T: Token, R: Value>(value: R) -> BoxedParser<T, R> {
    BoxedParser::new(move |input| {
        Outcome::success_with(vec![Candidate::new(value.clone(), input)], None)
    })
}

/// Consumes nothing and always fails at the current position
pub fn fail<T: Token, R: Value>(msg: impl Into<String>) -> BoxedParser<T, R> {
    let msg = msg.into();
    BoxedParser::new(move |input| {
        Outcome::fail_with(ParseError::new(msg.clone()).at(input.position()))
    })
}

/// The canonical "absent" parser: no value, no consumption
pub fn nothing<T: Token, R: Value>() -> BoxedParser<T, Option<R>> {
    succeed(None)
}

/// Succeeds only when no tokens are left
pub fn eof<T: Token>() -> BoxedParser<T, ()> {
    BoxedParser::new(|input: Input<'_, T>| match input.peek() {
        None => Outcome::success_with(vec![Candidate::new((), input)], None),
        Some(tok) => Outcome::fail_with(ParseError::mismatch(
            "end of input",
            tok.describe(),
            input.offset(),
        )),
    })
}
