use super::combinators::{BoxedParser, Parser, Value};
use super::error::ParseError;
use super::outcome::{Candidate, Outcome};
use super::state::Token;

fn relabel(error: Option<ParseError>, msg: &str) -> ParseError {
    match error {
        Some(e) if msg.is_empty() => e,
        Some(e) => ParseError::new(msg).at(e.position),
        None => ParseError::new(msg),
    }
}

/// Replaces the error of a failed `p` with `msg`, keeping its position.
///
/// e.g. `err(alt(vec![tok(Int), tok(Float)]), "expected a number")`.
/// An empty `msg` keeps the original error.
pub fn err<T: Token, R: Value>(p: BoxedParser<T, R>, msg: impl Into<String>) -> BoxedParser<T, R> {
    let msg = msg.into();
    BoxedParser::new(move |input| {
        let out = p.parse(input);
        if out.success {
            return out;
        }
        Outcome::fail_with(relabel(out.error, &msg))
    })
}

/// Like [`err`], but turns the failure into a success that consumes nothing
/// and yields `default`. The relabeled error stays on the outcome.
pub fn err_default<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    msg: impl Into<String>,
    default: R,
) -> BoxedParser<T, R> {
    let msg = msg.into();
    BoxedParser::new(move |input| {
        let out = p.parse(input);
        if out.success {
            return out;
        }
        Outcome::success_with(
            vec![Candidate::new(default.clone(), input)],
            Some(relabel(out.error, &msg)),
        )
    })
}

/// Names what a failed `p` was looking for, so the error reads
/// `expected <name>, got ...` instead of listing raw tokens.
pub fn label<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    name: impl Into<String>,
) -> BoxedParser<T, R> {
    let name = name.into();
    BoxedParser::new(move |input| {
        let out = p.parse(input);
        if out.success {
            return out;
        }
        let error = match out.error {
            Some(mut e) => {
                e.expected = vec![name.clone()];
                e
            }
            None => ParseError::new("no alternative matched")
                .expected(name.clone())
                .at(input.position()),
        };
        Outcome::fail_with(error)
    })
}
