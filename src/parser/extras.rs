//! Aliases and convenience combinators built from the core set

use super::alternative::{alt, opt, opt_sc};
use super::combinators::{BoxedParser, Parser, Value, apply};
use super::error::ParseError;
use super::outcome::{Candidate, Outcome};
use super::primitives::succeed;
use super::repetition::{cons, list, list_sc, rep, rep_n, rep_r, rep_sc};
use super::sequence::{kmid, kright, seq2};
use super::state::Token;

// === Repetition aliases ===

pub fn many<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    rep(p)
}

pub fn many_r<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    rep_r(p)
}

pub fn many_sc<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    rep_sc(p)
}

/// many1 := p p*
pub fn many1<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    apply(seq2(p.clone(), many(p)), cons)
}

pub fn many1_r<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    apply(seq2(p.clone(), many_r(p)), cons)
}

pub fn many1_sc<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    apply(seq2(p.clone(), many_sc(p)), cons)
}

pub fn count<T: Token, R: Value>(p: BoxedParser<T, R>, n: usize) -> BoxedParser<T, Vec<R>> {
    rep_n(p, n)
}

// === Skipping ===

/// Optionally consumes `p` and discards what it produced.
pub fn skip<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    apply(opt(p), |_| ())
}

pub fn skip_sc<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    apply(opt_sc(p), |_| ())
}

/// Applies `p` zero or more times, discarding the results. Longest first.
pub fn skip_many<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    // `skip` already covers the empty case, many1 avoids reporting it twice
    skip(many1(p))
}

/// Like [`skip_many`], shortest first.
pub fn skip_many_r<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    alt(vec![succeed(()), apply(many1_r(p), |_| ())])
}

pub fn skip_many_sc<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    skip_sc(many_sc(p))
}

/// skip_many1 := p skip_many(p)
///
/// Not the same as `skip(many1(p))`: at least one `p` is required.
pub fn skip_many1<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    kright(p.clone(), skip_many(p))
}

pub fn skip_many1_r<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    kright(p.clone(), skip_many_r(p))
}

pub fn skip_many1_sc<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    kright(p.clone(), skip_many_sc(p))
}

/// trim := cut* p cut*
pub fn trim<T: Token, R: Value, C: Value>(
    p: BoxedParser<T, R>,
    cut: BoxedParser<T, C>,
) -> BoxedParser<T, R> {
    kmid(many(cut.clone()), p, many(cut))
}

pub fn trim_sc<T: Token, R: Value, C: Value>(
    p: BoxedParser<T, R>,
    cut: BoxedParser<T, C>,
) -> BoxedParser<T, R> {
    kmid(many_sc(cut.clone()), p, many_sc(cut))
}

// === Separated lists ===

/// Zero or more `p` separated by `sep`, without a trailing separator.
pub fn sep_by<T: Token, R: Value, S: Value>(
    p: BoxedParser<T, R>,
    sep: BoxedParser<T, S>,
) -> BoxedParser<T, Vec<R>> {
    apply(opt(sep_by1(p, sep)), Option::unwrap_or_default)
}

/// One or more `p` separated by `sep`.
pub fn sep_by1<T: Token, R: Value, S: Value>(
    p: BoxedParser<T, R>,
    sep: BoxedParser<T, S>,
) -> BoxedParser<T, Vec<R>> {
    list(p, sep)
}

pub fn sep_by_sc<T: Token, R: Value, S: Value>(
    p: BoxedParser<T, R>,
    sep: BoxedParser<T, S>,
) -> BoxedParser<T, Vec<R>> {
    apply(opt_sc(sep_by1_sc(p, sep)), Option::unwrap_or_default)
}

pub fn sep_by1_sc<T: Token, R: Value, S: Value>(
    p: BoxedParser<T, R>,
    sep: BoxedParser<T, S>,
) -> BoxedParser<T, Vec<R>> {
    list_sc(p, sep)
}

// === Lookahead ===

/// Runs `p` and yields all of its values without consuming anything.
pub fn look_ahead<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    BoxedParser::new(move |input| {
        let out = p.parse(input);
        if !out.success {
            return out.into_failure();
        }
        let values = out.candidates.into_iter().map(|c| c.value).collect();
        Outcome::success_with(vec![Candidate::new(values, input)], out.error)
    })
}

/// Succeeds without consuming anything iff `p` fails here.
///
/// e.g. `kleft(lit("let"), not_followed_by(tok(Ident)))` rejects `let x`
/// where `letx` would have lexed as one identifier.
pub fn not_followed_by<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, ()> {
    BoxedParser::new(move |input| {
        let out = p.parse(input);
        if !out.success {
            return Outcome::success_with(vec![Candidate::new((), input)], None);
        }
        let mut error = ParseError::new("unexpected match").at(input.position());
        if let Some(tok) = input.peek() {
            error = ParseError::new(format!("unexpected {}", tok.describe()))
                .found(tok.describe())
                .at(input.position());
        }
        Outcome::fail_with(error)
    })
}

/// Tries `p`, falling back to consuming nothing. Keeps both outcomes.
pub fn try_parse<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Option<R>> {
    opt(p)
}

/// Tries `p`, falling back to consuming nothing only if `p` fails.
pub fn try_sc<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Option<R>> {
    opt_sc(p)
}
