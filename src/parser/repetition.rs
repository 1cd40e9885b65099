//! Repetition and separated lists
//!
//! Every repetition explores iterations breadth-first and drops any candidate
//! whose residual did not move, so a nullable `p` terminates instead of
//! looping forever.

use super::combinators::{BoxedParser, Parser, Value, apply};
use super::error::better_error;
use super::outcome::{Candidate, Outcome};
use super::primitives::succeed;
use super::sequence::{kright, seq2};
use super::state::Token;

fn extend<R: Clone>(prefix: &[R], value: R) -> Vec<R> {
    let mut values = Vec::with_capacity(prefix.len() + 1);
    values.extend_from_slice(prefix);
    values.push(value);
    values
}

pub(crate) fn cons<R>((head, tail): (R, Vec<R>)) -> Vec<R> {
    let mut values = Vec::with_capacity(tail.len() + 1);
    values.push(head);
    values.extend(tail);
    values
}

/// rep_r := p*, every repetition count from zero upward, shortest first.
///
/// The result always holds the zero-repetition candidate, so it never fails.
pub fn rep_r<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    BoxedParser::new(move |input| {
        let mut error = None;
        let mut nodes = vec![Candidate::new(Vec::new(), input)];
        let mut i = 0;
        while i < nodes.len() {
            let rest = nodes[i].rest;
            let out = p.parse(rest);
            error = better_error(error, out.error);
            for c in out.candidates {
                if c.rest.offset() > rest.offset() {
                    let values = extend(&nodes[i].value, c.value);
                    nodes.push(Candidate::new(values, c.rest));
                }
            }
            i += 1;
        }
        Outcome::success_with(nodes, error)
    })
}

/// rep := p*, like [`rep_r`] but longest first.
pub fn rep<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    let rep_r = rep_r(p);
    BoxedParser::new(move |input| {
        let mut out = rep_r.parse(input);
        out.candidates.reverse();
        out
    })
}

/// rep_sc := p*, keeping only the deepest layer of repetitions.
///
/// Zero repetitions is a valid result; it never fails.
pub fn rep_sc<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Vec<R>> {
    BoxedParser::new(move |input| {
        let mut error = None;
        let mut layer = vec![Candidate::new(Vec::new(), input)];
        loop {
            let mut next = Vec::new();
            for x in &layer {
                let out = p.parse(x.rest);
                error = better_error(error, out.error);
                for c in out.candidates {
                    if c.rest.offset() > x.rest.offset() {
                        next.push(Candidate::new(extend(&x.value, c.value), c.rest));
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            layer = next;
        }
        Outcome::success_with(layer, error)
    })
}

/// rep_n := p{n}, exactly `n` repetitions. Fails if fewer are achievable.
///
/// Iterations that consume nothing do not count toward `n`.
pub fn rep_n<T: Token, R: Value>(p: BoxedParser<T, R>, n: usize) -> BoxedParser<T, Vec<R>> {
    BoxedParser::new(move |input| {
        let mut error = None;
        let mut layer = vec![Candidate::new(Vec::new(), input)];
        for _ in 0..n {
            let mut next = Vec::new();
            for x in &layer {
                let out = p.parse(x.rest);
                error = better_error(error, out.error);
                for c in out.candidates {
                    if c.rest.offset() > x.rest.offset() {
                        next.push(Candidate::new(extend(&x.value, c.value), c.rest));
                    }
                }
            }
            if next.is_empty() {
                return Outcome::merge_outcome(next, error, false);
            }
            layer = next;
        }
        Outcome::success_with(layer, error)
    })
}

/// list := p (sep p)*, every possible length, longest first
pub fn list<T: Token, R: Value, S: Value>(
    p: BoxedParser<T, R>,
    sep: BoxedParser<T, S>,
) -> BoxedParser<T, Vec<R>> {
    apply(seq2(p.clone(), rep(kright(sep, p))), cons)
}

/// list_sc := p (sep p)*, only the longest list
pub fn list_sc<T: Token, R: Value, S: Value>(
    p: BoxedParser<T, R>,
    sep: BoxedParser<T, S>,
) -> BoxedParser<T, Vec<R>> {
    apply(seq2(p.clone(), rep_sc(kright(sep, p))), cons)
}

/// list_n := p (sep p){n-1}, exactly `n` elements
pub fn list_n<T: Token, R: Value, S: Value>(
    p: BoxedParser<T, R>,
    sep: BoxedParser<T, S>,
    n: usize,
) -> BoxedParser<T, Vec<R>> {
    match n {
        0 => succeed(Vec::new()),
        1 => apply(p, |v| vec![v]),
        _ => apply(seq2(p.clone(), rep_n(kright(sep, p), n - 1)), cons),
    }
}
