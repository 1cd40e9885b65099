//! Sequential composition
//!
//! All sequencing is breadth-first over live candidates: each stage re-parses
//! the residual of every candidate produced by the previous stage, so an
//! ambiguous prefix expands into the cross product of its continuations. The
//! farthest error is threaded through every stage, including stages that
//! succeed.

use std::sync::Arc;

use super::combinators::{BoxedParser, Parser, Value, apply};
use super::error::better_error;
use super::outcome::{Candidate, Outcome};
use super::state::Token;

/// A continuation for [`combine`]: computes the next parser from a value.
pub type Continuation<T, R> = Arc<dyn Fn(R) -> BoxedParser<T, R> + Send + Sync>;

/// seq := p1 p2 ... pn, collecting every value in order
pub fn seq<T: Token, R: Value>(parsers: Vec<BoxedParser<T, R>>) -> BoxedParser<T, Vec<R>> {
    BoxedParser::new(move |input| {
        let mut error = None;
        let mut layer = vec![Candidate::new(Vec::new(), input)];
        for p in &parsers {
            let mut next = Vec::new();
            for partial in &layer {
                let out = p.parse(partial.rest);
                error = better_error(error, out.error);
                for c in out.candidates {
                    let mut values = partial.value.clone();
                    values.push(c.value);
                    next.push(Candidate::new(values, c.rest));
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

/// seq2 := p1 p2
pub fn seq2<T: Token, A: Value, B: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
) -> BoxedParser<T, (A, B)> {
    BoxedParser::new(move |input| {
        let out1 = p1.parse(input);
        if !out1.success {
            return out1.into_failure();
        }
        let mut error = out1.error;
        let mut candidates = Vec::new();
        for first in out1.candidates {
            let out2 = p2.parse(first.rest);
            error = better_error(error, out2.error);
            for second in out2.candidates {
                candidates.push(Candidate::new(
                    (first.value.clone(), second.value),
                    second.rest,
                ));
            }
        }
        let success = !candidates.is_empty();
        Outcome::merge_outcome(candidates, error, success)
    })
}

pub fn seq3<T: Token, A: Value, B: Value, C: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
) -> BoxedParser<T, (A, B, C)> {
    apply(seq2(p1, seq2(p2, p3)), |(a, (b, c))| (a, b, c))
}

pub fn seq4<T: Token, A: Value, B: Value, C: Value, D: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
    p4: BoxedParser<T, D>,
) -> BoxedParser<T, (A, B, C, D)> {
    apply(seq2(p1, seq2(p2, seq2(p3, p4))), |(a, (b, (c, d)))| {
        (a, b, c, d)
    })
}

pub fn seq5<T: Token, A: Value, B: Value, C: Value, D: Value, E: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
    p4: BoxedParser<T, D>,
    p5: BoxedParser<T, E>,
) -> BoxedParser<T, (A, B, C, D, E)> {
    apply(
        seq2(p1, seq2(p2, seq2(p3, seq2(p4, p5)))),
        |(a, (b, (c, (d, e))))| (a, b, c, d, e),
    )
}

/// Monadic bind: parse `p`, then parse with the parser computed from each of
/// its values. This is what lets a grammar depend on what it has already read.
pub fn bind<T, A, B, K>(p: BoxedParser<T, A>, k: K) -> BoxedParser<T, B>
where
    T: Token,
    A: Value,
    B: Value,
    K: Fn(A) -> BoxedParser<T, B> + Send + Sync + 'static,
{
    BoxedParser::new(move |input| {
        let out1 = p.parse(input);
        if !out1.success {
            return out1.into_failure();
        }
        let mut error = out1.error;
        let mut candidates = Vec::new();
        for step in out1.candidates {
            let out = k(step.value).parse(step.rest);
            error = better_error(error, out.error);
            candidates.extend(out.candidates);
        }
        let success = !candidates.is_empty();
        Outcome::merge_outcome(candidates, error, success)
    })
}

/// Chains continuations of one value type: `p >>= k1 >>= k2 ...`.
///
/// Unlike [`seq`], values are not accumulated; each stage keeps only what its
/// continuation produced.
pub fn combine<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    ks: Vec<Continuation<T, R>>,
) -> BoxedParser<T, R> {
    BoxedParser::new(move |input| {
        let out1 = p.parse(input);
        if !out1.success {
            return out1;
        }
        let mut error = out1.error;
        let mut layer = out1.candidates;
        for k in &ks {
            let mut next = Vec::new();
            for x in layer {
                let out = k(x.value).parse(x.rest);
                error = better_error(error, out.error);
                next.extend(out.candidates);
            }
            if next.is_empty() {
                return Outcome::merge_outcome(next, error, false);
            }
            layer = next;
        }
        Outcome::success_with(layer, error)
    })
}

/// kleft := p1 p2, keeping p1's value
pub fn kleft<T: Token, A: Value, B: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
) -> BoxedParser<T, A> {
    apply(seq2(p1, p2), |(a, _)| a)
}

/// kright := p1 p2, keeping p2's value
pub fn kright<T: Token, A: Value, B: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
) -> BoxedParser<T, B> {
    apply(seq2(p1, p2), |(_, b)| b)
}

/// kmid := p1 p2 p3, keeping p2's value
pub fn kmid<T: Token, A: Value, B: Value, C: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
) -> BoxedParser<T, B> {
    apply(seq3(p1, p2, p3), |(_, b, _)| b)
}

/// between := open p close, e.g. `between(lit("("), expr, lit(")"))`
pub fn between<T: Token, A: Value, B: Value, C: Value>(
    open: BoxedParser<T, A>,
    p: BoxedParser<T, B>,
    close: BoxedParser<T, C>,
) -> BoxedParser<T, B> {
    kmid(open, p, close)
}
