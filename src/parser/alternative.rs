//! Alternation and optionality

use super::combinators::{BoxedParser, Parser, Value, apply};
use super::error::better_error;
use super::outcome::Outcome;
use super::primitives::nothing;
use super::state::Token;

/// Result of a heterogeneous alternative: which branch matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }
}

/// alt := p1 | p2 | ... | pn, keeping the candidates of every branch that
/// succeeds. Fails only when all branches fail.
pub fn alt<T: Token, R: Value>(parsers: Vec<BoxedParser<T, R>>) -> BoxedParser<T, R> {
    BoxedParser::new(move |input| {
        let mut candidates = Vec::new();
        let mut error = None;
        let mut success = false;
        for p in &parsers {
            let out = p.parse(input);
            error = better_error(error, out.error);
            if out.success {
                candidates.extend(out.candidates);
                success = true;
            }
        }
        Outcome::merge_outcome(candidates, error, success)
    })
}

/// alt2 := p1 | p2 over different value types
pub fn alt2<T: Token, A: Value, B: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
) -> BoxedParser<T, Either<A, B>> {
    alt(vec![apply(p1, Either::Left), apply(p2, Either::Right)])
}

pub fn alt3<T: Token, A: Value, B: Value, C: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
) -> BoxedParser<T, Either<A, Either<B, C>>> {
    alt2(p1, alt2(p2, p3))
}

pub fn alt4<T: Token, A: Value, B: Value, C: Value, D: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
    p4: BoxedParser<T, D>,
) -> BoxedParser<T, Either<A, Either<B, Either<C, D>>>> {
    alt2(p1, alt3(p2, p3, p4))
}

pub fn alt5<T: Token, A: Value, B: Value, C: Value, D: Value, E: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
    p4: BoxedParser<T, D>,
    p5: BoxedParser<T, E>,
) -> BoxedParser<T, Either<A, Either<B, Either<C, Either<D, E>>>>> {
    alt2(p1, alt4(p2, p3, p4, p5))
}

/// alt_sc := p1 | p2 | ... | pn, returning the first branch that succeeds
/// without trying the rest.
pub fn alt_sc<T: Token, R: Value>(parsers: Vec<BoxedParser<T, R>>) -> BoxedParser<T, R> {
    BoxedParser::new(move |input| {
        let mut error = None;
        for p in &parsers {
            let out = p.parse(input);
            if out.success {
                return out.with_error(error);
            }
            error = better_error(error, out.error);
        }
        Outcome::merge_outcome(Vec::new(), error, false)
    })
}

pub fn alt_sc2<T: Token, A: Value, B: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
) -> BoxedParser<T, Either<A, B>> {
    alt_sc(vec![apply(p1, Either::Left), apply(p2, Either::Right)])
}

pub fn alt_sc3<T: Token, A: Value, B: Value, C: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
) -> BoxedParser<T, Either<A, Either<B, C>>> {
    alt_sc2(p1, alt_sc2(p2, p3))
}

pub fn alt_sc4<T: Token, A: Value, B: Value, C: Value, D: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
    p4: BoxedParser<T, D>,
) -> BoxedParser<T, Either<A, Either<B, Either<C, D>>>> {
    alt_sc2(p1, alt_sc3(p2, p3, p4))
}

pub fn alt_sc5<T: Token, A: Value, B: Value, C: Value, D: Value, E: Value>(
    p1: BoxedParser<T, A>,
    p2: BoxedParser<T, B>,
    p3: BoxedParser<T, C>,
    p4: BoxedParser<T, D>,
    p5: BoxedParser<T, E>,
) -> BoxedParser<T, Either<A, Either<B, Either<C, Either<D, E>>>>> {
    alt_sc2(p1, alt_sc4(p2, p3, p4, p5))
}

/// opt := p | nothing
///
/// Both candidates are kept when `p` matches, so the result is ambiguous:
/// `Some` with `p`'s residual, then `None` with the original input.
pub fn opt<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Option<R>> {
    alt(vec![apply(p, Some), nothing()])
}

/// opt_sc := p | nothing, where `nothing` is only taken if `p` fails
pub fn opt_sc<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, Option<R>> {
    alt_sc(vec![apply(p, Some), nothing()])
}

/// Keeps only the first candidate of a successful parse.
pub fn first<T: Token, R: Value>(p: BoxedParser<T, R>) -> BoxedParser<T, R> {
    BoxedParser::new(move |input| {
        let mut out = p.parse(input);
        out.candidates.truncate(1);
        out
    })
}

