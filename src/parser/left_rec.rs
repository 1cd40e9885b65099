//! Left-recursion elimination and operator chains
//!
//! A rule `X -> X q | p` cannot run under recursive descent. [`lrec`] and
//! [`lrec_sc`] run it as `X -> p q*` and fold every `q` value into the
//! accumulator from the left.

use std::sync::Arc;

use super::alternative::{alt, alt_sc};
use super::combinators::{BoxedParser, Value, apply};
use super::primitives::succeed;
use super::repetition::{rep, rep_sc};
use super::sequence::{bind, seq2};
use super::state::Token;

/// A binary operator produced by an operator parser in a chain.
pub type BinOp<R> = Arc<dyn Fn(R, R) -> R + Send + Sync>;

/// Wraps a closure as a [`BinOp`].
pub fn bin_op<R, F>(f: F) -> BinOp<R>
where
    F: Fn(R, R) -> R + Send + Sync + 'static,
{
    Arc::new(f)
}

/// lrec := p q*, yielding `f(f(f(p, q1), q2), q3)` for every repetition
/// count, longest first.
pub fn lrec<T, R, S, F>(p: BoxedParser<T, R>, q: BoxedParser<T, S>, f: F) -> BoxedParser<T, R>
where
    T: Token,
    R: Value,
    S: Value,
    F: Fn(R, S) -> R + Send + Sync + 'static,
{
    apply(seq2(p, rep(q)), move |(head, tail)| tail.into_iter().fold(head, &f))
}

/// lrec_sc := p q*, folding only the longest run of `q`.
pub fn lrec_sc<T, R, S, F>(p: BoxedParser<T, R>, q: BoxedParser<T, S>, f: F) -> BoxedParser<T, R>
where
    T: Token,
    R: Value,
    S: Value,
    F: Fn(R, S) -> R + Send + Sync + 'static,
{
    apply(seq2(p, rep_sc(q)), move |(head, tail)| {
        tail.into_iter().fold(head, &f)
    })
}

fn fold_op<R: Value>(acc: R, (op, rhs): (BinOp<R>, R)) -> R {
    op(acc, rhs)
}

/// chainl1 := p (op p)*, left associative, at least one `p`
pub fn chainl1<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
) -> BoxedParser<T, R> {
    lrec(p.clone(), seq2(op, p), fold_op)
}

/// chainl := chainl1 | default
pub fn chainl<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
    default: R,
) -> BoxedParser<T, R> {
    alt(vec![chainl1(p, op), succeed(default)])
}

pub fn chainl1_sc<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
) -> BoxedParser<T, R> {
    lrec_sc(p.clone(), seq2(op, p), fold_op)
}

pub fn chainl_sc<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
    default: R,
) -> BoxedParser<T, R> {
    alt_sc(vec![chainl1_sc(p, op), succeed(default)])
}

/// chainr1 := p (op chainr1)?, right associative, at least one `p`
///
/// Recursion happens inside the continuation, so the parser for the right
/// operand is only built once an operator has actually been read.
pub fn chainr1<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
) -> BoxedParser<T, R> {
    chain_right(p, op, false)
}

/// chainr := chainr1 | default
pub fn chainr<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
    default: R,
) -> BoxedParser<T, R> {
    alt(vec![chainr1(p, op), succeed(default)])
}

pub fn chainr1_sc<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
) -> BoxedParser<T, R> {
    chain_right(p, op, true)
}

pub fn chainr_sc<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
    default: R,
) -> BoxedParser<T, R> {
    alt_sc(vec![chainr1_sc(p, op), succeed(default)])
}

fn chain_right<T: Token, R: Value>(
    p: BoxedParser<T, R>,
    op: BoxedParser<T, BinOp<R>>,
    single_choice: bool,
) -> BoxedParser<T, R> {
    let operand = p.clone();
    bind(p, move |lhs: R| {
        let operand = operand.clone();
        let op_for_rhs = op.clone();
        let captured = lhs.clone();
        let tail = bind(op.clone(), move |f: BinOp<R>| {
            let lhs = captured.clone();
            let rhs = chain_right(operand.clone(), op_for_rhs.clone(), single_choice);
            apply(rhs, move |r| f(lhs.clone(), r))
        });
        if single_choice {
            alt_sc(vec![tail, succeed(lhs)])
        } else {
            alt(vec![tail, succeed(lhs)])
        }
    })
}
