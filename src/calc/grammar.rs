//! Arithmetic grammar
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := NUM | '(' expr ')' | ('+' | '-') factor
//! ```
//!
//! The grammar is generic over [`Semantics`], so the same rules evaluate an
//! expression or print it as an s-expression.

use std::sync::Arc;

use super::lexer::{CalcToken, TokenKind};
use crate::parser::{
    BoxedParser, Rule, Token, Value, alt_sc, between, fail, lrec_sc, seq2, succeed, tok,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        }
    }
}

/// What the grammar builds from the pieces it recognizes.
pub trait Semantics: Send + Sync + 'static {
    type Output: Value;

    /// Returns `None` if the lexeme is not a valid number.
    fn number(&self, lexeme: &str) -> Option<Self::Output>;

    /// `op` is [`Op::Add`] or [`Op::Sub`].
    fn unary(&self, op: Op, operand: Self::Output) -> Self::Output;

    fn binary(&self, op: Op, lhs: Self::Output, rhs: Self::Output) -> Self::Output;
}

/// Evaluates to a number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Semantics for Evaluator {
    type Output = f64;

    fn number(&self, lexeme: &str) -> Option<f64> {
        lexeme.parse().ok()
    }

    fn unary(&self, op: Op, operand: f64) -> f64 {
        match op {
            Op::Sub => -operand,
            _ => operand,
        }
    }

    fn binary(&self, op: Op, lhs: f64, rhs: f64) -> f64 {
        match op {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

/// Prints as a fully parenthesized s-expression, e.g. `(+ 1 (* 2 3))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer;

impl Semantics for Printer {
    type Output = String;

    fn number(&self, lexeme: &str) -> Option<String> {
        Some(lexeme.to_string())
    }

    fn unary(&self, op: Op, operand: String) -> String {
        format!("({} {operand})", op.symbol())
    }

    fn binary(&self, op: Op, lhs: String, rhs: String) -> String {
        format!("({} {lhs} {rhs})", op.symbol())
    }
}

fn op(kind: TokenKind, op: Op) -> BoxedParser<CalcToken, Op> {
    tok::<CalcToken>(kind).map(move |_| op)
}

/// The arithmetic grammar for one [`Semantics`].
///
/// Owns the grammar's rules. Build it once and reuse it; dropping it frees
/// every parser built from it, `semantics` included.
pub struct Calculator<S: Semantics> {
    expr: Rule<CalcToken, S::Output>,
    factor: Rule<CalcToken, S::Output>,
}

impl<S: Semantics> Calculator<S> {
    pub fn new(semantics: S) -> Self {
        let s = Arc::new(semantics);
        let expr: Rule<CalcToken, S::Output> = Rule::named("expr");
        let factor: Rule<CalcToken, S::Output> = Rule::named("factor");

        let number = {
            let s = Arc::clone(&s);
            tok::<CalcToken>(TokenKind::Number).bind(move |t: CalcToken| {
                match s.number(t.lexeme()) {
                    Some(v) => succeed(v),
                    None => fail(format!("invalid number {}", t.describe())),
                }
            })
        };

        let parens = between(
            tok::<CalcToken>(TokenKind::LParen),
            expr.parser(),
            tok::<CalcToken>(TokenKind::RParen),
        );

        let signed = {
            let s = Arc::clone(&s);
            seq2(
                op(TokenKind::Plus, Op::Add) | op(TokenKind::Minus, Op::Sub),
                factor.parser(),
            )
            .map(move |(op, v)| s.unary(op, v))
        };

        factor.define(alt_sc(vec![number, parens, signed]));

        let term = {
            let s = Arc::clone(&s);
            lrec_sc(
                factor.parser(),
                seq2(
                    op(TokenKind::Star, Op::Mul) | op(TokenKind::Slash, Op::Div),
                    factor.parser(),
                ),
                move |lhs, (op, rhs)| s.binary(op, lhs, rhs),
            )
        };

        let sum = lrec_sc(
            term.clone(),
            seq2(
                op(TokenKind::Plus, Op::Add) | op(TokenKind::Minus, Op::Sub),
                term,
            ),
            move |lhs, (op, rhs)| s.binary(op, lhs, rhs),
        );

        expr.define(sum);
        Self { expr, factor }
    }

    /// The `expr` entry point. Valid only while `self` is alive.
    pub fn expression(&self) -> BoxedParser<CalcToken, S::Output> {
        self.expr.parser()
    }

    /// The `factor` rule on its own: a number, a parenthesized expression or
    /// a signed factor.
    pub fn factor(&self) -> BoxedParser<CalcToken, S::Output> {
        self.factor.parser()
    }
}
