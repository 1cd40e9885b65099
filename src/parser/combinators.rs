use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use super::outcome::Outcome;
use super::state::{Input, Token};

/// Values a parser can produce: cloned when partial results fork, shared
/// across threads together with the grammar.
pub trait Value: Clone + Send + Sync + 'static {}

impl<V: Clone + Send + Sync + 'static> Value for V {}

/// Anything that can run against a residual input.
pub trait Parser<T: Token, R> {
    fn parse<'t>(&self, input: Input<'t, T>) -> Outcome<'t, T, R>;
}

type ParserFn<T, R> = Arc<dyn for<'t> Fn(Input<'t, T>) -> Outcome<'t, T, R> + Send + Sync>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T, R> {
    parser: ParserFn<T, R>,
}

impl<T, R> Clone for BoxedParser<T, R> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T: Token, R: Value> BoxedParser<T, R> {
    pub fn new<F>(parser: F) -> Self
    where
        F: for<'t> Fn(Input<'t, T>) -> Outcome<'t, T, R> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }

    /// Runs the parser over a whole token slice.
    pub fn parse_tokens<'t>(&self, tokens: &'t [T]) -> Outcome<'t, T, R> {
        (self.parser)(Input::new(tokens))
    }
}

impl<T: Token, R> Parser<T, R> for BoxedParser<T, R> {
    fn parse<'t>(&self, input: Input<'t, T>) -> Outcome<'t, T, R> {
        (self.parser)(input)
    }
}

impl<T: Token, R: Value> BoxedParser<T, R> {
    /// Applies `f` to every candidate value.
    pub fn map<U: Value, F: Fn(R) -> U + Send + Sync + 'static>(self, f: F) -> BoxedParser<T, U> {
        apply(self, f)
    }

    /// `other` from each residual of `self`, pairing the values.
    pub fn seq<U: Value>(self, other: BoxedParser<T, U>) -> BoxedParser<T, (R, U)> {
        super::sequence::seq2(self, other)
    }

    /// Like [`seq`](Self::seq) but keeps only this parser's values.
    pub fn skip<U: Value>(self, other: BoxedParser<T, U>) -> BoxedParser<T, R> {
        super::sequence::kleft(self, other)
    }

    /// Like [`seq`](Self::seq) but keeps only `other`'s values.
    pub fn skip_left<U: Value>(self, other: BoxedParser<T, U>) -> BoxedParser<T, U> {
        super::sequence::kright(self, other)
    }

    /// Monadic bind: the next parser is computed from each value produced
    pub fn bind<U: Value, K>(self, k: K) -> BoxedParser<T, U>
    where
        K: Fn(R) -> BoxedParser<T, U> + Send + Sync + 'static,
    {
        super::sequence::bind(self, k)
    }

    /// Union of both parsers' candidates.
    pub fn alt(self, other: BoxedParser<T, R>) -> BoxedParser<T, R> {
        super::alternative::alt(vec![self, other])
    }

    /// `other` only where this parser fails.
    pub fn or(self, other: BoxedParser<T, R>) -> BoxedParser<T, R> {
        super::alternative::alt_sc(vec![self, other])
    }

    /// See [`err`](super::recovery::err).
    pub fn err(self, msg: impl Into<String>) -> BoxedParser<T, R> {
        super::recovery::err(self, msg)
    }

    /// See [`label`](super::recovery::label).
    pub fn label(self, name: impl Into<String>) -> BoxedParser<T, R> {
        super::recovery::label(self, name)
    }
}

/// Apply: transform every candidate's value, keeping residuals and errors.
pub fn apply<T, R, U, F>(p: BoxedParser<T, R>, f: F) -> BoxedParser<T, U>
where
    T: Token,
    R: Value,
    U: Value,
    F: Fn(R) -> U + Send + Sync + 'static,
{
    BoxedParser::new(move |input| p.parse(input).map_values(&f))
}

/// `a + b` is [`seq2`](super::sequence::seq2): `b` runs from every residual
/// `a` left, so an ambiguous `a` yields one pair per combined parse.
impl<T: Token, R: Value, U: Value> Add<BoxedParser<T, U>> for BoxedParser<T, R> {
    type Output = BoxedParser<T, (R, U)>;

    fn add(self, rhs: BoxedParser<T, U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `a - b` is [`kleft`](super::sequence::kleft): `b` must still match after `a`,
/// but only `a`'s values survive.
impl<T: Token, R: Value, U: Value> Sub<BoxedParser<T, U>> for BoxedParser<T, R> {
    type Output = BoxedParser<T, R>;

    fn sub(self, rhs: BoxedParser<T, U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `a * b` is [`kright`](super::sequence::kright), e.g. `sym("-") * num`.
impl<T: Token, R: Value, U: Value> Mul<BoxedParser<T, U>> for BoxedParser<T, R> {
    type Output = BoxedParser<T, U>;

    fn mul(self, rhs: BoxedParser<T, U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `a | b` is [`alt_sc`](super::alternative::alt_sc): `b` is tried only when `a`
/// fails. Use [`BoxedParser::alt`] for the union of both.
impl<T: Token, R: Value> BitOr<BoxedParser<T, R>> for BoxedParser<T, R> {
    type Output = BoxedParser<T, R>;

    fn bitor(self, rhs: BoxedParser<T, R>) -> Self::Output {
        self.or(rhs)
    }
}

/// `p >> f` applies `f` to every candidate value of `p`.
impl<T: Token, R: Value, U: Value, F: Fn(R) -> U + Send + Sync + 'static> Shr<F>
    for BoxedParser<T, R>
{
    type Output = BoxedParser<T, U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}
