//! Forward references for recursive grammars
//!
//! Declare a [`Rule`] for every nonterminal, build expressions that refer to
//! the rules, then [`Rule::define`] each one. Every clone of a rule shares the
//! same cell, so a definition made after the rule was captured is still seen
//! by every expression that captured it.
//!
//! [`Rule::parser`] holds the rule weakly, so a recursive grammar is not an
//! `Arc` cycle. Whoever owns the grammar keeps the [`Rule`] handles alive for
//! as long as it parses; dropping them frees the whole grammar.

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use log::error;

use super::combinators::{BoxedParser, Parser, Value};
use super::outcome::Outcome;
use super::state::{Input, Token};

pub struct Rule<T, R> {
    name: Arc<str>,
    pattern: Arc<OnceLock<BoxedParser<T, R>>>,
}

impl<T, R> Clone for Rule<T, R> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            pattern: Arc::clone(&self.pattern),
        }
    }
}

impl<T, R> fmt::Debug for Rule<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("defined", &self.is_defined())
            .finish()
    }
}

impl<T: Token, R: Value> Default for Rule<T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Rule<T, R> {
    pub fn is_defined(&self) -> bool {
        self.pattern.get().is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Token, R: Value> Rule<T, R> {
    pub fn new() -> Self {
        Self::named("<anonymous>")
    }

    /// A rule whose name shows up in wiring-fault panics.
    pub fn named(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            pattern: Arc::new(OnceLock::new()),
        }
    }

    /// Assigns the rule's pattern.
    ///
    /// # Panics
    ///
    /// If the rule already has a pattern. Rules are single-assignment.
    pub fn define(&self, pattern: BoxedParser<T, R>) {
        if self.pattern.set(pattern).is_err() {
            error!("rule `{}` defined twice", self.name);
            panic!("rule `{}` has already been defined", self.name);
        }
    }

    /// A parser that reads this rule's pattern on every call.
    ///
    /// The parser does not keep the rule alive. Use it for references from
    /// inside a grammar, and [`Rule::into_parser`] for the entry point.
    ///
    /// # Panics
    ///
    /// If every [`Rule`] handle was dropped before the parser runs.
    pub fn parser(&self) -> BoxedParser<T, R> {
        let name = Arc::clone(&self.name);
        let pattern: Weak<OnceLock<BoxedParser<T, R>>> = Arc::downgrade(&self.pattern);
        BoxedParser::new(move |input: Input<'_, T>| match pattern.upgrade() {
            Some(pattern) => run_pattern(&name, &pattern, input),
            None => {
                error!("rule `{name}` parsed after its grammar was dropped");
                panic!("rule `{name}` was dropped while a parser still refers to it");
            }
        })
    }

    /// A parser that owns this rule handle.
    ///
    /// Fine for a self-recursive rule, since its own references are weak. A
    /// grammar with several rules needs an owner for the others too.
    pub fn into_parser(self) -> BoxedParser<T, R> {
        BoxedParser::new(move |input| self.parse(input))
    }
}

fn run_pattern<'t, T: Token, R: Value>(
    name: &str,
    pattern: &OnceLock<BoxedParser<T, R>>,
    input: Input<'t, T>,
) -> Outcome<'t, T, R> {
    match pattern.get() {
        Some(pattern) => pattern.parse(input),
        None => {
            error!("rule `{name}` used before it was defined");
            panic!("rule `{name}` has not been defined; define it before parsing");
        }
    }
}

impl<T: Token, R: Value> Parser<T, R> for Rule<T, R> {
    /// # Panics
    ///
    /// If the rule has not been defined yet. That is a grammar wiring fault,
    /// not a parse failure.
    fn parse<'t>(&self, input: Input<'t, T>) -> Outcome<'t, T, R> {
        run_pattern(&self.name, &self.pattern, input)
    }
}

/// Builds the wrapped parser on first use and reuses it afterward.
///
/// Lets a parser refer to something constructed later in source order.
pub fn lazy<T, R, F>(thunk: F) -> BoxedParser<T, R>
where
    T: Token,
    R: Value,
    F: Fn() -> BoxedParser<T, R> + Send + Sync + 'static,
{
    let cell: OnceLock<BoxedParser<T, R>> = OnceLock::new();
    BoxedParser::new(move |input| cell.get_or_init(&thunk).parse(input))
}
