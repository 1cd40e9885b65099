use std::fmt;

use super::error::Position;

/// Contract a lexer's tokens must satisfy to be parsed.
///
/// The engine never looks at a token beyond these accessors: `kind` is compared
/// for equality, `lexeme` is compared against literals, and `describe` is used
/// for the "got ..." part of error messages.
pub trait Token: Clone + Send + Sync + 'static {
    type Kind: PartialEq + fmt::Display + Send + Sync + 'static;

    fn kind(&self) -> Self::Kind;

    fn lexeme(&self) -> &str;

    /// Returns a human-readable description of the token
    fn describe(&self) -> String {
        format!("'{}'", self.lexeme())
    }
}

/// The residual input of a parse: a view into the token sequence starting at
/// `offset`. Copying an `Input` never copies tokens, and advancing only ever
/// moves toward the end.
pub struct Input<'t, T> {
    tokens: &'t [T],
    offset: usize,
}

impl<T> Clone for Input<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Input<'_, T> {}

impl<T> fmt::Debug for Input<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("offset", &self.offset)
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl<'t, T> Input<'t, T> {
    pub fn new(tokens: &'t [T]) -> Self {
        Self { tokens, offset: 0 }
    }

    pub fn peek(&self) -> Option<&'t T> {
        self.tokens.get(self.offset)
    }

    pub fn has_next(&self) -> bool {
        self.offset < self.tokens.len()
    }

    /// The input with its head token consumed. Saturates at end of input.
    pub fn advance(self) -> Self {
        Self {
            tokens: self.tokens,
            offset: (self.offset + 1).min(self.tokens.len()),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        !self.has_next()
    }

    /// The unconsumed tokens.
    pub fn rest(&self) -> &'t [T] {
        &self.tokens[self.offset..]
    }

    /// Position of the head token, or [`Position::Eof`] when nothing is left.
    pub fn position(&self) -> Position {
        if self.has_next() {
            Position::At(self.offset)
        } else {
            Position::Eof
        }
    }

    /// Whether both residuals begin at the same token (or are both exhausted).
    pub fn same_residual(&self, other: &Self) -> bool {
        self.offset == other.offset || (self.is_empty() && other.is_empty())
    }
}
