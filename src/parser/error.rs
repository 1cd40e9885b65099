//! # Parse Errors
//!
//! Failure is always a value in this crate. Every failed branch produces a
//! [`ParseError`], and whenever two sub-parses are combined the error that got
//! deepest into the input is kept (see [`better_error`]). A successful
//! [`Outcome`](super::Outcome) still carries the farthest error seen among the
//! branches that did not contribute, so callers can render "almost matched"
//! diagnostics.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// Where a parse error occurred.
///
/// `At` holds the offset of the offending token in the full token sequence.
/// `Eof` is the virtual position after the last token; `Unknown` is used when
/// no position can be attributed (e.g. "no result is returned").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Unknown,
    At(usize),
    Eof,
}

impl Position {
    fn rank(&self) -> (u8, usize) {
        match self {
            Position::Unknown => (0, 0),
            Position::At(offset) => (1, *offset),
            Position::Eof => (2, 0),
        }
    }

    /// Compares how far into the input two positions are.
    pub fn depth_cmp(&self, other: &Position) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    pub fn offset(&self) -> Option<usize> {
        match self {
            Position::At(offset) => Some(*offset),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Unknown => f.write_str("<unknown>"),
            Position::At(offset) => write!(f, "token {}", offset + 1),
            Position::Eof => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.render())]
pub struct ParseError {
    pub position: Position,
    pub message: String,
    pub expected: Vec<String>,
    pub found: Option<String>,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            position: Position::Unknown,
            message: msg.into(),
            expected: Vec::new(),
            found: None,
        }
    }

    pub fn expected(mut self, what: impl Into<String>) -> Self {
        self.expected.push(what.into());
        self
    }

    pub fn found(mut self, what: impl Into<String>) -> Self {
        self.found = Some(what.into());
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// "Expected X, found Y" for a token that did not match.
    pub(crate) fn mismatch(expected: impl Into<String>, found: String, offset: usize) -> Self {
        Self::new("unexpected token")
            .expected(expected)
            .found(found)
            .at(Position::At(offset))
    }

    /// "Expected X" with nothing left to consume.
    pub(crate) fn exhausted(expected: impl Into<String>) -> Self {
        Self::new("unexpected end of input")
            .expected(expected)
            .at(Position::Eof)
    }

    fn render(&self) -> String {
        if self.expected.is_empty() {
            return self.message.clone();
        }
        let found = match (&self.found, self.position) {
            (Some(found), _) => found.as_str(),
            (None, Position::Eof) => "end of input",
            (None, _) => "nothing",
        };
        format!("expected {}, got {}", self.expected.join(" or "), found)
    }

    /// Merges the expected sets of two errors reported at the same position.
    fn merged_with(mut self, other: &ParseError) -> Self {
        if self.expected.is_empty() || other.expected.is_empty() {
            return self;
        }
        for what in &other.expected {
            if !self.expected.contains(what) {
                self.expected.push(what.clone());
            }
        }
        self
    }
}

/// Keeps whichever error got farthest into the input.
///
/// A missing error always loses. `Unknown` loses to every real position and
/// `Eof` beats every token position. Errors at the same position are merged:
/// their `expected` sets are unioned in order, otherwise the first one wins.
pub fn better_error(e1: Option<ParseError>, e2: Option<ParseError>) -> Option<ParseError> {
    match (e1, e2) {
        (None, e) | (e, None) => e,
        (Some(e1), Some(e2)) => Some(match e1.position.depth_cmp(&e2.position) {
            Ordering::Less => e2,
            Ordering::Greater => e1,
            Ordering::Equal => e1.merged_with(&e2),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: usize, msg: &str) -> ParseError {
        ParseError::new(msg).at(Position::At(offset))
    }

    #[test]
    fn missing_error_loses() {
        let e = at(1, "boom");
        assert_eq!(better_error(Some(e.clone()), None), Some(e.clone()));
        assert_eq!(better_error(None, Some(e.clone())), Some(e));
        assert_eq!(better_error(None, None), None);
    }

    #[test]
    fn farther_offset_wins() {
        let near = at(1, "near");
        let far = at(4, "far");
        assert_eq!(
            better_error(Some(near.clone()), Some(far.clone())),
            Some(far.clone())
        );
        assert_eq!(better_error(Some(far.clone()), Some(near)), Some(far));
    }

    #[test]
    fn unknown_never_beats_real_position() {
        let unknown = ParseError::new("no result");
        let real = at(0, "real");
        assert_eq!(
            better_error(Some(unknown.clone()), Some(real.clone())),
            Some(real.clone())
        );
        assert_eq!(better_error(Some(real.clone()), Some(unknown)), Some(real));
    }

    #[test]
    fn eof_beats_token_positions() {
        let eof = ParseError::exhausted("NUM");
        let real = at(7, "real");
        assert_eq!(better_error(Some(real), Some(eof.clone())), Some(eof));
    }

    #[test]
    fn equal_positions_merge_expected_sets() {
        let a = ParseError::mismatch("NUM", "'+'".into(), 2);
        let b = ParseError::mismatch("'('", "'+'".into(), 2);
        let merged = better_error(Some(a), Some(b.clone())).unwrap();
        assert_eq!(merged.expected, vec!["NUM".to_string(), "'('".to_string()]);
        assert_eq!(merged.to_string(), "expected NUM or '(', got '+'");

        let again = better_error(Some(merged.clone()), Some(b)).unwrap();
        assert_eq!(again.expected, merged.expected);
    }

    #[test]
    fn equal_positions_keep_custom_message() {
        let custom = ParseError::new("not a number").at(Position::At(0));
        let raw = ParseError::mismatch("NUM", "'a'".into(), 0);
        let kept = better_error(Some(custom.clone()), Some(raw)).unwrap();
        assert_eq!(kept, custom);
    }

    #[test]
    fn exhausted_renders_end_of_input() {
        assert_eq!(
            ParseError::exhausted("NUM").to_string(),
            "expected NUM, got end of input"
        );
    }
}
