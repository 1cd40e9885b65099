#![allow(dead_code)]

use std::fmt;

use tokparsec::parser::{BoxedParser, Outcome, Token, lit, tok};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Num,
    Word,
    Punct,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Num => f.write_str("NUM"),
            Kind::Word => f.write_str("WORD"),
            Kind::Punct => f.write_str("PUNCT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tok {
    pub kind: Kind,
    pub text: String,
}

impl Token for Tok {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        self.kind
    }

    fn lexeme(&self) -> &str {
        &self.text
    }
}

/// Splits on whitespace and treats every non-alphanumeric char as its own
/// token, e.g. `"1+23 ab"` lexes to `1`, `+`, `23`, `ab`.
pub fn lex(input: &str) -> Vec<Tok> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_digit() || c.is_alphabetic() {
            let numeric = c.is_ascii_digit();
            let mut text = String::new();
            while let Some(&c) = chars.peek() {
                let same = if numeric {
                    c.is_ascii_digit()
                } else {
                    c.is_alphanumeric()
                };
                if !same {
                    break;
                }
                text.push(c);
                chars.next();
            }
            let kind = if numeric { Kind::Num } else { Kind::Word };
            tokens.push(Tok { kind, text });
        } else {
            tokens.push(Tok {
                kind: Kind::Punct,
                text: c.to_string(),
            });
            chars.next();
        }
    }
    tokens
}

pub fn kind(kind: Kind) -> BoxedParser<Tok, Tok> {
    tok(kind)
}

pub fn num() -> BoxedParser<Tok, i64> {
    tok::<Tok>(Kind::Num).map(|t: Tok| t.text.parse().unwrap_or_default())
}

pub fn word() -> BoxedParser<Tok, String> {
    tok::<Tok>(Kind::Word).map(|t: Tok| t.text)
}

pub fn sym(text: &str) -> BoxedParser<Tok, Tok> {
    lit(text)
}

/// Every candidate as `(value, tokens consumed)`.
pub fn results<R: Clone>(out: &Outcome<'_, Tok, R>, total: usize) -> Vec<(R, usize)> {
    out.candidates
        .iter()
        .map(|c| (c.value.clone(), total - c.rest.remaining()))
        .collect()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
