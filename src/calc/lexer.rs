use std::fmt;

use lachs::Span;

use crate::parser::Token;

#[lachs::token]
pub enum CalcToken {
    #[literal("[0-9]+(\\.[0-9]+)?")]
    Number,
    #[terminal("+")]
    Plus,
    #[terminal("-")]
    Minus,
    #[terminal("*")]
    Star,
    #[terminal("/")]
    Slash,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Number => "NUM",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
        };
        f.write_str(s)
    }
}

impl CalcToken {
    pub fn pos(&self) -> Span {
        match self {
            CalcToken::Number(inner) => inner.position.clone(),
            CalcToken::Plus(inner) => inner.position.clone(),
            CalcToken::Minus(inner) => inner.position.clone(),
            CalcToken::Star(inner) => inner.position.clone(),
            CalcToken::Slash(inner) => inner.position.clone(),
            CalcToken::LParen(inner) => inner.position.clone(),
            CalcToken::RParen(inner) => inner.position.clone(),
        }
    }
}

impl Token for CalcToken {
    type Kind = TokenKind;

    fn kind(&self) -> TokenKind {
        match self {
            CalcToken::Number(_) => TokenKind::Number,
            CalcToken::Plus(_) => TokenKind::Plus,
            CalcToken::Minus(_) => TokenKind::Minus,
            CalcToken::Star(_) => TokenKind::Star,
            CalcToken::Slash(_) => TokenKind::Slash,
            CalcToken::LParen(_) => TokenKind::LParen,
            CalcToken::RParen(_) => TokenKind::RParen,
        }
    }

    fn lexeme(&self) -> &str {
        match self {
            CalcToken::Number(inner) => &inner.value,
            CalcToken::Plus(_) => "+",
            CalcToken::Minus(_) => "-",
            CalcToken::Star(_) => "*",
            CalcToken::Slash(_) => "/",
            CalcToken::LParen(_) => "(",
            CalcToken::RParen(_) => ")",
        }
    }

    fn describe(&self) -> String {
        match self {
            CalcToken::Number(inner) => format!("number '{}'", inner.value),
            other => format!("'{}'", other.lexeme()),
        }
    }
}
