//! # Tokparsec - Nondeterministic Parser Combinators over Token Streams
//!
//! Tokparsec builds recursive-descent parsers by composing small parsers
//! (match a token, sequence, alternative, repetition) into larger ones. A
//! parser never moves a shared cursor: it takes a residual view of the token
//! slice and returns every way it could parse it, each paired with what is
//! left over.
//!
//! ## Result Model
//!
//! Running a parser yields an [`Outcome`](parser::Outcome):
//!
//! - `success` tells whether any parse was found
//! - `candidates` holds one [`Candidate`](parser::Candidate) per parse
//!   (value + residual input). Several candidates mean genuine ambiguity.
//! - `error` is the farthest error seen, even on success
//!
//! Whenever sub-parses are combined the error that got deepest into the input
//! wins, so the diagnostic a caller sees is the most specific one.
//!
//! ## Module Structure
//!
//! - [`parser`] - The combinator engine
//!   - primitives: `tok`, `lit`, `any_token`, `succeed`, `fail`, `nothing`, `eof`
//!   - sequencing: `seq`, `seq2`..`seq5`, `bind`, `combine`, `kleft`, `kright`, `kmid`
//!   - alternation: `alt`, `alt_sc`, `opt`, `opt_sc` and typed `alt2`..`alt5`
//!   - repetition: `rep`, `rep_r`, `rep_sc`, `rep_n`, `list`, `list_sc`, `list_n`
//!   - left recursion: `lrec`, `lrec_sc`, `chainl*`, `chainr*`
//!   - ambiguity merging: `amb`
//!   - recursive grammars: [`Rule`](parser::Rule), `lazy`
//!   - error relabeling: `err`, `err_default`, `label`
//!   - entry points: `parse`, `expect_eof`, `expect_single_result`, `parse_complete`
//! - [`calc`] - An arithmetic calculator built with the engine, lexed by `lachs`
//!
//! ## Example
//!
//! ```
//! use tokparsec::calc::{calculate, show};
//!
//! assert_eq!(calculate("1 + 2 * 3").unwrap(), 7.0);
//! assert_eq!(show("1 + 2 * 3").unwrap(), "(+ 1 (* 2 3))");
//! ```
//!
//! ## Writing a Grammar
//!
//! 1. Implement [`parser::Token`] for your lexer's token type
//! 2. Declare a [`Rule`](parser::Rule) per recursive nonterminal and keep
//!    the handles for as long as the grammar is used
//! 3. Compose primitives into patterns and `define` each rule
//! 4. Run [`parser::parse_complete()`] on the token slice

pub mod calc;
pub mod parser;
