//! Tokenizer for type descriptor strings.
//!
//! Descriptors have a tiny lexical grammar: six one-byte structural tokens
//! and dotted identifiers. The [`Tokenizer`] scans them lazily with a single
//! token of lookahead, which is all the recursive-descent parser needs.

mod token;
mod tokenizer;

pub use token::{LexError, Token, TokenKind};
pub use tokenizer::{is_ident_byte, Tokenizer};
