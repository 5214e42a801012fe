//! Token and lexical error types.

use std::fmt;

use typestr_ir::Span;

/// Token kind.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// Name or dotted path: `int`, `__torch__.torch.classes.ns.Foo`.
    Ident,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Map a structural byte to its token kind.
    #[inline]
    pub const fn structural(byte: u8) -> Option<TokenKind> {
        match byte {
            b'[' => Some(TokenKind::LBracket),
            b']' => Some(TokenKind::RBracket),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b',' => Some(TokenKind::Comma),
            b':' => Some(TokenKind::Colon),
            _ => None,
        }
    }

    /// Human-readable description for error messages.
    pub const fn describe(self) -> &'static str {
        match self {
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Ident => "a type name",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token: kind plus the byte span it covers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexical failure.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexError {
    /// A character outside every token class.
    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: u32 },
    /// The descriptor does not fit in `u32` byte offsets.
    #[error("descriptor of {len} bytes exceeds the maximum supported length")]
    TooLong { len: usize },
}

impl LexError {
    /// Span of the offending input.
    pub fn span(&self) -> Span {
        match *self {
            LexError::InvalidCharacter { ch, offset } => {
                #[allow(clippy::cast_possible_truncation, reason = "len_utf8() <= 4")]
                let width = ch.len_utf8() as u32;
                Span::new(offset, offset + width)
            }
            LexError::TooLong { .. } => Span::DUMMY,
        }
    }
}
