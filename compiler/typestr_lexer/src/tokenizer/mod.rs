//! Lazy, single-lookahead tokenizer.
//!
//! The tokenizer always holds exactly one scanned token, the *current*
//! token. [`advance()`](Tokenizer::advance) consumes it and scans the next
//! one. Nothing is buffered beyond that, so a parse that fails early never
//! pays for scanning the rest of the string.
//!
//! # Token classes
//!
//! - structural: `[` `]` `(` `)` `,` `:`, one byte each
//! - identifier: a maximal run of ASCII letters, digits, `_` and `.`
//!
//! Spaces, tabs, and line breaks between tokens are skipped. Any other
//! character is a [`LexError::InvalidCharacter`].

use typestr_ir::Span;

use crate::{LexError, Token, TokenKind};

/// Returns `true` for bytes that may appear inside an identifier.
///
/// `.` is included so that dotted paths such as
/// `__torch__.torch.classes.ns.Foo` arrive as a single token.
#[inline]
pub const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.'
}

#[inline]
const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Tokenizer over a borrowed descriptor string.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    /// Scan position: byte offset just past the current token.
    pos: u32,
    /// The current, not yet consumed, token.
    current: Token,
    /// End offset of the most recently consumed token.
    prev_end: u32,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer and scan the first token.
    pub fn new(source: &'a str) -> Result<Self, LexError> {
        if u32::try_from(source.len()).is_err() {
            return Err(LexError::TooLong { len: source.len() });
        }
        let mut tokenizer = Tokenizer {
            source,
            pos: 0,
            current: Token::new(TokenKind::Eof, Span::DUMMY),
            prev_end: 0,
        };
        tokenizer.current = tokenizer.scan()?;
        Ok(tokenizer)
    }

    /// The full descriptor being tokenized.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The current token (not consumed).
    #[inline]
    pub fn current(&self) -> Token {
        self.current
    }

    /// Kind of the current token.
    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Source text of the current token. Empty at EOF.
    #[inline]
    pub fn current_text(&self) -> &'a str {
        self.text(self.current.span)
    }

    /// Source text covered by `span`.
    #[inline]
    pub fn text(&self, span: Span) -> &'a str {
        &self.source[span.to_range()]
    }

    /// Returns `true` if the current token is end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    /// Returns `true` if the current token has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// End offset of the last consumed token.
    ///
    /// Used to close the span of a production once its final token has
    /// been consumed.
    #[inline]
    pub fn prev_end(&self) -> u32 {
        self.prev_end
    }

    /// Consume the current token and scan the next one.
    ///
    /// Returns the consumed token. Advancing at EOF is a no-op that keeps
    /// returning the EOF token.
    pub fn advance(&mut self) -> Result<Token, LexError> {
        let consumed = self.current;
        if consumed.kind != TokenKind::Eof {
            self.prev_end = consumed.span.end;
            self.current = self.scan()?;
        }
        Ok(consumed)
    }

    /// Reposition the tokenizer so the next token starts at `offset`.
    ///
    /// Everything before `offset` counts as consumed. Used to skip a span
    /// whose result is already known.
    pub fn reset_to(&mut self, offset: u32) -> Result<(), LexError> {
        debug_assert!(
            offset as usize <= self.source.len(),
            "reset offset {offset} past end of source"
        );
        self.pos = offset;
        self.prev_end = offset;
        self.current = self.scan()?;
        Ok(())
    }

    /// Find where the type expression starting at `start` ends.
    ///
    /// Recognizes a name followed by a balanced `[...]` group and returns
    /// the offset just past the closing `]`. Returns `None` for bare names
    /// (nothing worth looking up) and for unbalanced brackets (the parser
    /// will report those properly). Only brackets are matched; everything
    /// inside them is skipped byte by byte.
    pub fn scan_extent(&self, start: u32) -> Option<u32> {
        let bytes = self.source.as_bytes();
        let mut i = start as usize;
        let name_start = i;
        while i < bytes.len() && is_ident_byte(bytes[i]) {
            i += 1;
        }
        if i == name_start {
            return None;
        }
        while i < bytes.len() && is_whitespace(bytes[i]) {
            i += 1;
        }
        if bytes.get(i) != Some(&b'[') {
            return None;
        }

        let mut depth = 0usize;
        while i < bytes.len() {
            match bytes[i] {
                b'[' => depth += 1,
                b']' => {
                    depth -= 1;
                    if depth == 0 {
                        return u32::try_from(i + 1).ok();
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Scan one token starting at `self.pos`.
    fn scan(&mut self) -> Result<Token, LexError> {
        let bytes = self.source.as_bytes();
        let mut i = self.pos as usize;
        while i < bytes.len() && is_whitespace(bytes[i]) {
            i += 1;
        }

        // Offsets fit in u32: checked once in `new()`.
        #[allow(clippy::cast_possible_truncation, reason = "source length checked in new()")]
        let start = i as u32;

        let Some(&byte) = bytes.get(i) else {
            self.pos = start;
            return Ok(Token::new(TokenKind::Eof, Span::point(start)));
        };

        let kind = if let Some(kind) = TokenKind::structural(byte) {
            i += 1;
            kind
        } else if is_ident_byte(byte) {
            while i < bytes.len() && is_ident_byte(bytes[i]) {
                i += 1;
            }
            TokenKind::Ident
        } else {
            let ch = self.source[i..].chars().next().unwrap_or('\u{FFFD}');
            return Err(LexError::InvalidCharacter { ch, offset: start });
        };

        #[allow(clippy::cast_possible_truncation, reason = "source length checked in new()")]
        let end = i as u32;
        self.pos = end;
        Ok(Token::new(kind, Span::new(start, end)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
