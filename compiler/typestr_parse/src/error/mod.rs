//! Parse error types.
//!
//! Every failure is local to one descriptor and carries the byte span it
//! was detected at. Nothing is recovered or retried: malformed input does
//! not become valid on a second attempt.

use typestr_ir::{Arity, Category, Container, Span};
use typestr_lexer::LexError;

use crate::ExpectedKind;

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Invalid character, missing or mismatched structural token, or a
    /// malformed path or field list.
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// The descriptor holds no tokens at all. Running out of input inside
    /// an open bracket is [`MalformedInput`](Self::MalformedInput).
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// Tokens remain after a complete type expression.
    #[error("unexpected trailing input `{found}`")]
    TrailingInput { found: String },

    /// A name that is neither a known simple type, a generic keyword,
    /// `NamedTuple`, nor a class path.
    #[error("unknown type `{name}`")]
    UnknownSimpleType { name: String },

    /// A generic container received the wrong number of type arguments.
    #[error("`{container}` takes {expected} type argument(s), found {found}")]
    ArityMismatch {
        container: Container,
        expected: Arity,
        found: usize,
    },

    /// The root type is not of the category the caller asked for.
    #[error("expected {expected} type, found {found}")]
    TypeKindMismatch {
        expected: ExpectedKind,
        found: Category,
    },

    /// Nesting deeper than the configured limit.
    #[error("type nesting exceeds the maximum depth of {limit}")]
    MaxDepthExceeded { limit: u32 },
}

/// A parse failure and where it happened.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn malformed(message: impl Into<String>, span: Span) -> Self {
        Self::new(
            ParseErrorKind::MalformedInput {
                message: message.into(),
            },
            span,
        )
    }

    pub fn unexpected_end(span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedEnd, span)
    }

    pub fn unknown_type(name: &str, span: Span) -> Self {
        Self::new(
            ParseErrorKind::UnknownSimpleType {
                name: name.to_owned(),
            },
            span,
        )
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span();
        ParseError::malformed(err.to_string(), span)
    }
}

/// A batch parse failed; `index` is the position of the failing string.
///
/// No partial results accompany this error.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("descriptor #{index}: {error}")]
pub struct BatchError {
    pub index: usize,
    #[source]
    pub error: ParseError,
}

#[cfg(test)]
mod tests;
