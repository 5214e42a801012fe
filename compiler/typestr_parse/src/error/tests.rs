use pretty_assertions::assert_eq;
use typestr_ir::{Arity, Category, Container, Span};
use typestr_lexer::LexError;

use super::*;
use crate::ExpectedKind;

#[test]
fn lex_errors_become_malformed_input() {
    let err = ParseError::from(LexError::InvalidCharacter { ch: '<', offset: 4 });
    assert_eq!(err.span, Span::new(4, 5));
    assert!(matches!(err.kind, ParseErrorKind::MalformedInput { .. }));
    assert_eq!(
        err.to_string(),
        "malformed input: invalid character '<' at offset 4 at 4..5"
    );
}

#[test]
fn arity_message() {
    let err = ParseError::new(
        ParseErrorKind::ArityMismatch {
            container: Container::Dict,
            expected: Arity::Exactly(2),
            found: 1,
        },
        Span::new(0, 9),
    );
    assert_eq!(
        err.to_string(),
        "`Dict` takes exactly 2 type argument(s), found 1 at 0..9"
    );
}

#[test]
fn kind_mismatch_message() {
    let kind = ParseErrorKind::TypeKindMismatch {
        expected: ExpectedKind::Container(Container::List),
        found: Category::Simple,
    };
    assert_eq!(kind.to_string(), "expected List type, found simple");
}

#[test]
fn batch_error_exposes_source() {
    use std::error::Error as _;

    let inner = ParseError::unexpected_end(Span::point(5));
    let err = BatchError {
        index: 2,
        error: inner.clone(),
    };
    assert_eq!(err.to_string(), "descriptor #2: unexpected end of input at 5..5");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source, Some(inner.to_string()));
}
