use pretty_assertions::assert_eq;
use typestr_ir::Span;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut tokenizer = Tokenizer::new(source).unwrap();
    let mut out = Vec::new();
    loop {
        let token = tokenizer.advance().unwrap();
        out.push(token.kind);
        if token.kind == TokenKind::Eof {
            break;
        }
    }
    out
}

fn texts(source: &str) -> Vec<&str> {
    let mut tokenizer = Tokenizer::new(source).unwrap();
    let mut out = Vec::new();
    while !tokenizer.is_eof() {
        out.push(tokenizer.current_text());
        tokenizer.advance().unwrap();
    }
    out
}

// === Token classes ===

#[test]
fn structural_tokens_are_single_bytes() {
    assert_eq!(
        kinds("[](),:"),
        vec![
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn generic_type_tokens() {
    assert_eq!(texts("Dict[str,Tensor]"), vec!["Dict", "[", "str", ",", "Tensor", "]"]);
}

#[test]
fn dotted_path_is_one_token() {
    assert_eq!(
        texts("__torch__.torch.classes.ns.Foo"),
        vec!["__torch__.torch.classes.ns.Foo"]
    );
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(
        texts("  List [ int ,\n\tstr ]  "),
        vec!["List", "[", "int", ",", "str", "]"]
    );
}

#[test]
fn digits_are_identifier_bytes() {
    assert_eq!(texts("float64"), vec!["float64"]);
    assert!(is_ident_byte(b'7'));
    assert!(!is_ident_byte(b'-'));
}

// === Spans ===

#[test]
fn spans_are_byte_offsets() {
    let mut tokenizer = Tokenizer::new("List[ int]").unwrap();
    assert_eq!(tokenizer.current().span, Span::new(0, 4));
    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.current().span, Span::new(4, 5));
    tokenizer.advance().unwrap();
    assert_eq!(tokenizer.current().span, Span::new(6, 9));
    assert_eq!(tokenizer.prev_end(), 5);
}

#[test]
fn eof_span_sits_after_trailing_whitespace() {
    let tokenizer = Tokenizer::new("   ").unwrap();
    assert!(tokenizer.is_eof());
    assert_eq!(tokenizer.current().span, Span::point(3));
    assert_eq!(tokenizer.current_text(), "");
}

#[test]
fn advance_at_eof_is_idempotent() {
    let mut tokenizer = Tokenizer::new("int").unwrap();
    tokenizer.advance().unwrap();
    assert!(tokenizer.is_eof());
    let token = tokenizer.advance().unwrap();
    assert_eq!(token.kind, TokenKind::Eof);
    assert!(tokenizer.is_eof());
}

// === Errors ===

#[test]
fn invalid_character_in_first_token() {
    let err = Tokenizer::new("in-t").err();
    assert_eq!(err, None, "first token `in` scans fine");

    let err = Tokenizer::new("-int").unwrap_err();
    assert_eq!(err, LexError::InvalidCharacter { ch: '-', offset: 0 });
    assert_eq!(err.span(), Span::new(0, 1));
}

#[test]
fn invalid_character_reported_on_advance() {
    let mut tokenizer = Tokenizer::new("List<int>").unwrap();
    let err = tokenizer.advance().unwrap_err();
    assert_eq!(err, LexError::InvalidCharacter { ch: '<', offset: 4 });
}

#[test]
fn non_ascii_character_has_full_width_span() {
    let mut tokenizer = Tokenizer::new("int é").unwrap();
    let err = tokenizer.advance().unwrap_err();
    assert_eq!(err, LexError::InvalidCharacter { ch: 'é', offset: 4 });
    assert_eq!(err.span(), Span::new(4, 6));
}

// === Repositioning ===

#[test]
fn reset_to_skips_ahead() {
    let mut tokenizer = Tokenizer::new("Tuple[List[int], str]").unwrap();
    tokenizer.advance().unwrap(); // Tuple
    tokenizer.advance().unwrap(); // [
    let start = tokenizer.current().span.start;
    let end = tokenizer.scan_extent(start).unwrap();
    assert_eq!(tokenizer.text(Span::new(start, end)), "List[int]");
    tokenizer.reset_to(end).unwrap();
    assert_eq!(tokenizer.current_kind(), TokenKind::Comma);
    assert_eq!(tokenizer.prev_end(), end);
}

#[test]
fn scan_extent_of_bare_name_is_none() {
    let tokenizer = Tokenizer::new("int, str").unwrap();
    assert_eq!(tokenizer.scan_extent(0), None);
}

#[test]
fn scan_extent_nested() {
    let source = "Dict[str, List[Tuple[int, int]]] trailing";
    let tokenizer = Tokenizer::new(source).unwrap();
    let end = tokenizer.scan_extent(0).unwrap();
    assert_eq!(&source[..end as usize], "Dict[str, List[Tuple[int, int]]]");
}

#[test]
fn scan_extent_allows_space_before_bracket() {
    let tokenizer = Tokenizer::new("List [int]").unwrap();
    assert_eq!(tokenizer.scan_extent(0), Some(10));
}

#[test]
fn scan_extent_unbalanced_is_none() {
    let tokenizer = Tokenizer::new("List[List[int]").unwrap();
    assert_eq!(tokenizer.scan_extent(0), None);
    let tokenizer = Tokenizer::new("NotAType[[").unwrap();
    assert_eq!(tokenizer.scan_extent(0), None);
}

// === Property tests ===

mod proptest_tokenizer {
    use super::super::*;
    use proptest::prelude::*;

    proptest! {
        /// Tokenizing never panics and always reaches EOF or an error
        /// within `len + 1` tokens.
        #[test]
        fn terminates_on_arbitrary_input(source in "\\PC{0,64}") {
            if let Ok(mut tokenizer) = Tokenizer::new(&source) {
                let mut steps = 0usize;
                while !tokenizer.is_eof() {
                    if tokenizer.advance().is_err() {
                        break;
                    }
                    steps += 1;
                    prop_assert!(steps <= source.len());
                }
            }
        }

        /// Concatenated token texts equal the input with whitespace removed.
        #[test]
        fn tokens_cover_non_whitespace(
            source in "[A-Za-z0-9_.\\[\\](),: \\t]{0,64}"
        ) {
            let mut tokenizer = Tokenizer::new(&source).unwrap();
            let mut joined = String::new();
            while !tokenizer.is_eof() {
                joined.push_str(tokenizer.current_text());
                tokenizer.advance().unwrap();
            }
            let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(joined, expected);
        }

        #[test]
        fn scan_extent_stays_in_bounds(source in "[A-Za-z\\[\\], ]{0,48}") {
            let tokenizer = Tokenizer::new(&source).unwrap();
            if let Some(end) = tokenizer.scan_extent(0) {
                prop_assert!(end as usize <= source.len());
                prop_assert_eq!(source.as_bytes()[end as usize - 1], b']');
            }
        }
    }
}
