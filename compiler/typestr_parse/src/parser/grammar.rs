//! Grammar productions.
//!
//! ```text
//! Type        := Group | NamedTuple | CustomClass | ScriptType
//!              | GenericType | SimpleType
//! Group       := "(" Type ")"
//! NamedTuple  := "NamedTuple" "[" Field ("," Field)* "]"
//! Field       := Name ":" Type
//! CustomClass := "__torch__.torch.classes." Path
//! ScriptType  := "__torch__." Path QualifiedTuple?
//! QualifiedTuple := "[" "NamedTuple" "," "[" (QField ("," QField)*)? "]" "]"
//! QField      := "[" Name "," Type "]"
//! GenericType := Keyword "[" (Type ("," Type)*)? "]"
//! SimpleType  := Name
//! ```
//!
//! Every production consumes at least one token before recursing, so
//! parsing terminates in time proportional to the input length.

use smallvec::SmallVec;
use tracing::trace;
use typestr_ir::grammar::{self as keywords, NAMED_TUPLE};
use typestr_ir::{Category, Container, Span, TypeBuilder};
use typestr_lexer::{Token, TokenKind, Tokenizer};
use typestr_stack::ensure_sufficient_stack;

use super::TypeParser;
use crate::cache::Parsed;
use crate::{ParseError, ParseErrorKind};

/// State for parsing one descriptor.
pub(super) struct Session<'p, 'src, B: TypeBuilder> {
    parser: &'p mut TypeParser<B>,
    tokens: Tokenizer<'src>,
    depth: u32,
    /// Deepest nesting level reached since the innermost cacheable
    /// expression started.
    peak: u32,
    /// Count of script-type productions seen so far. Their meaning depends
    /// on the named definitions, so extents containing one are not cached.
    script_refs: u32,
}

impl<'p, 'src, B: TypeBuilder> Session<'p, 'src, B> {
    pub(super) fn new(parser: &'p mut TypeParser<B>, tokens: Tokenizer<'src>) -> Self {
        Session {
            parser,
            tokens,
            depth: 0,
            peak: 0,
            script_refs: 0,
        }
    }

    /// Parse a full descriptor: one type, then end of input.
    pub(super) fn parse_root(mut self) -> Result<Parsed<B::Type>, ParseError> {
        let parsed = self.parse_type()?;
        let token = self.tokens.current();
        if token.kind != TokenKind::Eof {
            let source = self.tokens.source();
            let found = source[token.span.start as usize..].trim_end();
            #[allow(clippy::cast_possible_truncation, reason = "length checked by Tokenizer::new")]
            let span = Span::new(token.span.start, token.span.start + found.len() as u32);
            return Err(ParseError::new(
                ParseErrorKind::TrailingInput {
                    found: found.to_owned(),
                },
                span,
            ));
        }
        Ok(parsed)
    }

    // === Token helpers ===

    fn bump(&mut self) -> Result<Token, ParseError> {
        Ok(self.tokens.advance()?)
    }

    /// Describe the current token for an error message.
    fn found(&self) -> String {
        match self.tokens.current_kind() {
            TokenKind::Ident => format!("`{}`", self.tokens.current_text()),
            kind => kind.describe().to_owned(),
        }
    }

    /// Consume a token of `kind` or fail naming what was expected.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.tokens.check(kind) {
            return self.bump();
        }
        Err(ParseError::malformed(
            format!("expected {kind}, found {}", self.found()),
            self.tokens.current().span,
        ))
    }

    /// Consume an identifier token and return its text.
    fn expect_ident(&mut self, what: &str) -> Result<(&'src str, Span), ParseError> {
        let token = self.tokens.current();
        match token.kind {
            TokenKind::Ident => {
                let text = self.tokens.current_text();
                self.bump()?;
                Ok((text, token.span))
            }
            TokenKind::Eof => Err(self.end_of_input(token.span)),
            _ => Err(ParseError::malformed(
                format!("expected {what}, found {}", self.found()),
                token.span,
            )),
        }
    }

    /// The input ran out where a token was required.
    ///
    /// Inside an open `[` or `(` that is a missing closer; otherwise the
    /// descriptor was empty.
    fn end_of_input(&self, span: Span) -> ParseError {
        let mut open: SmallVec<[u8; 16]> = SmallVec::new();
        for byte in self.tokens.source().bytes() {
            match byte {
                b'[' | b'(' => open.push(byte),
                b']' | b')' => {
                    open.pop();
                }
                _ => {}
            }
        }
        let (opener, closer) = match open.last() {
            Some(b'(') => ("(", ")"),
            Some(_) => ("[", "]"),
            None => return ParseError::unexpected_end(span),
        };
        ParseError::malformed(
            format!("unclosed `{opener}`: expected `{closer}` before end of input"),
            span,
        )
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.tokens.prev_end())
    }

    fn record(&mut self, name: &str) {
        if self.parser.contained.insert(name) {
            trace!(name, "recorded contained type");
        }
    }

    // === Productions ===

    /// Parse one type expression, guarding the nesting depth.
    fn parse_type(&mut self) -> Result<Parsed<B::Type>, ParseError> {
        let limit = self.parser.config.max_depth;
        if self.depth >= limit {
            return Err(ParseError::new(
                ParseErrorKind::MaxDepthExceeded { limit },
                self.tokens.current().span,
            ));
        }
        self.depth += 1;
        self.peak = self.peak.max(self.depth);
        let result = ensure_sufficient_stack(|| self.parse_type_inner());
        self.depth -= 1;
        result
    }

    fn parse_type_inner(&mut self) -> Result<Parsed<B::Type>, ParseError> {
        let token = self.tokens.current();
        match token.kind {
            TokenKind::Ident => {}
            TokenKind::LParen => return self.parse_group(),
            TokenKind::Eof => return Err(self.end_of_input(token.span)),
            _ => {
                return Err(ParseError::malformed(
                    format!("expected a type name, found {}", self.found()),
                    token.span,
                ))
            }
        }

        let cache_key = if self.parser.config.cache {
            self.tokens
                .scan_extent(token.span.start)
                .map(|end| Span::new(token.span.start, end))
        } else {
            None
        };
        if let Some(key) = cache_key {
            let text = self.tokens.text(key);
            // This node sits at `depth`; its deepest descendant must not
            // pass the limit.
            let room = self.parser.config.max_depth - self.depth + 1;
            if let Some((hit, height)) = self.parser.cache.get(text, room) {
                trace!(key = text, height, "type cache hit");
                self.peak = self.peak.max(self.depth + height - 1);
                self.tokens.reset_to(key.end)?;
                return Ok(hit);
            }
        }

        let name = self.tokens.current_text();
        let script_refs = self.script_refs;
        let outer_peak = self.peak;
        self.peak = self.depth;
        let parsed = self.parse_named(name, token.span)?;
        let height = self.peak - self.depth + 1;
        self.peak = self.peak.max(outer_peak);

        // Only cache when the production consumed exactly the bracketed
        // extent (a class path followed by `[` stops short of it) and did
        // not touch the named definitions.
        if let Some(key) = cache_key {
            if self.tokens.prev_end() == key.end && self.script_refs == script_refs {
                let text = self.tokens.text(key);
                self.parser.cache.insert(text, parsed.clone(), height);
            }
        }
        Ok(parsed)
    }

    /// Dispatch on the leading name. The name token is still current.
    fn parse_named(&mut self, name: &'src str, span: Span) -> Result<Parsed<B::Type>, ParseError> {
        if name == NAMED_TUPLE {
            return self.parse_named_tuple(span);
        }
        if !keywords::is_well_formed_path(name) {
            return Err(ParseError::malformed(
                format!("malformed type path `{name}`"),
                span,
            ));
        }
        if keywords::in_custom_namespace(name) {
            return self.parse_custom_class(name, span);
        }
        if keywords::is_script_class(name) {
            return self.parse_script_type(name, span);
        }

        self.bump()?;
        if self.tokens.check(TokenKind::LBracket) {
            return self.parse_generic(name, span);
        }
        if let Some(kind) = Container::from_keyword(name) {
            return Err(ParseError::malformed(
                format!("expected `[` after `{kind}`, found {}", self.found()),
                self.tokens.current().span,
            ));
        }
        self.parse_simple(name, span)
    }

    /// `SimpleType := Name`, resolved by the builder.
    fn parse_simple(&mut self, name: &str, span: Span) -> Result<Parsed<B::Type>, ParseError> {
        let Some(ty) = self.parser.builder.simple(name) else {
            return Err(ParseError::unknown_type(name, span));
        };
        self.record(name);
        Ok(Parsed::new(ty, Category::Simple))
    }

    /// `Group := "(" Type ")"`
    fn parse_group(&mut self) -> Result<Parsed<B::Type>, ParseError> {
        self.bump()?;
        let inner = self.parse_type()?;
        self.expect(TokenKind::RParen)?;
        Ok(inner)
    }

    /// `GenericType := Keyword "[" (Type ("," Type)*)? "]"`
    ///
    /// Arguments are parsed before the keyword is resolved, so structural
    /// errors inside the brackets take precedence over an unknown name.
    fn parse_generic(&mut self, name: &str, name_span: Span) -> Result<Parsed<B::Type>, ParseError> {
        self.expect(TokenKind::LBracket)?;
        let mut args: SmallVec<[B::Type; 4]> = SmallVec::new();
        if !self.tokens.check(TokenKind::RBracket) {
            loop {
                args.push(self.parse_type()?.ty);
                if self.tokens.check(TokenKind::Comma) {
                    self.bump()?;
                    continue;
                }
                break;
            }
        }
        self.expect_close_args()?;

        let Some(kind) = Container::from_keyword(name) else {
            return Err(ParseError::unknown_type(name, name_span));
        };
        let arity = kind.arity();
        if !arity.accepts(args.len()) {
            return Err(ParseError::new(
                ParseErrorKind::ArityMismatch {
                    container: kind,
                    expected: arity,
                    found: args.len(),
                },
                self.span_from(name_span.start),
            ));
        }
        let ty = self.parser.builder.container(kind, &args);
        Ok(Parsed::new(ty, Category::Container(kind)))
    }

    /// Close an argument list: `]`, or complain about what is there instead.
    fn expect_close_args(&mut self) -> Result<(), ParseError> {
        if self.tokens.check(TokenKind::RBracket) {
            self.bump()?;
            return Ok(());
        }
        Err(ParseError::malformed(
            format!("expected `,` or `]`, found {}", self.found()),
            self.tokens.current().span,
        ))
    }

    /// `NamedTuple := "NamedTuple" "[" Field ("," Field)* "]"`
    fn parse_named_tuple(&mut self, keyword_span: Span) -> Result<Parsed<B::Type>, ParseError> {
        self.bump()?;
        if !self.tokens.check(TokenKind::LBracket) {
            return Err(ParseError::malformed(
                format!("expected `[` after `{NAMED_TUPLE}`, found {}", self.found()),
                self.tokens.current().span,
            ));
        }
        self.bump()?;

        let mut fields: Vec<(String, B::Type)> = Vec::new();
        loop {
            let (field, field_span) = self.parse_field_name(&fields)?;
            self.expect(TokenKind::Colon)?;
            let ty = self.parse_type()?.ty;
            fields.push((field.to_owned(), ty));
            trace!(field, span = %field_span, "named tuple field");
            if self.tokens.check(TokenKind::Comma) {
                self.bump()?;
                continue;
            }
            break;
        }
        self.expect_close_args()?;

        self.record(NAMED_TUPLE);
        trace!(span = %self.span_from(keyword_span.start), fields = fields.len(), "anonymous named tuple");
        let ty = self.parser.builder.named_tuple(None, &fields);
        Ok(Parsed::new(ty, Category::NamedTuple))
    }

    /// A plain (undotted) field name that is not already in `fields`.
    fn parse_field_name(
        &mut self,
        fields: &[(String, B::Type)],
    ) -> Result<(&'src str, Span), ParseError> {
        let (field, span) = self.expect_ident("a field name")?;
        if field.contains('.') {
            return Err(ParseError::malformed(
                format!("field name `{field}` must not contain `.`"),
                span,
            ));
        }
        if fields.iter().any(|(existing, _)| existing == field) {
            return Err(ParseError::malformed(
                format!("duplicate field `{field}`"),
                span,
            ));
        }
        Ok((field, span))
    }

    /// `CustomClass := "__torch__.torch.classes." Path`
    ///
    /// The whole dotted path is one identifier token.
    fn parse_custom_class(&mut self, path: &str, span: Span) -> Result<Parsed<B::Type>, ParseError> {
        if !keywords::is_custom_class(path) {
            return Err(ParseError::malformed(
                format!(
                    "expected a class name after `{}`",
                    keywords::CUSTOM_CLASS_PREFIX
                ),
                span,
            ));
        }
        self.bump()?;
        self.record(path);
        let ty = self.parser.builder.custom_class(path);
        Ok(Parsed::new(ty, Category::CustomClass))
    }

    /// `ScriptType := "__torch__." Path QualifiedTuple?`
    ///
    /// With a bracketed body this declares a qualified named tuple and
    /// remembers it; without one it refers to an earlier declaration or,
    /// failing that, to whatever the builder's registry knows.
    fn parse_script_type(&mut self, path: &str, span: Span) -> Result<Parsed<B::Type>, ParseError> {
        self.script_refs += 1;
        self.bump()?;
        if self.tokens.check(TokenKind::LBracket) {
            return self.parse_qualified_named_tuple(path, span);
        }

        self.record(path);
        if let Some(ty) = self.parser.definitions.get(path) {
            return Ok(Parsed::new(ty.clone(), Category::NamedTuple));
        }
        let ty = self.parser.builder.script_class(path);
        Ok(Parsed::new(ty, Category::ScriptClass))
    }

    /// `QualifiedTuple := "[" "NamedTuple" "," "[" (QField ("," QField)*)? "]" "]"`
    fn parse_qualified_named_tuple(
        &mut self,
        path: &str,
        span: Span,
    ) -> Result<Parsed<B::Type>, ParseError> {
        self.expect(TokenKind::LBracket)?;
        let (kind, kind_span) = self.expect_ident("`NamedTuple`")?;
        if kind != NAMED_TUPLE {
            return Err(ParseError::malformed(
                format!("custom type `{kind}` is not supported; expected `{NAMED_TUPLE}`"),
                kind_span,
            ));
        }
        self.expect(TokenKind::Comma)?;
        self.expect(TokenKind::LBracket)?;

        let mut fields: Vec<(String, B::Type)> = Vec::new();
        if !self.tokens.check(TokenKind::RBracket) {
            loop {
                self.expect(TokenKind::LBracket)?;
                let (field, _) = self.parse_field_name(&fields)?;
                self.expect(TokenKind::Comma)?;
                let ty = self.parse_type()?.ty;
                self.expect(TokenKind::RBracket)?;
                fields.push((field.to_owned(), ty));
                if self.tokens.check(TokenKind::Comma) {
                    self.bump()?;
                    continue;
                }
                break;
            }
        }
        self.expect_close_args()?;
        self.expect(TokenKind::RBracket)?;

        self.record(path);
        self.record(NAMED_TUPLE);
        let ty = self.parser.builder.named_tuple(Some(path), &fields);
        trace!(path, span = %self.span_from(span.start), "declared named tuple");
        self.parser.definitions.insert(path.to_owned(), ty.clone());
        Ok(Parsed::new(ty, Category::NamedTuple))
    }
}
