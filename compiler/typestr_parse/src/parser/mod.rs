//! The parser value and its public operations.
//!
//! A [`TypeParser`] owns everything that outlives a single descriptor:
//! the builder, the [`TypeCache`], the named definitions, and the
//! [`ContainedTypes`] set. Per-descriptor state (the tokenizer and the
//! nesting depth) lives in a short-lived `Session` created by each call.

mod grammar;

use rustc_hash::FxHashMap;
use tracing::debug;
use typestr_ir::{grammar as keywords, Span, TypeBuilder};
use typestr_lexer::Tokenizer;

use crate::cache::{ContainedTypes, TypeCache};
use crate::{BatchError, ExpectedKind, ParseError, ParseErrorKind, ParserConfig};

use grammar::Session;

/// Recursive-descent parser for type descriptor strings.
///
/// One instance may parse many descriptors; they share the cache, the
/// named definitions and the contained-type set. An instance is not meant
/// to be shared between threads while parsing (every parse takes
/// `&mut self`), but separate instances are fully independent.
pub struct TypeParser<B: TypeBuilder> {
    builder: B,
    config: ParserConfig,
    cache: TypeCache<B::Type>,
    /// Qualified named tuples declared inline, by qualified name.
    definitions: FxHashMap<String, B::Type>,
    contained: ContainedTypes,
}

impl<B: TypeBuilder> TypeParser<B> {
    /// Create a parser with the default configuration.
    pub fn new(builder: B) -> Self {
        Self::with_config(builder, ParserConfig::default())
    }

    pub fn with_config(builder: B, config: ParserConfig) -> Self {
        TypeParser {
            builder,
            config,
            cache: TypeCache::new(),
            definitions: FxHashMap::default(),
            contained: ContainedTypes::new(),
        }
    }

    /// Parse one complete descriptor.
    pub fn parse(&mut self, source: &str) -> Result<B::Type, ParseError> {
        self.parse_expecting(source, ExpectedKind::Any)
    }

    /// Parse one complete descriptor whose root must satisfy `expected`.
    ///
    /// The whole string must be consumed; leftover tokens are
    /// [`ParseErrorKind::TrailingInput`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn parse_expecting(
        &mut self,
        source: &str,
        expected: ExpectedKind,
    ) -> Result<B::Type, ParseError> {
        let tokens = Tokenizer::new(source)?;
        let parsed = Session::new(self, tokens).parse_root()?;
        if !expected.accepts(parsed.category) {
            #[allow(clippy::cast_possible_truncation, reason = "length checked by Tokenizer::new")]
            let span = Span::new(0, source.len() as u32);
            return Err(ParseError::new(
                ParseErrorKind::TypeKindMismatch {
                    expected,
                    found: parsed.category,
                },
                span,
            ));
        }
        Ok(parsed.ty)
    }

    /// Parse every descriptor in order.
    ///
    /// Fails on the first descriptor that does not parse and reports its
    /// index. No partial list is returned. Names recorded before the
    /// failure stay in [`contained_types()`](Self::contained_types).
    pub fn parse_list<S: AsRef<str>>(&mut self, sources: &[S]) -> Result<Vec<B::Type>, BatchError> {
        self.parse_list_expecting(sources, ExpectedKind::Any)
    }

    /// [`parse_list`](Self::parse_list) with every root checked against
    /// `expected`.
    pub fn parse_list_expecting<S: AsRef<str>>(
        &mut self,
        sources: &[S],
        expected: ExpectedKind,
    ) -> Result<Vec<B::Type>, BatchError> {
        debug!(count = sources.len(), %expected, "parsing descriptor batch");
        sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                self.parse_expecting(source.as_ref(), expected)
                    .map_err(|error| BatchError { index, error })
            })
            .collect()
    }

    /// Every distinct type name resolved so far.
    pub fn contained_types(&self) -> &ContainedTypes {
        &self.contained
    }

    /// The type declared inline under `name` by an earlier descriptor.
    pub fn definition(&self, name: &str) -> Option<&B::Type> {
        self.definitions.get(name)
    }

    pub fn cache(&self) -> &TypeCache<B::Type> {
        &self.cache
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Give up the parser, keeping the builder and the contained set.
    pub fn into_parts(self) -> (B, ContainedTypes) {
        (self.builder, self.contained)
    }

    /// Generic keywords plus `NamedTuple`. A grammar constant.
    pub fn non_simple_types() -> &'static [&'static str] {
        keywords::non_simple_types()
    }

    /// Custom-class path prefixes. A grammar constant.
    pub fn custom_types() -> &'static [&'static str] {
        keywords::custom_types()
    }
}
