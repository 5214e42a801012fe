//! Parser configuration.

/// Knobs for a [`TypeParser`](crate::TypeParser).
///
/// The defaults suit descriptors produced by the model exporter, which
/// rarely nest more than a handful of levels.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParserConfig {
    /// Maximum nesting depth of type expressions. `List[int]` has depth 2.
    pub max_depth: u32,
    /// Reuse results for identical bracketed sub-expressions.
    pub cache: bool,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: u32 = 128;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            cache: true,
        }
    }
}
