//! Per-parser memo tables.
//!
//! - [`TypeCache`]: exact sub-expression text -> already built type
//! - [`ContainedTypes`]: every type name resolved so far
//!
//! Both live inside one [`TypeParser`](crate::TypeParser) and only grow.
//! There are no removal operations.

use rustc_hash::{FxHashMap, FxHashSet};
use typestr_ir::Category;

/// A built type together with the production that built it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parsed<T> {
    pub ty: T,
    pub category: Category,
}

impl<T> Parsed<T> {
    #[inline]
    pub fn new(ty: T, category: Category) -> Self {
        Parsed { ty, category }
    }
}

/// Memo of bracketed sub-expressions, keyed by their exact source text.
///
/// Each entry remembers the nesting height of the expression it was built
/// from (`List[int]` has height 2), so a lookup made deeper in another
/// descriptor can refuse entries that would not fit under the depth limit.
#[derive(Clone, Debug)]
pub struct TypeCache<T> {
    entries: FxHashMap<String, CacheEntry<T>>,
    hits: u64,
}

#[derive(Clone, Debug)]
struct CacheEntry<T> {
    parsed: Parsed<T>,
    height: u32,
}

impl<T: Clone> TypeCache<T> {
    pub fn new() -> Self {
        TypeCache {
            entries: FxHashMap::default(),
            hits: 0,
        }
    }

    /// Look up `key`, counting the hit. Returns the entry and its height.
    ///
    /// Entries taller than `max_height` are treated as absent.
    pub fn get(&mut self, key: &str, max_height: u32) -> Option<(Parsed<T>, u32)> {
        let entry = self.entries.get(key).filter(|e| e.height <= max_height)?;
        let found = (entry.parsed.clone(), entry.height);
        self.hits += 1;
        Some(found)
    }

    /// Record the result for `key` and the height of its expression. The
    /// first entry for a key wins.
    pub fn insert(&mut self, key: &str, parsed: Parsed<T>, height: u32) {
        self.entries
            .entry(key.to_owned())
            .or_insert(CacheEntry { parsed, height });
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached sub-expressions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

impl<T: Clone> Default for TypeCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The set of distinct type names seen by one parser.
///
/// Names are recorded the moment they resolve, so entries from a parse
/// that later fails stay behind.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContainedTypes {
    names: FxHashSet<String>,
}

impl ContainedTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name`. Returns `true` if it was not present yet.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_owned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names in lexicographic order, for stable output.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests;
