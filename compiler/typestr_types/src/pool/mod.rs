//! Interning storage for types.
//!
//! Items are `(Tag, data)` pairs in one vector; variable-length payloads
//! live in a shared `extra` array, and class paths and field names in a
//! string table. Interning keys on the full payload, so building the same
//! type twice returns the same [`Idx`].

mod construct;
mod format;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Idx, Tag};

/// Marks an anonymous named tuple in the extra layout.
const NO_NAME: u32 = u32::MAX;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Item {
    tag: Tag,
    data: u32,
}

/// Hash-consed type storage.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    /// `(tag, data)` for items whose payload fits in `data`.
    intern_map: FxHashMap<(Tag, u32), Idx>,
    /// `(tag, payload)` for items stored in `extra`.
    extra_map: FxHashMap<(Tag, Box<[u32]>), Idx>,
    names: Vec<String>,
    name_map: FxHashMap<String, u32>,
}

impl Pool {
    /// Create a pool with every simple type pre-interned at its fixed index.
    pub fn new() -> Self {
        let mut pool = Pool {
            items: Vec::with_capacity(Idx::FIRST_DYNAMIC as usize + 64),
            extra: Vec::new(),
            intern_map: FxHashMap::default(),
            extra_map: FxHashMap::default(),
            names: Vec::new(),
            name_map: FxHashMap::default(),
        };
        for tag in Tag::SIMPLE {
            pool.items.push(Item { tag, data: 0 });
        }
        // Pad the reserved range so dynamic indices start where expected.
        while pool.items.len() < Idx::FIRST_DYNAMIC as usize {
            pool.items.push(Item {
                tag: Tag::Any,
                data: 0,
            });
        }
        pool
    }

    /// Number of items, including the reserved range.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of types built beyond the simple ones.
    pub fn dynamic_count(&self) -> usize {
        self.items.len() - Idx::FIRST_DYNAMIC as usize
    }

    /// A pool always holds the simple types.
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.items[idx.raw() as usize].tag
    }

    #[inline]
    pub fn data(&self, idx: Idx) -> u32 {
        self.items[idx.raw() as usize].data
    }

    /// Resolve a simple type name to its fixed index.
    pub fn simple_type(name: &str) -> Option<Idx> {
        Tag::from_simple_name(name).map(|tag| Idx::from_raw(tag as u32))
    }

    // === Interning ===

    #[allow(clippy::cast_possible_truncation, reason = "pool holds fewer than 2^32 items")]
    fn push(&mut self, item: Item) -> Idx {
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(item);
        trace!(tag = %item.tag, idx = idx.raw(), "interned type");
        idx
    }

    /// Intern an item whose payload is the `data` word itself.
    pub(crate) fn intern(&mut self, tag: Tag, data: u32) -> Idx {
        if let Some(&idx) = self.intern_map.get(&(tag, data)) {
            return idx;
        }
        let idx = self.push(Item { tag, data });
        self.intern_map.insert((tag, data), idx);
        idx
    }

    /// Intern an item whose payload goes in the extra array.
    #[allow(clippy::cast_possible_truncation, reason = "extra holds fewer than 2^32 words")]
    pub(crate) fn intern_complex(&mut self, tag: Tag, payload: &[u32]) -> Idx {
        let key = (tag, Box::<[u32]>::from(payload));
        if let Some(&idx) = self.extra_map.get(&key) {
            return idx;
        }
        let start = self.extra.len() as u32;
        self.extra.extend_from_slice(payload);
        let idx = self.push(Item { tag, data: start });
        self.extra_map.insert(key, idx);
        idx
    }

    /// Intern a class path or field name.
    #[allow(clippy::cast_possible_truncation, reason = "fewer than 2^32 names")]
    pub(crate) fn intern_name(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.name_map.get(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_owned());
        self.name_map.insert(name.to_owned(), id);
        id
    }

    #[inline]
    fn name(&self, id: u32) -> &str {
        &self.names[id as usize]
    }

    #[inline]
    fn extra_at(&self, idx: Idx, offset: usize) -> u32 {
        self.extra[self.data(idx) as usize + offset]
    }

    // === Accessors ===

    /// Type arguments of a generic container, in order.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a container.
    pub fn container_args(&self, idx: Idx) -> Vec<Idx> {
        match self.tag(idx) {
            Tag::List | Tag::Optional | Tag::Future | Tag::RRef | Tag::Await => {
                vec![Idx::from_raw(self.data(idx))]
            }
            Tag::Dict => vec![
                Idx::from_raw(self.extra_at(idx, 0)),
                Idx::from_raw(self.extra_at(idx, 1)),
            ],
            Tag::Tuple | Tag::Union => {
                let count = self.extra_at(idx, 0) as usize;
                (1..=count)
                    .map(|i| Idx::from_raw(self.extra_at(idx, i)))
                    .collect()
            }
            tag => panic!("container_args called on {tag:?}"),
        }
    }

    /// Qualified name of a named tuple, `None` for anonymous ones.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a named tuple.
    pub fn named_tuple_name(&self, idx: Idx) -> Option<&str> {
        assert_eq!(self.tag(idx), Tag::NamedTuple, "not a named tuple");
        match self.extra_at(idx, 0) {
            NO_NAME => None,
            id => Some(self.name(id)),
        }
    }

    /// Fields of a named tuple, in declaration order.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a named tuple.
    pub fn named_tuple_fields(&self, idx: Idx) -> Vec<(&str, Idx)> {
        assert_eq!(self.tag(idx), Tag::NamedTuple, "not a named tuple");
        let count = self.extra_at(idx, 1) as usize;
        (0..count)
            .map(|i| {
                let name = self.name(self.extra_at(idx, 2 + 2 * i));
                let ty = Idx::from_raw(self.extra_at(idx, 3 + 2 * i));
                (name, ty)
            })
            .collect()
    }

    /// Path of a custom or script class.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a class.
    pub fn class_path(&self, idx: Idx) -> &str {
        match self.tag(idx) {
            Tag::CustomClass | Tag::ScriptClass => self.name(self.data(idx)),
            tag => panic!("class_path called on {tag:?}"),
        }
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
