//! Type index handle.
//!
//! Simple types have fixed indices so they can be named without a pool;
//! everything else is allocated from [`Idx::FIRST_DYNAMIC`] upward.

use std::fmt;

use crate::Tag;

/// A 32-bit index into a [`Pool`](crate::Pool).
///
/// Two handles from the same pool are equal exactly when the types they
/// name are structurally equal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Simple Types (indices 0-17) ===

    pub const INT: Self = Self(0);
    pub const FLOAT: Self = Self(1);
    pub const BOOL: Self = Self(2);
    pub const STR: Self = Self(3);
    pub const COMPLEX: Self = Self(4);
    /// `number`: int, float or complex.
    pub const NUMBER: Self = Self(5);
    pub const TENSOR: Self = Self(6);
    pub const NONE_TYPE: Self = Self(7);
    pub const ANY: Self = Self(8);
    pub const DEVICE: Self = Self(9);
    pub const STREAM: Self = Self(10);
    pub const STORAGE: Self = Self(11);
    pub const GENERATOR: Self = Self(12);
    pub const LAYOUT: Self = Self(13);
    pub const SCALAR_TYPE: Self = Self(14);
    pub const MEMORY_FORMAT: Self = Self(15);
    pub const QSCHEME: Self = Self(16);
    pub const CAPSULE: Self = Self(17);

    // === Reserved Range (18-31) ===

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = 32;

    /// Number of pre-interned simple types.
    pub const SIMPLE_COUNT: u32 = 18;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-interned simple type.
    #[inline]
    pub const fn is_simple(self) -> bool {
        self.0 < Self::SIMPLE_COUNT
    }

    /// Descriptor name of a simple type, or `None` for dynamic types.
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        if self.is_simple() {
            Some(Tag::SIMPLE[self.0 as usize].name())
        } else {
            None
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx::{name}"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "type#{}", self.0),
        }
    }
}

const _: () = assert!(std::mem::size_of::<Idx>() == 4);

#[cfg(test)]
mod tests;
