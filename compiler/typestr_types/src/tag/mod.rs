//! Type kind tag.
//!
//! Each item in the pool carries a `Tag` that says how to read its `data`
//! word.
//!
//! # Tag Ranges
//!
//! - 0-31: Simple types (data unused)
//! - 32-47: Generic containers (data = child Idx, or extra index)
//! - 80-95: Named types (data = extra index or name id)

use std::fmt;

use typestr_ir::Container;

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Simple Types (0-31) ===
    // data: unused (0)
    Int = 0,
    Float = 1,
    Bool = 2,
    Str = 3,
    Complex = 4,
    Number = 5,
    Tensor = 6,
    NoneType = 7,
    Any = 8,
    Device = 9,
    Stream = 10,
    Storage = 11,
    Generator = 12,
    Layout = 13,
    ScalarType = 14,
    MemoryFormat = 15,
    QScheme = 16,
    Capsule = 17,

    // === Single-Child Containers (32-39) ===
    // data: child Idx.raw()
    List = 32,
    Optional = 33,
    Future = 34,
    RRef = 35,
    Await = 36,

    // === Multi-Child Containers (40-47) ===
    // data: index into extra[]
    /// extra: `[key, value]`
    Dict = 40,
    /// extra: `[count, elem...]`
    Tuple = 41,
    /// extra: `[count, member...]`
    Union = 42,

    // === Named Types (80-95) ===
    /// extra: `[name_id or NO_NAME, count, (field_name_id, field_ty)...]`
    NamedTuple = 80,
    /// data: name id of the class path
    CustomClass = 81,
    /// data: name id of the class path
    ScriptClass = 82,
}

impl Tag {
    /// Simple-type tags in index order.
    pub const SIMPLE: [Tag; 18] = [
        Tag::Int,
        Tag::Float,
        Tag::Bool,
        Tag::Str,
        Tag::Complex,
        Tag::Number,
        Tag::Tensor,
        Tag::NoneType,
        Tag::Any,
        Tag::Device,
        Tag::Stream,
        Tag::Storage,
        Tag::Generator,
        Tag::Layout,
        Tag::ScalarType,
        Tag::MemoryFormat,
        Tag::QScheme,
        Tag::Capsule,
    ];

    /// Look up a simple type by its descriptor name.
    pub fn from_simple_name(name: &str) -> Option<Tag> {
        Self::SIMPLE.into_iter().find(|tag| tag.name() == name)
    }

    #[inline]
    pub const fn is_simple(self) -> bool {
        (self as u8) < 32
    }

    #[inline]
    pub const fn is_container(self) -> bool {
        let v = self as u8;
        v >= 32 && v < 48
    }

    /// Check if this tag stores its payload in the extra array.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(self, Self::Dict | Self::Tuple | Self::Union | Self::NamedTuple)
    }

    pub const fn from_container(kind: Container) -> Tag {
        match kind {
            Container::List => Tag::List,
            Container::Optional => Tag::Optional,
            Container::Dict => Tag::Dict,
            Container::Tuple => Tag::Tuple,
            Container::Union => Tag::Union,
            Container::Future => Tag::Future,
            Container::RRef => Tag::RRef,
            Container::Await => Tag::Await,
        }
    }

    /// The generic keyword for a container tag.
    pub const fn container(self) -> Option<Container> {
        match self {
            Tag::List => Some(Container::List),
            Tag::Optional => Some(Container::Optional),
            Tag::Dict => Some(Container::Dict),
            Tag::Tuple => Some(Container::Tuple),
            Tag::Union => Some(Container::Union),
            Tag::Future => Some(Container::Future),
            Tag::RRef => Some(Container::RRef),
            Tag::Await => Some(Container::Await),
            _ => None,
        }
    }

    /// Descriptor spelling for simple types and keywords, a descriptive
    /// word for class tags.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Complex => "complex",
            Self::Number => "number",
            Self::Tensor => "Tensor",
            Self::NoneType => "NoneType",
            Self::Any => "Any",
            Self::Device => "Device",
            Self::Stream => "Stream",
            Self::Storage => "Storage",
            Self::Generator => "Generator",
            Self::Layout => "Layout",
            Self::ScalarType => "ScalarType",
            Self::MemoryFormat => "MemoryFormat",
            Self::QScheme => "QScheme",
            Self::Capsule => "Capsule",
            Self::List => "List",
            Self::Optional => "Optional",
            Self::Future => "Future",
            Self::RRef => "RRef",
            Self::Await => "Await",
            Self::Dict => "Dict",
            Self::Tuple => "Tuple",
            Self::Union => "Union",
            Self::NamedTuple => "NamedTuple",
            Self::CustomClass => "custom_class",
            Self::ScriptClass => "script_class",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Tag>() == 1);

#[cfg(test)]
mod tests;
