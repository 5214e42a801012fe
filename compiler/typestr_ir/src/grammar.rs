//! Grammar constants for the type descriptor language.
//!
//! The descriptor grammar is closed: the set of generic keywords and the
//! class path prefixes never change at runtime. Everything here is a
//! `const` or a pure function over one, so any crate can ask "is this a
//! generic keyword?" without holding a parser.

use std::fmt;

/// Keyword that introduces an inline named tuple.
pub const NAMED_TUPLE: &str = "NamedTuple";

/// Path prefix shared by all script-compiled user types.
pub const SCRIPT_PREFIX: &str = "__torch__";

/// Path prefix that identifies a torchbind custom class.
pub const CUSTOM_CLASS_PREFIX: &str = "__torch__.torch.classes";

/// Keywords that denote non-simple (aggregate) forms.
const NON_SIMPLE_TYPES: &[&str] = &[
    "List",
    "Optional",
    "Dict",
    "Tuple",
    "Union",
    "Future",
    "RRef",
    "Await",
    NAMED_TUPLE,
];

const CUSTOM_TYPES: &[&str] = &[CUSTOM_CLASS_PREFIX];

/// Generic keywords plus `NamedTuple`, in declaration order.
pub fn non_simple_types() -> &'static [&'static str] {
    NON_SIMPLE_TYPES
}

/// Path prefixes recognized as custom (torchbind) classes.
pub fn custom_types() -> &'static [&'static str] {
    CUSTOM_TYPES
}

/// Returns `true` if `path` is the custom-class prefix itself or lies
/// beneath it.
pub fn in_custom_namespace(path: &str) -> bool {
    CUSTOM_TYPES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    })
}

/// Returns `true` if `path` names a torchbind class, i.e. it is the
/// custom-class prefix followed by at least one more path segment.
pub fn is_custom_class(path: &str) -> bool {
    CUSTOM_TYPES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|rest| !rest.is_empty())
    })
}

/// Returns `true` if `path` is a `__torch__.`-qualified path outside the
/// custom-class namespace.
pub fn is_script_class(path: &str) -> bool {
    !in_custom_namespace(path)
        && path
            .strip_prefix(SCRIPT_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .is_some_and(|rest| !rest.is_empty())
}

/// Returns `true` if every `.`-separated segment of `path` is non-empty.
pub fn is_well_formed_path(path: &str) -> bool {
    !path.is_empty() && path.split('.').all(|segment| !segment.is_empty())
}

/// Generic container keywords.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Container {
    /// `List[T]`
    List,
    /// `Optional[T]`
    Optional,
    /// `Dict[K, V]`
    Dict,
    /// `Tuple[T...]`, including the empty tuple `Tuple[]`.
    Tuple,
    /// `Union[T, ...]`
    Union,
    /// `Future[T]`
    Future,
    /// `RRef[T]`
    RRef,
    /// `Await[T]`
    Await,
}

impl Container {
    /// Every container, in keyword order.
    pub const ALL: [Container; 8] = [
        Container::List,
        Container::Optional,
        Container::Dict,
        Container::Tuple,
        Container::Union,
        Container::Future,
        Container::RRef,
        Container::Await,
    ];

    /// The keyword spelling used in descriptors.
    pub const fn keyword(self) -> &'static str {
        match self {
            Container::List => "List",
            Container::Optional => "Optional",
            Container::Dict => "Dict",
            Container::Tuple => "Tuple",
            Container::Union => "Union",
            Container::Future => "Future",
            Container::RRef => "RRef",
            Container::Await => "Await",
        }
    }

    /// Look up a container by its exact (case-sensitive) keyword.
    pub fn from_keyword(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.keyword() == name)
    }

    /// Number of type arguments the container accepts.
    pub const fn arity(self) -> Arity {
        match self {
            Container::List
            | Container::Optional
            | Container::Future
            | Container::RRef
            | Container::Await => Arity::Exactly(1),
            Container::Dict => Arity::Exactly(2),
            Container::Tuple => Arity::AtLeast(0),
            Container::Union => Arity::AtLeast(1),
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Accepted argument count of a generic container.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if `count` arguments satisfy this arity.
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// The production a parsed type came from.
///
/// Builders hand back opaque handles, so the parser tracks the category
/// itself. It is what expected-kind checks compare against.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    /// A leaf name resolved by the builder (`int`, `Tensor`, ...).
    Simple,
    /// A generic container application.
    Container(Container),
    /// An inline named tuple, anonymous or qualified.
    NamedTuple,
    /// A torchbind class under [`CUSTOM_CLASS_PREFIX`].
    CustomClass,
    /// A reference to a `__torch__.`-qualified script type.
    ScriptClass,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Simple => f.write_str("simple"),
            Category::Container(c) => write!(f, "{c}"),
            Category::NamedTuple => f.write_str(NAMED_TUPLE),
            Category::CustomClass => f.write_str("custom class"),
            Category::ScriptClass => f.write_str("script class"),
        }
    }
}
