//! Root-level kind constraints.

use std::fmt;

use typestr_ir::{Category, Container};

/// The category a caller requires of the root type.
///
/// Only the outermost production is checked; nested types are unconstrained.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ExpectedKind {
    /// Anything the grammar accepts.
    #[default]
    Any,
    /// A leaf name resolved by the builder.
    Simple,
    /// Any generic container.
    AnyContainer,
    /// One specific generic container.
    Container(Container),
    /// An anonymous or qualified named tuple, or a reference to one.
    NamedTuple,
    /// A torchbind class or a script class reference.
    Class,
}

impl ExpectedKind {
    /// Returns `true` if a root of `category` satisfies this constraint.
    pub fn accepts(self, category: Category) -> bool {
        match self {
            ExpectedKind::Any => true,
            ExpectedKind::Simple => category == Category::Simple,
            ExpectedKind::AnyContainer => matches!(category, Category::Container(_)),
            ExpectedKind::Container(kind) => category == Category::Container(kind),
            ExpectedKind::NamedTuple => category == Category::NamedTuple,
            ExpectedKind::Class => {
                matches!(category, Category::CustomClass | Category::ScriptClass)
            }
        }
    }

    /// Parse the spelling used on the command line: `any`, `simple`,
    /// `container`, `class`, `NamedTuple`, or a container keyword.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "any" => Some(ExpectedKind::Any),
            "simple" => Some(ExpectedKind::Simple),
            "container" => Some(ExpectedKind::AnyContainer),
            "class" => Some(ExpectedKind::Class),
            typestr_ir::grammar::NAMED_TUPLE => Some(ExpectedKind::NamedTuple),
            _ => Container::from_keyword(name).map(ExpectedKind::Container),
        }
    }
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedKind::Any => f.write_str("any"),
            ExpectedKind::Simple => f.write_str("simple"),
            ExpectedKind::AnyContainer => f.write_str("container"),
            ExpectedKind::Container(kind) => write!(f, "{kind}"),
            ExpectedKind::NamedTuple => f.write_str("NamedTuple"),
            ExpectedKind::Class => f.write_str("class"),
        }
    }
}
