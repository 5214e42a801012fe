//! The type construction interface the parser calls out to.
//!
//! The parser never inspects the types it produces. It resolves names and
//! structure, then asks a [`TypeBuilder`] to materialize each node. This
//! keeps the parser independent of any particular type system: the mobile
//! runtime plugs in its own factory, tests plug in a string-building fake,
//! and `typestr_types::Pool` provides an interning reference
//! implementation.

use crate::Container;

/// Factory for concrete type objects.
///
/// Implementations are called bottom-up: children are always built before
/// the node that references them.
pub trait TypeBuilder {
    /// Opaque handle to a built type.
    type Type: Clone;

    /// Resolve a bare type name.
    ///
    /// Returns `None` if the name is not a simple type the builder knows.
    /// The builder is the only authority here; the parser never keeps its
    /// own list of scalar names.
    fn simple(&mut self, name: &str) -> Option<Self::Type>;

    /// Build a generic container application.
    ///
    /// `args` has already been checked against [`Container::arity`].
    fn container(&mut self, kind: Container, args: &[Self::Type]) -> Self::Type;

    /// Build a named tuple.
    ///
    /// `name` is the qualified name for `__torch__.`-declared tuples and
    /// `None` for anonymous `NamedTuple[...]` forms. Field names are unique.
    fn named_tuple(&mut self, name: Option<&str>, fields: &[(String, Self::Type)]) -> Self::Type;

    /// Resolve a torchbind class path (`__torch__.torch.classes.ns.Name`).
    ///
    /// Acts as the class registry. When no definition has been registered
    /// yet the builder returns a deferred placeholder; resolving it later
    /// is the caller's business.
    fn custom_class(&mut self, path: &str) -> Self::Type;

    /// Resolve a `__torch__.`-qualified script type that was not declared
    /// inline by an earlier descriptor. Same placeholder contract as
    /// [`custom_class`](Self::custom_class).
    fn script_class(&mut self, path: &str) -> Self::Type;
}

impl<B: TypeBuilder + ?Sized> TypeBuilder for &mut B {
    type Type = B::Type;

    #[inline]
    fn simple(&mut self, name: &str) -> Option<Self::Type> {
        (**self).simple(name)
    }

    #[inline]
    fn container(&mut self, kind: Container, args: &[Self::Type]) -> Self::Type {
        (**self).container(kind, args)
    }

    #[inline]
    fn named_tuple(&mut self, name: Option<&str>, fields: &[(String, Self::Type)]) -> Self::Type {
        (**self).named_tuple(name, fields)
    }

    #[inline]
    fn custom_class(&mut self, path: &str) -> Self::Type {
        (**self).custom_class(path)
    }

    #[inline]
    fn script_class(&mut self, path: &str) -> Self::Type {
        (**self).script_class(path)
    }
}
