//! Type construction for the Pool, and its [`TypeBuilder`] implementation.

use typestr_ir::{Container, TypeBuilder};

use super::NO_NAME;
use crate::{Idx, Pool, Tag};

impl Pool {
    // === Single-Child Containers ===

    /// `List[elem]`
    pub fn list(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::List, elem.raw())
    }

    /// `Optional[inner]`
    pub fn optional(&mut self, inner: Idx) -> Idx {
        self.intern(Tag::Optional, inner.raw())
    }

    /// `Future[inner]`
    pub fn future(&mut self, inner: Idx) -> Idx {
        self.intern(Tag::Future, inner.raw())
    }

    /// `RRef[inner]`
    pub fn rref(&mut self, inner: Idx) -> Idx {
        self.intern(Tag::RRef, inner.raw())
    }

    /// `Await[inner]`
    pub fn await_type(&mut self, inner: Idx) -> Idx {
        self.intern(Tag::Await, inner.raw())
    }

    // === Multi-Child Containers ===

    /// `Dict[key, value]`
    pub fn dict(&mut self, key: Idx, value: Idx) -> Idx {
        self.intern_complex(Tag::Dict, &[key.raw(), value.raw()])
    }

    /// `Tuple[elems...]`. The empty tuple is a real type here.
    pub fn tuple(&mut self, elems: &[Idx]) -> Idx {
        self.intern_counted(Tag::Tuple, elems)
    }

    /// `Union[members...]`
    pub fn union(&mut self, members: &[Idx]) -> Idx {
        self.intern_counted(Tag::Union, members)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn intern_counted(&mut self, tag: Tag, elems: &[Idx]) -> Idx {
        // Layout: [count, elem0, elem1, ...]
        let mut extra = Vec::with_capacity(elems.len() + 1);
        extra.push(elems.len() as u32);
        extra.extend(elems.iter().map(|e| e.raw()));
        self.intern_complex(tag, &extra)
    }

    /// Build a generic container from its keyword and arguments.
    ///
    /// # Panics
    ///
    /// Panics if `args` does not satisfy the keyword's arity.
    pub fn container(&mut self, kind: Container, args: &[Idx]) -> Idx {
        assert!(
            kind.arity().accepts(args.len()),
            "`{kind}` takes {} type argument(s), got {}",
            kind.arity(),
            args.len()
        );
        match kind {
            Container::List => self.list(args[0]),
            Container::Optional => self.optional(args[0]),
            Container::Future => self.future(args[0]),
            Container::RRef => self.rref(args[0]),
            Container::Await => self.await_type(args[0]),
            Container::Dict => self.dict(args[0], args[1]),
            Container::Tuple => self.tuple(args),
            Container::Union => self.union(args),
        }
    }

    // === Named Types ===

    /// A named tuple. `name` is the qualified name for declared tuples and
    /// `None` for anonymous ones.
    #[allow(clippy::cast_possible_truncation)]
    pub fn named_tuple<S: AsRef<str>>(&mut self, name: Option<&str>, fields: &[(S, Idx)]) -> Idx {
        // Layout: [name_id, count, field_name0, field_ty0, ...]
        let mut extra = Vec::with_capacity(2 + 2 * fields.len());
        extra.push(name.map_or(NO_NAME, |n| self.intern_name(n)));
        extra.push(fields.len() as u32);
        for (field, ty) in fields {
            extra.push(self.intern_name(field.as_ref()));
            extra.push(ty.raw());
        }
        self.intern_complex(Tag::NamedTuple, &extra)
    }

    /// A torchbind class, by full path.
    pub fn custom_class(&mut self, path: &str) -> Idx {
        let id = self.intern_name(path);
        self.intern(Tag::CustomClass, id)
    }

    /// A script-compiled class known only by its path.
    pub fn script_class(&mut self, path: &str) -> Idx {
        let id = self.intern_name(path);
        self.intern(Tag::ScriptClass, id)
    }
}

impl TypeBuilder for Pool {
    type Type = Idx;

    fn simple(&mut self, name: &str) -> Option<Idx> {
        Pool::simple_type(name)
    }

    fn container(&mut self, kind: Container, args: &[Idx]) -> Idx {
        Pool::container(self, kind, args)
    }

    fn named_tuple(&mut self, name: Option<&str>, fields: &[(String, Idx)]) -> Idx {
        Pool::named_tuple(self, name, fields)
    }

    fn custom_class(&mut self, path: &str) -> Idx {
        Pool::custom_class(self, path)
    }

    fn script_class(&mut self, path: &str) -> Idx {
        Pool::script_class(self, path)
    }
}
