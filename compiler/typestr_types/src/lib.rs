//! Reference type pool for typestr.
//!
//! A [`Pool`] interns every type it builds and hands out 32-bit [`Idx`]
//! handles, so structurally equal types compare equal by index. It
//! implements [`TypeBuilder`](typestr_ir::TypeBuilder), which lets the
//! parser build straight into it, and [`Pool::format_type`] writes a
//! handle back out as a descriptor string the parser accepts.
//!
//! This is one concrete builder, not a type system: it knows the simple
//! type names, the generic containers, named tuples, and class paths, and
//! nothing about what those types mean.

mod idx;
mod pool;
mod tag;

pub use idx::Idx;
pub use pool::Pool;
pub use tag::Tag;
