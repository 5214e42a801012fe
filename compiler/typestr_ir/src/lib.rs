//! Shared vocabulary for type descriptor parsing.
//!
//! - [`Span`]: byte ranges into a descriptor string
//! - [`grammar`]: the closed keyword sets and path recognizers
//! - [`TypeBuilder`]: the capability the parser uses to build types

mod builder;
pub mod grammar;
mod span;

pub use builder::TypeBuilder;
pub use grammar::{Arity, Category, Container};
pub use span::Span;
