//! Parser for type descriptor strings.
//!
//! Model exports store type information as compact strings such as
//! `List[int]`, `Dict[str, Tensor]`, `__torch__.torch.classes.ns.Foo`, or
//! `__torch__.m.Point[NamedTuple, [[x, int], [y, int]]]`. This crate turns
//! them back into type objects through a caller-supplied
//! [`TypeBuilder`](typestr_ir::TypeBuilder), and records which type names
//! each descriptor mentions so a consumer can check it has them all.
//!
//! ```text
//! let mut parser = TypeParser::new(&mut pool);
//! let ty = parser.parse("Dict[str, List[Tensor]]")?;
//! parser.contained_types(); // {"str", "Tensor"}
//! ```

mod cache;
mod config;
mod error;
mod expected;
mod parser;

pub use cache::{ContainedTypes, Parsed, TypeCache};
pub use config::ParserConfig;
pub use error::{BatchError, ParseError, ParseErrorKind};
pub use expected::ExpectedKind;
pub use parser::TypeParser;

use typestr_ir::TypeBuilder;

/// Parse a single descriptor with a throwaway parser.
pub fn parse_type<B: TypeBuilder>(builder: B, source: &str) -> Result<B::Type, ParseError> {
    TypeParser::new(builder).parse(source)
}

/// Parse a batch of descriptors with one shared parser.
///
/// Later descriptors may refer to named tuples declared by earlier ones.
pub fn parse_types<B, S>(builder: B, sources: &[S]) -> Result<Vec<B::Type>, BatchError>
where
    B: TypeBuilder,
    S: AsRef<str>,
{
    TypeParser::new(builder).parse_list(sources)
}
