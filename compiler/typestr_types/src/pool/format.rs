//! Type-to-descriptor encoding.
//!
//! The output is the canonical spelling the parser reads back: `", "`
//! between arguments, no other whitespace. Declared named tuples are
//! written out in full (`__torch__.m.P[NamedTuple, [[x, int]]]`) so a
//! string is self-contained and does not depend on earlier declarations.

use typestr_stack::ensure_sufficient_stack;

use crate::{Idx, Pool, Tag};

impl Pool {
    /// Encode a type as a descriptor string.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Encode a type into an existing buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        ensure_sufficient_stack(|| self.format_inner(idx, buf));
    }

    fn format_inner(&self, idx: Idx, buf: &mut String) {
        let tag = self.tag(idx);
        match tag {
            Tag::Int
            | Tag::Float
            | Tag::Bool
            | Tag::Str
            | Tag::Complex
            | Tag::Number
            | Tag::Tensor
            | Tag::NoneType
            | Tag::Any
            | Tag::Device
            | Tag::Stream
            | Tag::Storage
            | Tag::Generator
            | Tag::Layout
            | Tag::ScalarType
            | Tag::MemoryFormat
            | Tag::QScheme
            | Tag::Capsule => buf.push_str(tag.name()),

            Tag::List
            | Tag::Optional
            | Tag::Future
            | Tag::RRef
            | Tag::Await
            | Tag::Dict
            | Tag::Tuple
            | Tag::Union => {
                buf.push_str(tag.name());
                buf.push('[');
                for (i, arg) in self.container_args(idx).into_iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(arg, buf);
                }
                buf.push(']');
            }

            Tag::NamedTuple => self.format_named_tuple(idx, buf),

            Tag::CustomClass | Tag::ScriptClass => buf.push_str(self.class_path(idx)),
        }
    }

    fn format_named_tuple(&self, idx: Idx, buf: &mut String) {
        let fields = self.named_tuple_fields(idx);
        match self.named_tuple_name(idx) {
            None => {
                buf.push_str("NamedTuple[");
                for (i, (name, ty)) in fields.into_iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    buf.push_str(name);
                    buf.push_str(": ");
                    self.format_type_into(ty, buf);
                }
                buf.push(']');
            }
            Some(qualified) => {
                buf.push_str(qualified);
                buf.push_str("[NamedTuple, [");
                for (i, (name, ty)) in fields.into_iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    buf.push('[');
                    buf.push_str(name);
                    buf.push_str(", ");
                    self.format_type_into(ty, buf);
                    buf.push(']');
                }
                buf.push_str("]]");
            }
        }
    }
}
