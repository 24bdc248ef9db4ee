//! User-declared aggregate types
//!
//! An aggregate participates in both codecs by listing its fields exactly once,
//! through the [`Record`] trait. Each codec then walks that list with its own
//! visitor: the binary codec writes or reads every field in declaration order
//! with nothing in between, and the tree codec gives every field a child node
//! named after it and nests the field's own encoding inside.
//!
//! `Record` is rarely implemented by hand. The [`Record`](macro@crate::Record)
//! derive macro handles named, tuple and unit structs (including generic ones),
//! and [`register_fields!`](crate::register_fields) covers non-generic structs
//! with named fields without a proc-macro. Both also emit the `Encode`,
//! `Decode`, `ToNode` and `FromNode` impls, which forward to the functions in
//! this module.
//!
//! ```
//! use twine::Record;
//!
//! #[derive(Record, Debug, Default, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     scores: Vec<i32>,
//! }
//!
//! let p = Person { name: "Ada".into(), age: 36, scores: vec![3, 1, 4] };
//! let bytes = twine::Encode::to_bytes(&p);
//! assert_eq!(<Person as twine::Decode>::decode(bytes), p);
//! assert_eq!(<Person as twine::record::Record>::FIELDS, ["name", "age", "scores"]);
//! ```

use crate::conv::{target::Target, Decode, Encode};
use crate::parse::{ParseError, ParseResult, Parser};
use crate::tree::{append_child, child, FromNode, ToNode, TreeError, TreeNode, TreeResult};

/// Bundle of every codec trait, required of each field of a [`Record`]
pub trait Codec: Encode + Decode + ToNode + FromNode {}

impl<T> Codec for T where T: Encode + Decode + ToNode + FromNode {}

/// Aggregate type with a fixed, ordered list of named fields
pub trait Record {
    /// Field names, in declaration order
    const FIELDS: &'static [&'static str];

    /// Calls `visitor.field` on each field, in declaration order
    fn visit<V: FieldVisitor>(&self, visitor: &mut V);

    /// Calls `visitor.field` on each field, in declaration order, stopping at
    /// the first error
    fn visit_mut<V: FieldVisitorMut>(&mut self, visitor: &mut V) -> Result<(), V::Error>;
}

/// Read-only traversal over the fields of a [`Record`]
pub trait FieldVisitor {
    fn field<T: Codec>(&mut self, name: &'static str, value: &T);
}

/// Mutating traversal over the fields of a [`Record`]
pub trait FieldVisitorMut {
    type Error;

    fn field<T: Codec>(&mut self, name: &'static str, value: &mut T) -> Result<(), Self::Error>;
}

struct BinaryWriter<'a, U> {
    buf: &'a mut U,
    written: usize,
}

impl<U: Target> FieldVisitor for BinaryWriter<'_, U> {
    fn field<T: Codec>(&mut self, _: &'static str, value: &T) {
        self.written += value.write_to(self.buf);
    }
}

struct BinaryReader<'a, P> {
    p: &'a mut P,
}

impl<P: Parser> FieldVisitorMut for BinaryReader<'_, P> {
    type Error = ParseError;

    fn field<T: Codec>(&mut self, _: &'static str, value: &mut T) -> ParseResult<()> {
        value.parse_into(self.p)
    }
}

struct NodeWriter<'a, N> {
    parent: &'a mut N,
}

impl<N: TreeNode> FieldVisitor for NodeWriter<'_, N> {
    fn field<T: Codec>(&mut self, name: &'static str, value: &T) {
        value.write_node(append_child(self.parent, name));
    }
}

struct NodeReader<'a, N> {
    parent: &'a N,
}

impl<N: TreeNode> FieldVisitorMut for NodeReader<'_, N> {
    type Error = TreeError;

    fn field<T: Codec>(&mut self, name: &'static str, value: &mut T) -> TreeResult<()> {
        value.read_node_into(child(self.parent, name)?)
    }
}

/// Writes every field of `rec` in declaration order, returning the byte count
pub fn write_record<R: Record + ?Sized, U: Target>(rec: &R, buf: &mut U) -> usize {
    let mut w = BinaryWriter { buf, written: 0 };
    rec.visit(&mut w);
    w.written
}

/// Reads every field of a fresh `R::default()` in declaration order
pub fn parse_record<R: Record + Default, P: Parser>(p: &mut P) -> ParseResult<R> {
    let mut rec = R::default();
    parse_record_into(&mut rec, p)?;
    Ok(rec)
}

/// Reads every field of `rec` in place, in declaration order
pub fn parse_record_into<R: Record + ?Sized, P: Parser>(rec: &mut R, p: &mut P) -> ParseResult<()> {
    rec.visit_mut(&mut BinaryReader { p })
}

/// Appends one child per field under `parent`, each named after its field
pub fn write_record_node<R: Record + ?Sized, N: TreeNode>(rec: &R, parent: &mut N) {
    rec.visit(&mut NodeWriter { parent });
}

/// Reads a fresh `R::default()` back from the per-field children of `parent`
pub fn read_record_node<R: Record + Default, N: TreeNode>(parent: &N) -> TreeResult<R> {
    let mut rec = R::default();
    read_record_node_into(&mut rec, parent)?;
    Ok(rec)
}

/// Reads `rec` in place from the per-field children of `parent`
pub fn read_record_node_into<R: Record + ?Sized, N: TreeNode>(
    rec: &mut R,
    parent: &N,
) -> TreeResult<()> {
    rec.visit_mut(&mut NodeReader { parent })
}

/// Implements [`Record`] and all four codec traits for a non-generic struct
/// with named fields
///
/// Field names are listed once, in the order they should be encoded. Every
/// listed field must implement [`Codec`], and the struct must implement
/// `Default`.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// pub struct Point {
///     x: i32,
///     y: i32,
///     label: String,
/// }
///
/// twine::register_fields!(Point { x, y, label });
///
/// let p = Point { x: 1, y: -2, label: "a".into() };
/// let text = twine::tree::to_string(&p, &Default::default()).unwrap();
/// assert_eq!(twine::tree::from_str::<Point>(&text, &Default::default()).unwrap(), p);
/// ```
#[macro_export]
macro_rules! register_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::record::Record for $ty {
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            #[allow(unused_variables)]
            fn visit<V: $crate::record::FieldVisitor>(&self, visitor: &mut V) {
                $( visitor.field(stringify!($field), &self.$field); )*
            }

            #[allow(unused_variables)]
            fn visit_mut<V: $crate::record::FieldVisitorMut>(
                &mut self,
                visitor: &mut V,
            ) -> ::core::result::Result<(), V::Error> {
                $( visitor.field(stringify!($field), &mut self.$field)?; )*
                ::core::result::Result::Ok(())
            }
        }

        $crate::record_codecs!($ty);
    };
}

/// Implements the four codec traits for a non-generic type that already
/// implements [`Record`] and `Default`, by forwarding to this module's functions
#[macro_export]
macro_rules! record_codecs {
    ($ty:ty) => {
        impl $crate::conv::Encode for $ty {
            fn write_to<U: $crate::conv::target::Target>(&self, buf: &mut U) -> usize {
                $crate::record::write_record(self, buf)
            }
        }

        impl $crate::conv::Decode for $ty {
            fn parse<P: $crate::parse::Parser>(p: &mut P) -> $crate::parse::ParseResult<Self> {
                $crate::record::parse_record(p)
            }

            fn parse_into<P: $crate::parse::Parser>(
                &mut self,
                p: &mut P,
            ) -> $crate::parse::ParseResult<()> {
                $crate::record::parse_record_into(self, p)
            }
        }

        impl $crate::tree::ToNode for $ty {
            fn write_node<N: $crate::tree::TreeNode>(&self, parent: &mut N) {
                $crate::record::write_record_node(self, parent)
            }
        }

        impl $crate::tree::FromNode for $ty {
            fn read_node<N: $crate::tree::TreeNode>(
                parent: &N,
            ) -> $crate::tree::TreeResult<Self> {
                $crate::record::read_record_node(parent)
            }

            fn read_node_into<N: $crate::tree::TreeNode>(
                &mut self,
                parent: &N,
            ) -> $crate::tree::TreeResult<()> {
                $crate::record::read_record_node_into(self, parent)
            }
        }
    };
}
