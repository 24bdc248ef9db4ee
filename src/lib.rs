//! Type-directed serialization into native binary streams and document trees
//!
//! # Overview
//!
//! `twine` encodes arbitrarily nested values into one of two interchangeable
//! representations, and decodes them back. The shape of each encoding is
//! determined entirely by the static type of the value: there is no runtime
//! type information, no schema and no tagging. Each supported type knows how
//! to write itself, and composite types simply recurse into their parts.
//!
//! * The binary codec ([`Encode`] and [`Decode`]) flattens a value into a
//!   compact byte stream using the native widths and byte order of the running
//!   platform, with `usize` length prefixes for text and collections.
//! * The tree codec ([`ToNode`] and [`FromNode`]) builds a hierarchy of named
//!   nodes, which is rendered as XML text and optionally wrapped in base64 (see
//!   [`transport`]) so it can travel as a single opaque string.
//!
//! Supported out of the box are all primitive integers and floats, `bool`,
//! `char`, `()`, `String`, two-element tuples, and the standard sequence, set
//! and map collections. User-defined structs opt in by declaring their fields
//! once, through `#[derive(Record)]` or [`register_fields!`].
//!
//! ```
//! use std::collections::BTreeMap;
//! use twine::tree::{self, TreeOptions};
//! use twine::{Decode, Encode};
//!
//! let m = BTreeMap::from([(1u32, "one".to_owned()), (2, "two".to_owned())]);
//!
//! assert_eq!(BTreeMap::<u32, String>::decode(m.to_bytes()), m);
//!
//! let opts = TreeOptions::default().with_transport(true);
//! let text = tree::to_string(&m, &opts).unwrap();
//! assert_eq!(tree::from_str::<BTreeMap<u32, String>>(&text, &opts).unwrap(), m);
//! ```
//!
//! # Layout
//!
//! * [`conv`] and [`parse`] hold the binary codec traits and the byte sinks and
//!   sources they run over; [`binary`] holds its file entry points.
//! * [`tree`] holds the tree codec traits and its text and file entry points;
//!   [`doc`] holds the in-memory document and its XML form.
//! * [`prim`], [`text`], [`pair`] and [`seq`] implement both codecs for the
//!   built-in types; [`record`] does so for user-declared aggregates.

extern crate record_derive;
extern crate self as twine;

pub mod binary;
pub mod conv;
pub mod doc;
pub mod error;
pub mod pair;
pub mod parse;
pub mod prelude;
pub mod prim;
pub mod record;
pub mod seq;
pub mod text;
pub mod transport;
pub mod tree;

pub use crate::conv::{target::ByteCounter, target::Target, Decode, DecodeError, Encode, EncodeLength};
pub use crate::doc::Element;
pub use crate::error::{Error, LengthError, Result};
pub use crate::parse::{
    byteparser::ByteParser, error::ParseError, sliceparser::SliceParser, ParseResult, Parser,
    TryIntoParser,
};
pub use crate::record::{Codec, Record};
pub use crate::tree::{FromNode, ToNode, TreeError, TreeNode, TreeOptions};

pub use ::record_derive::Record;
