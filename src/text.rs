//! Codecs for `String`
//!
//! Binary form is a native-width `usize` byte count followed by the raw UTF-8
//! bytes. Tree form is a single `string` leaf holding the text verbatim.

use crate::conv::{target::Target, Decode, Encode};
use crate::parse::{ParseResult, Parser};
use crate::tree::{child, write_leaf, FromNode, ToNode, TreeNode, TreeResult};

/// Name of the leaf node holding a string
pub const STRING: &str = "string";

impl Encode for str {
    fn write_to<U: Target>(&self, buf: &mut U) -> usize {
        buf.anticipate(std::mem::size_of::<usize>() + self.len());
        self.len().write_to(buf) + buf.push_all(self.as_bytes())
    }
}

impl Encode for String {
    #[inline]
    fn write_to<U: Target>(&self, buf: &mut U) -> usize {
        self.as_str().write_to(buf)
    }
}

impl Decode for String {
    fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
        let len = p.take_usize()?;
        let bytes = p.take_dynamic(len)?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl ToNode for str {
    fn write_node<N: TreeNode>(&self, parent: &mut N) {
        write_leaf(parent, STRING, self)
    }
}

impl ToNode for String {
    #[inline]
    fn write_node<N: TreeNode>(&self, parent: &mut N) {
        self.as_str().write_node(parent)
    }
}

impl FromNode for String {
    fn read_node<N: TreeNode>(parent: &N) -> TreeResult<Self> {
        Ok(child(parent, STRING)?.text().unwrap_or("").to_owned())
    }
}
