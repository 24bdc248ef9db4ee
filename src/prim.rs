//! Codecs for primitive leaves
//!
//! Numeric types are written in their native width and byte order, exactly as
//! they sit in memory on the running platform. `bool` is a single `0`/`1` byte,
//! `char` is its `u32` scalar value and `()` occupies no space at all.
//!
//! In the tree codec, every primitive except `()` is a single `value` leaf
//! whose text is its `Display` form, parsed back with `FromStr`.

use crate::conv::{target::Target, Decode, Encode};
use crate::parse::{ParseResult, Parser};
use crate::tree::{read_leaf, write_leaf, FromNode, ToNode, TreeNode, TreeResult};

/// Name of the leaf node holding a primitive value
pub const VALUE: &str = "value";

macro_rules! impl_native {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Encode for $t {
                #[inline]
                fn write_to<U: Target>(&self, buf: &mut U) -> usize {
                    buf.push_many(self.to_ne_bytes())
                }
            }

            impl Decode for $t {
                #[inline]
                fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
                    p.consume_arr().map(<$t>::from_ne_bytes)
                }
            }

            impl_leaf!($t);
        )+
    };
}

macro_rules! impl_leaf {
    ($t:ty) => {
        impl ToNode for $t {
            #[inline]
            fn write_node<N: TreeNode>(&self, parent: &mut N) {
                write_leaf(parent, VALUE, self)
            }
        }

        impl FromNode for $t {
            #[inline]
            fn read_node<N: TreeNode>(parent: &N) -> TreeResult<Self> {
                read_leaf(parent, VALUE)
            }
        }
    };
}

impl_native!(u8, u16, u32, u64, u128, usize);
impl_native!(i8, i16, i32, i64, i128, isize);
impl_native!(f32, f64);

impl Encode for bool {
    #[inline]
    fn write_to<U: Target>(&self, buf: &mut U) -> usize {
        buf.push_one(u8::from(*self))
    }
}

impl Decode for bool {
    #[inline]
    fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
        p.take_bool()
    }
}

impl_leaf!(bool);

impl Encode for char {
    #[inline]
    fn write_to<U: Target>(&self, buf: &mut U) -> usize {
        buf.push_many(u32::from(*self).to_ne_bytes())
    }
}

impl Decode for char {
    #[inline]
    fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
        p.take_char()
    }
}

impl_leaf!(char);

impl Encode for () {
    #[inline(always)]
    fn write_to<U: Target>(&self, _: &mut U) -> usize {
        0
    }

    #[inline(always)]
    fn write_to_vec(&self, _: &mut Vec<u8>) {}

    #[inline(always)]
    fn to_bytes(&self) -> Vec<u8> {
        Vec::new()
    }
}

impl Decode for () {
    #[inline]
    fn parse<P: Parser>(_: &mut P) -> ParseResult<()> {
        Ok(())
    }
}

impl ToNode for () {
    #[inline(always)]
    fn write_node<N: TreeNode>(&self, _: &mut N) {}
}

impl FromNode for () {
    #[inline(always)]
    fn read_node<N: TreeNode>(_: &N) -> TreeResult<Self> {
        Ok(())
    }
}
