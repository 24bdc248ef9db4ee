//! Collection codecs for inline-storage vectors
//!
//! When the `smallvec_seq` feature is set, `smallvec::SmallVec<A>` is encoded
//! exactly like `Vec<A::Item>`, under the `small_vec` tag.
//!
//! When the `arrayvec_seq` feature is set, `arrayvec::ArrayVec<T, CAP>` is
//! encoded the same way under the `array_vec` tag. Decoding a count larger
//! than `CAP` fails with [`LengthError::TooLong`] before any element is read.

use super::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "smallvec_seq")] {
        use smallvec::{Array, SmallVec};

        const SMALL_VEC: &str = "small_vec";

        impl<A: Array> Collection for SmallVec<A> {
            type Item = A::Item;

            fn reset(&mut self, _: usize, hint: usize) -> Result<(), LengthError> {
                self.clear();
                self.reserve(hint);
                Ok(())
            }

            fn admit(&mut self, item: A::Item) -> Result<(), LengthError> {
                self.push(item);
                Ok(())
            }
        }

        impl<A: Array> Encode for SmallVec<A>
        where
            A::Item: Encode,
        {
            fn write_to<U: Target>(&self, buf: &mut U) -> usize {
                write_elems(buf, self.len(), self.iter())
            }
        }

        impl<A: Array> Decode for SmallVec<A>
        where
            A::Item: Decode,
        {
            fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
                let mut ret = Self::new();
                parse_elems(&mut ret, p)?;
                Ok(ret)
            }

            fn parse_into<P: Parser>(&mut self, p: &mut P) -> ParseResult<()> {
                parse_elems(self, p)
            }
        }

        impl<A: Array> ToNode for SmallVec<A>
        where
            A::Item: ToNode,
        {
            fn write_node<N: TreeNode>(&self, parent: &mut N) {
                write_elem_nodes(parent, SMALL_VEC, self.len(), self.iter())
            }
        }

        impl<A: Array> FromNode for SmallVec<A>
        where
            A::Item: FromNode,
        {
            fn read_node<N: TreeNode>(parent: &N) -> TreeResult<Self> {
                let mut ret = Self::new();
                read_elem_nodes(&mut ret, parent, SMALL_VEC)?;
                Ok(ret)
            }

            fn read_node_into<N: TreeNode>(&mut self, parent: &N) -> TreeResult<()> {
                read_elem_nodes(self, parent, SMALL_VEC)
            }
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "arrayvec_seq")] {
        use arrayvec::ArrayVec;

        const ARRAY_VEC: &str = "array_vec";

        impl<T, const CAP: usize> Collection for ArrayVec<T, CAP> {
            type Item = T;

            fn reset(&mut self, len: usize, _: usize) -> Result<(), LengthError> {
                self.clear();
                if len > CAP {
                    Err(LengthError::TooLong { limit: CAP, actual: len })
                } else {
                    Ok(())
                }
            }

            fn admit(&mut self, item: T) -> Result<(), LengthError> {
                self.try_push(item).map_err(|_| LengthError::TooLong {
                    limit: CAP,
                    actual: CAP + 1,
                })
            }
        }

        impl<T: Encode, const CAP: usize> Encode for ArrayVec<T, CAP> {
            fn write_to<U: Target>(&self, buf: &mut U) -> usize {
                write_elems(buf, self.len(), self.iter())
            }
        }

        impl<T: Decode, const CAP: usize> Decode for ArrayVec<T, CAP> {
            fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
                let mut ret = Self::new();
                parse_elems(&mut ret, p)?;
                Ok(ret)
            }

            fn parse_into<P: Parser>(&mut self, p: &mut P) -> ParseResult<()> {
                parse_elems(self, p)
            }
        }

        impl<T: ToNode, const CAP: usize> ToNode for ArrayVec<T, CAP> {
            fn write_node<N: TreeNode>(&self, parent: &mut N) {
                write_elem_nodes(parent, ARRAY_VEC, self.len(), self.iter())
            }
        }

        impl<T: FromNode, const CAP: usize> FromNode for ArrayVec<T, CAP> {
            fn read_node<N: TreeNode>(parent: &N) -> TreeResult<Self> {
                let mut ret = Self::new();
                read_elem_nodes(&mut ret, parent, ARRAY_VEC)?;
                Ok(ret)
            }

            fn read_node_into<N: TreeNode>(&mut self, parent: &N) -> TreeResult<()> {
                read_elem_nodes(self, parent, ARRAY_VEC)
            }
        }
    }
}
