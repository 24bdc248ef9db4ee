//! Codecs for sequences, sets and associative collections
//!
//! All collections share one protocol. The binary form is a native-width
//! `usize` element count followed by each element in iteration order. The tree
//! form is a single node, named after the collection type, holding a `size`
//! leaf and one `index_N` child per element, in iteration order.
//!
//! Decoding always starts by clearing the destination and then admits each
//! element as it is read: sequences append it, sets and maps insert it by
//! key. Maps are encoded as sequences of `(key, value)` pairs.
//!
//! The feature-gated submodule `inline` adds the same codecs for
//! `SmallVec` (`smallvec_seq`) and `ArrayVec` (`arrayvec_seq`).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::conv::{target::Target, Decode, Encode};
use crate::error::LengthError;
use crate::parse::{ParseResult, Parser};
use crate::tree::{
    append_child, child, read_leaf, write_leaf, FromNode, ToNode, TreeNode, TreeResult,
};

#[cfg(any(feature = "smallvec_seq", feature = "arrayvec_seq"))]
pub mod inline;

/// Name of the leaf node holding a collection's element count
pub const SIZE: &str = "size";

/// Name of the node wrapping the element at position `ix`
#[must_use]
pub fn index_name(ix: usize) -> String {
    format!("index_{}", ix)
}

/// Destination-side view of a collection, used when decoding it
pub trait Collection: Default {
    /// Owned element type, as read back from either codec
    type Item;

    /// Empties the collection ahead of admitting `len` elements
    ///
    /// `hint` is an upper bound on how much storage may be preallocated, which
    /// is smaller than `len` whenever `len` cannot be trusted.
    ///
    /// # Errors
    ///
    /// Bounded collections return a [`LengthError`] when `len` exceeds their capacity.
    fn reset(&mut self, len: usize, hint: usize) -> Result<(), LengthError>;

    /// Adds a single decoded element
    fn admit(&mut self, item: Self::Item) -> Result<(), LengthError>;
}

/// Writes the element count followed by each element
pub fn write_elems<U, I>(buf: &mut U, len: usize, elems: I) -> usize
where
    U: Target,
    I: IntoIterator,
    I::Item: Encode,
{
    let mut written = len.write_to(buf);
    for elem in elems {
        written += elem.write_to(buf);
    }
    written
}

/// Clears `coll`, then reads an element count and that many elements into it
pub fn parse_elems<C, P>(coll: &mut C, p: &mut P) -> ParseResult<()>
where
    C: Collection,
    C::Item: Decode,
    P: Parser,
{
    let len = p.take_usize()?;
    coll.reset(len, len.min(p.remainder()))?;
    for _ in 0..len {
        coll.admit(C::Item::parse(p)?)?;
    }
    Ok(())
}

/// Appends a `tag` node holding the element count and one indexed child per element
pub fn write_elem_nodes<N, I>(parent: &mut N, tag: &str, len: usize, elems: I)
where
    N: TreeNode,
    I: IntoIterator,
    I::Item: ToNode,
{
    let node = append_child(parent, tag);
    write_leaf(node, SIZE, &len);
    for (ix, elem) in elems.into_iter().enumerate() {
        elem.write_node(append_child(node, &index_name(ix)));
    }
}

/// Clears `coll`, then refills it from the `tag` child of `parent`
///
/// Every position below the recorded `size` must be present; a missing
/// `index_N` child is reported rather than skipped.
pub fn read_elem_nodes<C, N>(coll: &mut C, parent: &N, tag: &str) -> TreeResult<()>
where
    C: Collection,
    C::Item: FromNode,
    N: TreeNode,
{
    let node = child(parent, tag)?;
    let len: usize = read_leaf(node, SIZE)?;
    coll.reset(len, 0)?;
    for ix in 0..len {
        let elem = child(node, &index_name(ix))?;
        coll.admit(C::Item::read_node(elem)?)?;
    }
    Ok(())
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn reset(&mut self, _: usize, hint: usize) -> Result<(), LengthError> {
        self.clear();
        self.reserve(hint);
        Ok(())
    }

    fn admit(&mut self, item: T) -> Result<(), LengthError> {
        self.push(item);
        Ok(())
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn reset(&mut self, _: usize, hint: usize) -> Result<(), LengthError> {
        self.clear();
        self.reserve(hint);
        Ok(())
    }

    fn admit(&mut self, item: T) -> Result<(), LengthError> {
        self.push_back(item);
        Ok(())
    }
}

impl<T> Collection for LinkedList<T> {
    type Item = T;

    fn reset(&mut self, _: usize, _: usize) -> Result<(), LengthError> {
        self.clear();
        Ok(())
    }

    fn admit(&mut self, item: T) -> Result<(), LengthError> {
        self.push_back(item);
        Ok(())
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Item = T;

    fn reset(&mut self, _: usize, _: usize) -> Result<(), LengthError> {
        self.clear();
        Ok(())
    }

    fn admit(&mut self, item: T) -> Result<(), LengthError> {
        self.insert(item);
        Ok(())
    }
}

impl<T, S> Collection for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = T;

    fn reset(&mut self, _: usize, hint: usize) -> Result<(), LengthError> {
        self.clear();
        self.reserve(hint);
        Ok(())
    }

    fn admit(&mut self, item: T) -> Result<(), LengthError> {
        self.insert(item);
        Ok(())
    }
}

impl<K: Ord, V> Collection for BTreeMap<K, V> {
    type Item = (K, V);

    fn reset(&mut self, _: usize, _: usize) -> Result<(), LengthError> {
        self.clear();
        Ok(())
    }

    fn admit(&mut self, (k, v): (K, V)) -> Result<(), LengthError> {
        self.insert(k, v);
        Ok(())
    }
}

impl<K, V, S> Collection for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Item = (K, V);

    fn reset(&mut self, _: usize, hint: usize) -> Result<(), LengthError> {
        self.clear();
        self.reserve(hint);
        Ok(())
    }

    fn admit(&mut self, (k, v): (K, V)) -> Result<(), LengthError> {
        self.insert(k, v);
        Ok(())
    }
}

macro_rules! collection_codecs {
    ($tag:literal, [$($gen:ident),+] $ty:ty; elems: [$($elem:ident),+]; decode: [$($db:tt)*]) => {
        impl<$($gen),+> Encode for $ty
        where
            $($elem: Encode,)+
        {
            fn write_to<U: Target>(&self, buf: &mut U) -> usize {
                write_elems(buf, self.len(), self.iter())
            }
        }

        impl<$($gen),+> Decode for $ty
        where
            $($elem: Decode,)+
            $($db)*
        {
            fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
                let mut ret = Self::default();
                parse_elems(&mut ret, p)?;
                Ok(ret)
            }

            fn parse_into<P: Parser>(&mut self, p: &mut P) -> ParseResult<()> {
                parse_elems(self, p)
            }
        }

        impl<$($gen),+> ToNode for $ty
        where
            $($elem: ToNode,)+
        {
            fn write_node<N: TreeNode>(&self, parent: &mut N) {
                write_elem_nodes(parent, $tag, self.len(), self.iter())
            }
        }

        impl<$($gen),+> FromNode for $ty
        where
            $($elem: FromNode,)+
            $($db)*
        {
            fn read_node<N: TreeNode>(parent: &N) -> TreeResult<Self> {
                let mut ret = Self::default();
                read_elem_nodes(&mut ret, parent, $tag)?;
                Ok(ret)
            }

            fn read_node_into<N: TreeNode>(&mut self, parent: &N) -> TreeResult<()> {
                read_elem_nodes(self, parent, $tag)
            }
        }
    };
}

collection_codecs!("vec", [T] Vec<T>; elems: [T]; decode: []);
collection_codecs!("vec_deque", [T] VecDeque<T>; elems: [T]; decode: []);
collection_codecs!("list", [T] LinkedList<T>; elems: [T]; decode: []);
collection_codecs!("btree_set", [T] BTreeSet<T>; elems: [T]; decode: [T: Ord]);
collection_codecs!("hash_set", [T, S] HashSet<T, S>; elems: [T]; decode: [T: Eq + Hash, S: BuildHasher + Default]);
collection_codecs!("btree_map", [K, V] BTreeMap<K, V>; elems: [K, V]; decode: [K: Ord]);
collection_codecs!("hash_map", [K, V, S] HashMap<K, V, S>; elems: [K, V]; decode: [K: Eq + Hash, S: BuildHasher + Default]);
