//! Codecs for two-element tuples
//!
//! Pairs are also the element type of the associative collections, whose
//! entries are written as `(&K, &V)` and read back as `(K, V)`.

use crate::conv::{target::Target, Decode, Encode};
use crate::parse::{ParseResult, Parser};
use crate::tree::{append_child, child, FromNode, ToNode, TreeNode, TreeResult};

pub const PAIR: &str = "pair";
pub const FIRST: &str = "first";
pub const SECOND: &str = "second";

impl<A: Encode, B: Encode> Encode for (A, B) {
    #[inline]
    fn write_to<U: Target>(&self, buf: &mut U) -> usize {
        self.0.write_to(buf) + self.1.write_to(buf)
    }
}

impl<A: Decode, B: Decode> Decode for (A, B) {
    #[inline]
    fn parse<P: Parser>(p: &mut P) -> ParseResult<Self> {
        let a = A::parse(p)?;
        let b = B::parse(p)?;
        Ok((a, b))
    }
}

impl<A: ToNode, B: ToNode> ToNode for (A, B) {
    fn write_node<N: TreeNode>(&self, parent: &mut N) {
        let node = append_child(parent, PAIR);
        self.0.write_node(append_child(node, FIRST));
        self.1.write_node(append_child(node, SECOND));
    }
}

impl<A: FromNode, B: FromNode> FromNode for (A, B) {
    fn read_node<N: TreeNode>(parent: &N) -> TreeResult<Self> {
        let node = child(parent, PAIR)?;
        let a = A::read_node(child(node, FIRST)?)?;
        let b = B::read_node(child(node, SECOND)?)?;
        Ok((a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::Element;
    use crate::tree::TreeError;

    #[test]
    fn halves_back_to_back() {
        let pair = (1u8, String::from("x"));
        let mut expected = vec![1u8];
        expected.extend(String::from("x").to_bytes());
        assert_eq!(pair.to_bytes(), expected);
        assert_eq!(<(u8, String)>::decode(expected), pair);
    }

    #[test]
    fn borrowed_pair_matches_owned() {
        let (k, v) = (3u32, vec![1i8, -1]);
        assert_eq!((&k, &v).to_bytes(), (k, v.clone()).to_bytes());
    }

    #[test]
    fn tree_shape() {
        let mut root = Element::new("root");
        (7u16, String::from("seven")).write_node(&mut root);
        let pair = root.child(PAIR).unwrap();
        assert_eq!(pair.children()[0].name(), FIRST);
        assert_eq!(pair.children()[1].name(), SECOND);
        assert_eq!(
            <(u16, String)>::read_node(&root).unwrap(),
            (7, String::from("seven"))
        );
    }

    #[test]
    fn missing_second() {
        let mut root = Element::new("root");
        let pair = root.push(Element::new(PAIR));
        1u8.write_node(pair.push(Element::new(FIRST)));
        assert_eq!(
            <(u8, u8)>::read_node(&root),
            Err(TreeError::MissingNode {
                parent: PAIR.to_owned(),
                name: SECOND.to_owned()
            })
        );
    }
}
