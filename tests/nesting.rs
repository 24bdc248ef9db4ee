use std::collections::{BTreeMap, BTreeSet, HashSet, LinkedList};

use proptest::collection::{btree_map, btree_set, hash_set, linked_list, vec};
use proptest::prelude::*;
use twine::tree::{self, TreeOptions};
use twine::{Decode, Encode, EncodeLength, Record};

#[derive(Record, Debug, Default, Clone, PartialEq)]
struct Entry {
    key: String,
    weight: f64,
    flags: BTreeSet<u8>,
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,12}"
}

fn entry() -> impl Strategy<Value = Entry> {
    (text(), -1e6f64..1e6, btree_set(any::<u8>(), 0..4))
        .prop_map(|(key, weight, flags)| Entry { key, weight, flags })
}

fn both_trees() -> [TreeOptions; 2] {
    [
        TreeOptions::default(),
        TreeOptions::default().with_transport(true).with_indent(Some(1)),
    ]
}

proptest! {
    #[test]
    fn three_level_nesting(
        value in btree_map(any::<i32>(), vec(linked_list(any::<i16>(), 0..4), 0..4), 0..6)
    ) {
        let bytes = value.to_bytes();
        prop_assert_eq!(bytes.len(), value.enc_len());
        prop_assert_eq!(BTreeMap::<i32, Vec<LinkedList<i16>>>::decode(bytes), value.clone());
        for opts in both_trees() {
            let doc = tree::to_string(&value, &opts).unwrap();
            let back: BTreeMap<i32, Vec<LinkedList<i16>>> = tree::from_str(&doc, &opts).unwrap();
            prop_assert_eq!(&back, &value);
        }
    }

    #[test]
    fn sequence_order_and_duplicates(value in vec(0u8..4, 0..64)) {
        prop_assert_eq!(Vec::<u8>::decode(value.to_bytes()), value.clone());
        let doc = tree::to_string(&value, &TreeOptions::default()).unwrap();
        prop_assert_eq!(tree::from_str::<Vec<u8>>(&doc, &TreeOptions::default()).unwrap(), value);
    }

    #[test]
    fn records_in_collections(value in btree_map(text(), vec(entry(), 0..3), 0..4)) {
        prop_assert_eq!(BTreeMap::<String, Vec<Entry>>::decode(value.to_bytes()), value.clone());
        for opts in both_trees() {
            let doc = tree::to_string(&value, &opts).unwrap();
            let back: BTreeMap<String, Vec<Entry>> = tree::from_str(&doc, &opts).unwrap();
            prop_assert_eq!(&back, &value);
        }
    }

    #[test]
    fn sets_of_pairs(value in hash_set((any::<u64>(), proptest::char::range(' ', '\u{D7FF}')), 0..8)) {
        prop_assert_eq!(HashSet::<(u64, char)>::decode(value.to_bytes()), value.clone());
        let doc = tree::to_string(&value, &TreeOptions::default()).unwrap();
        prop_assert_eq!(
            tree::from_str::<HashSet<(u64, char)>>(&doc, &TreeOptions::default()).unwrap(),
            value
        );
    }

    #[test]
    fn truncation_never_panics(value in vec(text(), 1..5), cut in 1usize..16) {
        let mut bytes = value.to_bytes();
        let cut = cut.min(bytes.len());
        bytes.truncate(bytes.len() - cut);
        prop_assert!(Vec::<String>::try_decode(bytes).is_err());
    }
}
