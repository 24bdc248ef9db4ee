use std::collections::BTreeMap;

use tempfile::tempdir;
use twine::tree::{self, TreeOptions};
use twine::{binary, Error, Record, TreeError};

#[derive(Record, Debug, Default, Clone, PartialEq)]
struct Person {
    name: String,
    age: i32,
    scores: Vec<i32>,
}

fn alice() -> Person {
    Person {
        name: "Alice".to_owned(),
        age: 18,
        scores: vec![90, 95, 100],
    }
}

fn numbers() -> BTreeMap<i32, String> {
    BTreeMap::from([
        (1, "one".to_owned()),
        (2, "two".to_owned()),
        (3, "three".to_owned()),
    ])
}

#[test]
fn binary_int_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("int.bin");
    binary::write_file(&123i32, &path).unwrap();
    assert_eq!(
        std::fs::read(&path).unwrap(),
        123i32.to_ne_bytes().to_vec()
    );
    let mut b = 0i32;
    binary::read_file_into(&mut b, &path).unwrap();
    assert_eq!(b, 123);
    assert_eq!(binary::read_file::<i32, _>(&path).unwrap(), 123);
}

#[test]
fn tree_map_without_transport() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.xml");
    let opts = TreeOptions::default();
    tree::write_file(&numbers(), &path, &opts).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("<serialization><btree_map><size>3</size>"));
    assert!(text.contains("<string>three</string>"));

    let back: BTreeMap<i32, String> = tree::read_file(&path, &opts).unwrap();
    assert_eq!(back, numbers());
}

#[test]
fn tree_map_with_transport() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("map.txt");
    let wrapped = TreeOptions::default().with_transport(true);
    tree::write_file(&numbers(), &path, &wrapped).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains('<'));
    let xml = String::from_utf8(twine::transport::decode(&text)).unwrap();
    assert!(xml.contains("<btree_map>"));

    let mut back = BTreeMap::from([(9, "nine".to_owned())]);
    tree::read_file_into(&mut back, &path, &wrapped).unwrap();
    assert_eq!(back, numbers());

    let plain = TreeOptions::default();
    match tree::read_file::<BTreeMap<i32, String>, _>(&path, &plain) {
        Err(Error::Tree(TreeError::Syntax(_))) => {}
        other => panic!("transport text decoded without transport: {:?}", other),
    }
}

#[test]
fn aggregate_through_both_codecs() {
    let dir = tempdir().unwrap();
    let a = alice();

    binary::write_file(&a, dir.path().join("person.bin")).unwrap();
    let back: Person = binary::read_file(dir.path().join("person.bin")).unwrap();
    assert_eq!(back, a);

    let opts = TreeOptions::default().with_indent(Some(4));
    tree::write_file(&a, dir.path().join("person.xml"), &opts).unwrap();
    let text = std::fs::read_to_string(dir.path().join("person.xml")).unwrap();
    assert!(text.contains("\n    <name>\n        <string>Alice</string>\n    </name>"));
    let back: Person = tree::read_file(dir.path().join("person.xml"), &opts).unwrap();
    assert_eq!(back, a);

    let wrapped = TreeOptions::default().with_transport(true);
    tree::write_file(&a, dir.path().join("person.txt"), &wrapped).unwrap();
    let back: Person = tree::read_file(dir.path().join("person.txt"), &wrapped).unwrap();
    assert_eq!(back, a);
}

#[test]
fn map_of_aggregate_sequences() {
    let dir = tempdir().unwrap();
    let bob = Person {
        name: "Bob".to_owned(),
        age: 19,
        scores: vec![],
    };
    let roster = BTreeMap::from([(1i32, vec![alice(), bob.clone()]), (2, vec![bob])]);

    binary::write_file(&roster, dir.path().join("roster.bin")).unwrap();
    let back: BTreeMap<i32, Vec<Person>> =
        binary::read_file(dir.path().join("roster.bin")).unwrap();
    assert_eq!(back, roster);

    for opts in [
        TreeOptions::default(),
        TreeOptions::default().with_transport(true),
    ] {
        tree::write_file(&roster, dir.path().join("roster.doc"), &opts).unwrap();
        let back: BTreeMap<i32, Vec<Person>> =
            tree::read_file(dir.path().join("roster.doc"), &opts).unwrap();
        assert_eq!(back, roster);
    }
}

#[test]
fn binary_truncated_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.bin");
    binary::write_file(&alice(), &path).unwrap();
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 2);
    std::fs::write(&path, bytes).unwrap();

    match binary::read_file::<Person, _>(&path) {
        Err(Error::Decode(twine::DecodeError::Parse(twine::ParseError::Exhausted { .. }))) => {}
        other => panic!("expected exhaustion, got {:?}", other),
    }
}

#[test]
fn missing_files() {
    let dir = tempdir().unwrap();
    let absent = dir.path().join("absent.xml");
    assert!(matches!(
        tree::read_file::<u8, _>(&absent, &TreeOptions::default()),
        Err(Error::Open { .. })
    ));
    let mut v = vec![1u8];
    assert!(matches!(
        binary::read_file_into(&mut v, &absent),
        Err(Error::Open { .. })
    ));
    assert_eq!(v, vec![1]);
}

#[test]
fn custom_root_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("root.xml");
    let opts = TreeOptions::default().with_root("payload");
    tree::write_file(&7u64, &path, &opts).unwrap();
    assert!(std::fs::read_to_string(&path)
        .unwrap()
        .contains("<payload><value>7</value></payload>"));
    assert_eq!(tree::read_file::<u64, _>(&path, &opts).unwrap(), 7);
    assert!(matches!(
        tree::read_file::<u64, _>(&path, &TreeOptions::default()),
        Err(Error::Tree(TreeError::MissingNode { .. }))
    ));
}
