use std::collections::{BTreeMap, BTreeSet, LinkedList};
use std::fmt::Debug;
use std::path::Path;

use twine::tree::TreeOptions;
use twine::{binary, tree, Codec, Record};

#[derive(Record, Debug, Default, Clone, PartialEq)]
struct Person {
    name: String,
    age: i32,
    scores: Vec<i32>,
}

fn check<T>(label: &str, dir: &Path, value: &T) -> twine::Result<()>
where
    T: Codec + Default + PartialEq + Debug,
{
    let stem: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let mut back = T::default();

    binary::write_file(value, dir.join(format!("{stem}.bin")))?;
    binary::read_file_into(&mut back, dir.join(format!("{stem}.bin")))?;
    assert_eq!(&back, value);
    println!("bin::test<{label}> passed.");

    let plain = TreeOptions::default().with_indent(Some(2));
    tree::write_file(value, dir.join(format!("{stem}.xml")), &plain)?;
    tree::read_file_into(&mut back, dir.join(format!("{stem}.xml")), &plain)?;
    assert_eq!(&back, value);
    println!("xml::test<{label}> passed.");

    let wrapped = TreeOptions::default().with_transport(true);
    tree::write_file(value, dir.join(format!("{stem}.txt")), &wrapped)?;
    tree::read_file_into(&mut back, dir.join(format!("{stem}.txt")), &wrapped)?;
    assert_eq!(&back, value);
    println!("xml::test<{label}> (with base64) passed.");

    Ok(())
}

fn main() -> twine::Result<()> {
    let dir = std::env::temp_dir().join("twine-demo");
    std::fs::create_dir_all(&dir)?;

    check("int", &dir, &123i32)?;
    check("string", &dir, &String::from("hello"))?;
    check("double", &dir, &3.1415926f64)?;

    check("vec<i32>", &dir, &vec![1i32, 1, 2, 3, 5, 8])?;
    check("btree_set<i32>", &dir, &BTreeSet::from([6i32, 7, 8, 9, 10]))?;
    let numbers = BTreeMap::from([
        (1i32, "one".to_owned()),
        (2, "two".to_owned()),
        (3, "three".to_owned()),
    ]);
    check("btree_map<i32, string>", &dir, &numbers)?;
    check("list<i32>", &dir, &LinkedList::from([1i32, 2, 3, 4, 5]))?;

    let nested = BTreeMap::from([
        (1i32, vec![1i32, 2, 3]),
        (2, vec![4, 5, 6]),
        (3, vec![7, 8, 9]),
    ]);
    check("btree_map<i32, vec<i32>>", &dir, &nested)?;
    let lists = BTreeSet::from([
        LinkedList::from([1i32, 2, 3]),
        LinkedList::from([4, 5, 6]),
        LinkedList::from([7, 8, 9]),
    ]);
    check("btree_set<list<i32>>", &dir, &lists)?;

    let alice = Person {
        name: "Alice".to_owned(),
        age: 18,
        scores: vec![90, 95, 100],
    };
    check("person", &dir, &alice)?;

    let bob = Person {
        name: "Bob".to_owned(),
        age: 19,
        scores: vec![80, 85],
    };
    let roster = BTreeMap::from([(1i32, vec![alice.clone(), bob]), (2, vec![alice])]);
    check("btree_map<i32, vec<person>>", &dir, &roster)?;

    Ok(())
}
