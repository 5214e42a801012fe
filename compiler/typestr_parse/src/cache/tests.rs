use pretty_assertions::assert_eq;
use typestr_ir::{Category, Container};

use super::*;

#[test]
fn cache_miss_then_hit() {
    let mut cache = TypeCache::new();
    assert_eq!(cache.get("List[int]", 128), None);
    assert_eq!(cache.hits(), 0);

    let list = Category::Container(Container::List);
    cache.insert("List[int]", Parsed::new(7u32, list), 2);
    assert_eq!(cache.get("List[int]", 128), Some((Parsed::new(7, list), 2)));
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_keys_are_exact_text() {
    let mut cache = TypeCache::new();
    cache.insert("List[int]", Parsed::new(1u32, Category::Simple), 2);
    assert!(!cache.contains("List[ int]"));
    assert!(cache.contains("List[int]"));
}

#[test]
fn first_insert_wins() {
    let mut cache = TypeCache::new();
    cache.insert("Tuple[]", Parsed::new(1u32, Category::Simple), 1);
    cache.insert("Tuple[]", Parsed::new(2u32, Category::Simple), 1);
    assert_eq!(cache.get("Tuple[]", 1).map(|(p, _)| p.ty), Some(1));
}

#[test]
fn entries_taller_than_room_are_misses() {
    let mut cache = TypeCache::new();
    let list = Category::Container(Container::List);
    cache.insert("List[List[int]]", Parsed::new(3u32, list), 3);
    assert_eq!(cache.get("List[List[int]]", 2), None);
    assert_eq!(cache.hits(), 0);
    assert!(cache.get("List[List[int]]", 3).is_some());
    assert_eq!(cache.hits(), 1);
}

#[test]
fn contained_types_collapse_duplicates() {
    let mut contained = ContainedTypes::new();
    assert!(contained.insert("int"));
    assert!(!contained.insert("int"));
    assert!(contained.insert("Tensor"));
    assert_eq!(contained.len(), 2);
    assert_eq!(contained.sorted(), vec!["Tensor", "int"]);
}
