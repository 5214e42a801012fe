use super::*;

#[test]
fn simple_types_at_fixed_indices() {
    let pool = Pool::new();
    assert_eq!(pool.tag(Idx::INT), Tag::Int);
    assert_eq!(pool.tag(Idx::STR), Tag::Str);
    assert_eq!(pool.tag(Idx::TENSOR), Tag::Tensor);
    assert_eq!(pool.tag(Idx::NONE_TYPE), Tag::NoneType);
    assert_eq!(pool.tag(Idx::CAPSULE), Tag::Capsule);
}

#[test]
fn pool_starts_with_reserved_range() {
    let pool = Pool::new();
    assert_eq!(pool.len(), Idx::FIRST_DYNAMIC as usize);
    assert_eq!(pool.dynamic_count(), 0);
}

#[test]
fn simple_type_lookup() {
    assert_eq!(Pool::simple_type("Tensor"), Some(Idx::TENSOR));
    assert_eq!(Pool::simple_type("MemoryFormat"), Some(Idx::MEMORY_FORMAT));
    assert_eq!(Pool::simple_type("List"), None);
    assert_eq!(Pool::simple_type("Foo"), None);
}

#[test]
fn names_are_interned_once() {
    let mut pool = Pool::new();
    let a = pool.intern_name("__torch__.m.A");
    let b = pool.intern_name("__torch__.m.B");
    assert_ne!(a, b);
    assert_eq!(pool.intern_name("__torch__.m.A"), a);
}

#[test]
fn complex_payloads_are_interned_once() {
    let mut pool = Pool::new();
    let a = pool.intern_complex(Tag::Tuple, &[1, Idx::INT.raw()]);
    let b = pool.intern_complex(Tag::Tuple, &[1, Idx::INT.raw()]);
    let c = pool.intern_complex(Tag::Union, &[1, Idx::INT.raw()]);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(pool.dynamic_count(), 2);
}
