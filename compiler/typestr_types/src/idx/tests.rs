use super::*;

#[test]
fn simple_indices_match_tags() {
    for (i, tag) in Tag::SIMPLE.iter().enumerate() {
        assert_eq!(*tag as usize, i, "{tag} is out of place");
    }
    assert_eq!(Idx::INT.raw(), Tag::Int as u32);
    assert_eq!(Idx::TENSOR.raw(), Tag::Tensor as u32);
    assert_eq!(Idx::CAPSULE.raw(), Tag::Capsule as u32);
}

#[test]
fn simple_check() {
    assert!(Idx::INT.is_simple());
    assert!(Idx::CAPSULE.is_simple());
    assert!(!Idx::from_raw(Idx::SIMPLE_COUNT).is_simple());
    assert!(!Idx::from_raw(Idx::FIRST_DYNAMIC).is_simple());
}

#[test]
fn names() {
    assert_eq!(Idx::NONE_TYPE.name(), Some("NoneType"));
    assert_eq!(Idx::SCALAR_TYPE.name(), Some("ScalarType"));
    assert_eq!(Idx::from_raw(40).name(), None);
}

#[test]
fn debug_and_display() {
    assert_eq!(format!("{:?}", Idx::TENSOR), "Idx::Tensor");
    assert_eq!(format!("{:?}", Idx::from_raw(40)), "Idx(40)");
    assert_eq!(Idx::STR.to_string(), "str");
    assert_eq!(Idx::from_raw(40).to_string(), "type#40");
}
