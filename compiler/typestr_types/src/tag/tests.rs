use super::*;

#[test]
fn simple_names_resolve() {
    for tag in Tag::SIMPLE {
        assert_eq!(Tag::from_simple_name(tag.name()), Some(tag));
        assert!(tag.is_simple());
        assert!(!tag.is_container());
    }
    assert_eq!(Tag::from_simple_name("List"), None);
    assert_eq!(Tag::from_simple_name("tensor"), None);
}

#[test]
fn container_tags_round_trip() {
    for kind in Container::ALL {
        let tag = Tag::from_container(kind);
        assert!(tag.is_container());
        assert_eq!(tag.container(), Some(kind));
        assert_eq!(tag.name(), kind.keyword());
    }
    assert_eq!(Tag::NamedTuple.container(), None);
}

#[test]
fn extra_layout() {
    assert!(Tag::Dict.uses_extra());
    assert!(Tag::NamedTuple.uses_extra());
    assert!(!Tag::List.uses_extra());
    assert!(!Tag::CustomClass.uses_extra());
}

#[test]
fn ranges() {
    assert!(!Tag::NamedTuple.is_container());
    assert!(!Tag::ScriptClass.is_simple());
}
