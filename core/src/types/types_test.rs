use super::*;
use crate::{ToString, Vec};
use hashbrown::HashSet;
use pretty_assertions::assert_eq;

#[test]
fn test_display_pluralizes_collections() {
    assert_eq!(FullType::single(Type::Position).to_string(), "Position");
    assert_eq!(FullType::collection(Type::Position).to_string(), "Positions");
    assert_eq!(FullType::collection(Type::Boolean).to_string(), "Booleans");
    assert_eq!(FullType::single(Type::Error).to_string(), "Error");
}

#[test]
fn test_equality_requires_both_fields() {
    assert_eq!(FullType::single(Type::Number), FullType::from(Type::Number));
    assert_ne!(FullType::single(Type::Number), FullType::collection(Type::Number));
    assert_ne!(FullType::single(Type::Number), FullType::single(Type::Boolean));
}

#[test]
fn test_usable_as_compound_key() {
    let keys: HashSet<FullType> = [
        FullType::single(Type::Object),
        FullType::collection(Type::Object),
        FullType::single(Type::Object),
    ]
    .into_iter()
    .collect();
    assert_eq!(keys.len(), 2);

    let mut sorted: Vec<FullType> = keys.into_iter().collect();
    sorted.sort();
    assert_eq!(
        sorted,
        [FullType::single(Type::Object), FullType::collection(Type::Object)]
    );
}

#[test]
fn test_element_and_collection_of() {
    let positions = FullType::collection(Type::Position);
    assert_eq!(positions.element(), FullType::single(Type::Position));
    assert_eq!(positions.element().collection_of(), positions);
    assert!(FullType::single(Type::Error).is_error());
    assert!(!FullType::collection(Type::Error).is_error());
    assert!(Type::Action.is_handle());
    assert!(!Type::Number.is_handle());
}
