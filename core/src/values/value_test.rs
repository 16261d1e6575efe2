use super::*;
use crate::{
    ToString, vec,
    types::{FullType, Type},
};
use hashbrown::HashSet;
use pretty_assertions::assert_eq;

fn set_of(values: impl IntoIterator<Item = Value>) -> HashSet<Value> {
    values.into_iter().collect()
}

#[test]
fn test_primitive_constructors() {
    assert_eq!(Value::bool(true).ty, FullType::single(Type::Boolean));
    assert!(Value::bool(true).as_bool());
    assert_eq!(Value::int(-7).as_int(), -7);
    assert_eq!(Value::float(0.5).as_float(), 0.5);
    assert_eq!(Value::handle(Type::Position, "P0").as_handle(), "P0");
    assert_eq!(Value::error("boom").error_message(), "boom");
    assert!(Value::error(TOO_DEEP).is_error());
}

#[test]
fn test_sequence_types() {
    let path = Value::handles(Type::Position, ["P0", "P1"]);
    assert_eq!(path.ty, FullType::collection(Type::Position));
    assert_eq!(path.as_sequence().len(), 2);
    assert_eq!(path.as_sequence()[1], Value::handle(Type::Position, "P1"));

    let empty = Value::empty(FullType::collection(Type::Number));
    assert_eq!(empty.ty, FullType::collection(Type::Number));
    assert!(empty.as_sequence().is_empty());
}

#[test]
fn test_structural_equality_and_hash() {
    let a = Value::handles(Type::Object, ["tank", "jeep"]);
    let b = Value::sequence(
        FullType::single(Type::Object),
        vec![
            Value::handle(Type::Object, "tank"),
            Value::handle(Type::Object, "jeep"),
        ],
    );
    assert_eq!(a, b);
    assert!(set_of([a.clone()]).contains(&b));

    let reordered = Value::handles(Type::Object, ["jeep", "tank"]);
    assert_ne!(a, reordered);

    // Same handle name, different kind.
    assert_ne!(
        Value::handle(Type::Object, "x"),
        Value::handle(Type::Position, "x")
    );
    // Empty sequences of different element types differ.
    assert_ne!(
        Value::empty(FullType::collection(Type::Object)),
        Value::empty(FullType::collection(Type::Position))
    );
    assert_ne!(Value::int(1), Value::float(1.0));
}

#[test]
fn test_float_equality_agrees_with_hash() {
    let nan = Value::float(f64::NAN);
    assert_eq!(nan, nan.clone());
    assert_eq!(set_of([nan.clone(), nan.clone()]).len(), 1);
    assert_ne!(Value::float(0.0), Value::float(-0.0));
}

#[test]
fn test_display() {
    assert_eq!(Value::bool(false).to_string(), "false");
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(
        Value::handles(Type::Position, ["P0", "P1"]).to_string(),
        "[P0, P1]"
    );
    assert_eq!(Value::error(TOO_DEEP).to_string(), "error(TOO DEEP)");
}

#[test]
#[should_panic(expected = "as_int called on a Boolean value")]
fn test_wrong_accessor_panics() {
    Value::bool(true).as_int();
}

#[test]
#[should_panic(expected = "as_bool called on a Error value")]
fn test_error_value_is_not_a_boolean() {
    Value::error(TOO_DEEP).as_bool();
}

#[test]
#[should_panic(expected = "as_int called on a Number value")]
fn test_float_payload_is_not_an_int() {
    Value::float(1.5).as_int();
}

#[test]
#[should_panic(expected = "Number values are not handles")]
fn test_handle_requires_handle_kind() {
    Value::handle(Type::Number, "5");
}

#[test]
#[should_panic(expected = "Object item in a sequence of Positions")]
fn test_sequence_must_be_homogeneous() {
    Value::sequence(
        FullType::single(Type::Position),
        vec![
            Value::handle(Type::Position, "P0"),
            Value::handle(Type::Object, "tank"),
        ],
    );
}
