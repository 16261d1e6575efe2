//! End-to-end: a recursive path-following rule.
//!
//! canfollow(vehicle, path):
//!   return true if shorterthan(path, 2)
//!   from = element(1, path)
//!   to = element(2, path)
//!   ok = pass(vehicle, from, to)
//!   rest = skip(path, 1)
//!   restok = canfollow(vehicle, rest)
//!   result = and(ok, restok)

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rulecraft::{
    Context, FullType, FunctionId, Invocation, Line, Program, Signature, TOO_DEEP, Type, Value,
    stdlib,
};

struct Rules {
    program: Program,
    can_follow: FunctionId,
    pass_calls: Rc<Cell<usize>>,
}

/// Builds the rule with a `pass` native that allows every step except the
/// ones listed in `blocked` (as `(from, to)` handle pairs).
fn rules(blocked: &[(&str, &str)]) -> Rules {
    let mut program = Program::new();
    let lib = stdlib::register_stdlib(&mut program, Type::Position).unwrap();

    let object = FullType::single(Type::Object);
    let position = FullType::single(Type::Position);
    let positions = FullType::collection(Type::Position);
    let number = FullType::single(Type::Number);
    let boolean = FullType::single(Type::Boolean);

    let pass_calls = Rc::new(Cell::new(0));
    let blocked: Vec<(String, String)> = blocked
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect();
    let pass = {
        let result = program.variable("result", boolean);
        let vehicle = program.variable("vehicle", object);
        let from = program.variable("from", position);
        let to = program.variable("to", position);
        let calls = pass_calls.clone();
        program
            .define_native(
                "pass",
                Signature::returning(result, "whether")
                    .param(vehicle, "can move from")
                    .param(from, "to")
                    .param(to, ""),
                move |args| {
                    calls.set(calls.get() + 1);
                    let step = (
                        args[1].as_handle().to_string(),
                        args[2].as_handle().to_string(),
                    );
                    Value::bool(!blocked.contains(&step))
                },
            )
            .unwrap()
    };

    let result = program.variable("result", boolean);
    let vehicle = program.variable("vehicle", object);
    let path = program.variable("path", positions);
    let can_follow = program
        .declare(
            "canfollow",
            Signature::returning(result, "whether")
                .param(vehicle, "can follow")
                .param(path, ""),
        )
        .unwrap();

    let yes = program.literal("true", boolean);
    let one = program.literal("1", number);
    let two = program.literal("2", number);
    let from = program.variable("from", position);
    let to = program.variable("to", position);
    let ok = program.variable("ok", boolean);
    let rest = program.variable("rest", positions);
    let rest_ok = program.variable("restok", boolean);

    program
        .set_body(
            can_follow,
            vec![
                Line::return_if(yes, lib.sequences.shorter_than, [path, two]),
                Line::assign(from, lib.sequences.element, [one, path]),
                Line::assign(to, lib.sequences.element, [two, path]),
                Line::assign(ok, pass, [vehicle, from, to]),
                Line::assign(rest, lib.sequences.skip, [path, one]),
                Line::assign(rest_ok, can_follow, [vehicle, rest]),
                Line::assign(result, lib.logic.and, [ok, rest_ok]),
            ],
        )
        .unwrap();

    Rules {
        program,
        can_follow,
        pass_calls,
    }
}

fn tank() -> Value {
    Value::handle(Type::Object, "tank")
}

fn path(len: usize) -> Value {
    Value::handles(Type::Position, (0..len).map(|i| format!("P{}", i)))
}

#[test]
fn test_three_step_path() {
    let rules = rules(&[]);
    let mut context = Context::new(&rules.program);

    let result = context.call(rules.can_follow, [tank(), path(3)]).unwrap();
    assert_eq!(result, Value::bool(true));
    assert_eq!(rules.pass_calls.get(), 2);

    // The root call plus exactly two recursive self-invocations.
    let suffixes = [
        path(3),
        Value::handles(Type::Position, ["P1", "P2"]),
        Value::handles(Type::Position, ["P2"]),
    ];
    for suffix in suffixes {
        let invocation = Invocation::new(rules.can_follow, [tank(), suffix]);
        assert_eq!(context.cached(&invocation), Some(&Value::bool(true)));
    }
    let empty = Invocation::new(rules.can_follow, [tank(), path(0)]);
    assert_eq!(context.cached(&empty), None);
}

#[test]
fn test_blocked_step() {
    let rules = rules(&[("P1", "P2")]);
    let mut context = Context::new(&rules.program);

    let result = context.call(rules.can_follow, [tank(), path(4)]).unwrap();
    assert_eq!(result, Value::bool(false));
    assert_eq!(rules.pass_calls.get(), 3);
}

#[test]
fn test_short_paths_return_early() {
    let rules = rules(&[]);
    let mut context = Context::new(&rules.program);

    for len in [0, 1] {
        let result = context.call(rules.can_follow, [tank(), path(len)]).unwrap();
        assert_eq!(result, Value::bool(true));
    }
    assert_eq!(rules.pass_calls.get(), 0);
}

#[test]
fn test_shared_suffixes_are_memoized() {
    let rules = rules(&[]);
    let mut context = Context::new(&rules.program);

    context.call(rules.can_follow, [tank(), path(4)]).unwrap();
    assert_eq!(rules.pass_calls.get(), 3);

    // [P1, P2, P3] was already evaluated as a suffix.
    let suffix = Value::handles(Type::Position, ["P1", "P2", "P3"]);
    let result = context.call(rules.can_follow, [tank(), suffix]).unwrap();
    assert_eq!(result, Value::bool(true));
    assert_eq!(rules.pass_calls.get(), 3);

    // A fresh context starts with an empty cache.
    let mut fresh = Context::new(&rules.program);
    fresh.call(rules.can_follow, [tank(), path(4)]).unwrap();
    assert_eq!(rules.pass_calls.get(), 6);
}

#[test]
fn test_longest_path_within_depth_limit() {
    let rules = rules(&[]);
    let mut context = Context::new(&rules.program);

    // canfollow runs at depth len - 1 for the last suffix, and its gate one
    // level deeper.
    let result = context.call(rules.can_follow, [tank(), path(10)]).unwrap();
    assert_eq!(result, Value::bool(true));
}

#[test]
fn test_too_deep_flows_through_boolean_consumers() {
    let rules = rules(&[]);
    let mut context = Context::new(&rules.program);

    // The innermost gate trips the guard; the error value is returned by its
    // frame and skips every `and` on the way back up.
    let result = context.call(rules.can_follow, [tank(), path(11)]).unwrap();
    assert_eq!(result, Value::error(TOO_DEEP));
    assert_eq!(rules.pass_calls.get(), 10);
}

#[test]
fn test_listing() {
    let rules = rules(&[]);
    let program = &rules.program;
    let lines = program.function(rules.can_follow).lines().unwrap();
    let listing: Vec<String> = lines
        .iter()
        .map(|line| program.display_line(line).to_string())
        .collect();

    assert_eq!(
        listing,
        [
            "return true if shorterthan(path, 2)",
            "from = element(1, path)",
            "to = element(2, path)",
            "ok = pass(vehicle, from, to)",
            "rest = skip(path, 1)",
            "restok = canfollow(vehicle, rest)",
            "result = and(ok, restok)",
        ]
    );
    assert_eq!(
        program.display_function(rules.can_follow).to_string(),
        "canfollow(vehicle, path) -> Boolean"
    );

    let locals: Vec<&str> = program
        .locals_for(rules.can_follow, 4)
        .into_iter()
        .map(|id| program.reference(id).name.as_str())
        .collect();
    assert_eq!(locals, ["from", "to", "ok"]);
}
