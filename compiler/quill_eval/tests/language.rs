//! End-to-end language tests: source text in, entity out.

use pretty_assertions::assert_eq;
use quill_eval::{eval, Entity, Environment, EvalErrorKind};
use quill_parse::parse_source;

fn run(source: &str) -> Entity {
    let parsed = parse_source(source);
    assert!(
        !parsed.has_errors(),
        "parse errors in {source:?}: {:?}",
        parsed.errors
    );
    eval(&parsed.program, &Environment::new())
}

fn error_kind(source: &str) -> EvalErrorKind {
    match &run(source) {
        Entity::Error(err) => err.kind.clone(),
        other => panic!("expected an error from {source:?}, got {}", other.inspect()),
    }
}

// Properties

#[test]
fn precedence() {
    assert_eq!(parse_source("1 + 2 * 3").program.to_string(), "(1 + (2 * 3))");
    assert_eq!(run("1 + 2 * 3"), Entity::int(7));
}

#[test]
fn closures() {
    let source = "var adder = fn(x){ return fn(y){ return x + y; }; }; adder(2)(3);";
    assert_eq!(run(source), Entity::int(5));
}

#[test]
fn aliasing() {
    let source = "var a = [1,2]; var b = a; push(a, 3); len(b);";
    assert_eq!(run(source), Entity::int(3));
}

#[test]
fn truthiness() {
    assert_eq!(run("if (0) { 1 } else { 2 }"), Entity::int(1));
    assert_eq!(run("if (false) { 1 } else { 2 }"), Entity::int(2));
}

#[test]
fn map_restriction() {
    assert!(run(r#"{ "x": [1] }"#).is_error());
}

#[test]
fn index_bounds() {
    assert_eq!(
        error_kind("var a = [1,2]; a[5];"),
        EvalErrorKind::IndexOutOfBounds { max: 1, index: 5 }
    );
    assert_eq!(
        run("var a = [1,2]; a[5];").inspect(),
        "ERROR: index out of bounds: max index 1, got 5"
    );
}

#[test]
fn identity_equality() {
    assert_eq!(run("[1] == [1]"), Entity::bool(false));
    assert_eq!(run("var a = [1]; a == a"), Entity::bool(true));
    assert_eq!(run("var m = {1: 2}; m == m"), Entity::bool(true));
    assert_eq!(run("{1: 2} == {1: 2}"), Entity::bool(false));
    assert_eq!(run("var f = fn() { 1 }; f == f"), Entity::bool(true));
    assert_eq!(run("fn() { 1 } == fn() { 1 }"), Entity::bool(false));
    assert_eq!(run("len == len"), Entity::bool(true));
}

#[test]
fn inspect_output_reevaluates_to_equal_value() {
    for source in ["42", "-17", "true", "false", r#""hello world""#, r#""""#] {
        let first = run(source);
        let again = run(&first.inspect());
        assert_eq!(first, again, "{source}");
    }
}

// Language tour

#[test]
fn integer_arithmetic() {
    let cases = [
        ("5", 5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("-7 / 2", -3),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Entity::int(expected), "{source}");
    }
}

#[test]
fn boolean_expressions() {
    let cases = [
        ("true", true),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 <= 1", true),
        ("2 >= 3", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("true == true", true),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 > 2) == false", true),
        ("!true", false),
        ("!!5", true),
        ("!0", false),
        ("\"a\" == \"a\"", true),
        ("\"a\" != \"b\"", true),
        ("1 == true", false),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source), Entity::bool(expected), "{source}");
    }
}

#[test]
fn strings() {
    assert_eq!(run(r#""Hello" + " " + "World!""#), Entity::string("Hello World!"));
    assert_eq!(run(r#"len("four")"#), Entity::int(4));
}

#[test]
fn var_bindings() {
    assert_eq!(run("var a = 5; a;"), Entity::int(5));
    assert_eq!(run("var a = 5 * 5; a;"), Entity::int(25));
    assert_eq!(run("var a = 5; var b = a; var c = a + b + 5; c;"), Entity::int(15));
    assert_eq!(run("var a = 1; var a = a + 1; a"), Entity::int(2));
}

#[test]
fn functions_and_calls() {
    assert_eq!(run("var identity = fn(x) { x; }; identity(5);"), Entity::int(5));
    assert_eq!(run("var double = fn(x) { x * 2; }; double(5);"), Entity::int(10));
    assert_eq!(run("var add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));"), Entity::int(20));
    assert_eq!(run("fn(x) { x; }(5)"), Entity::int(5));
    assert_eq!(run("var f = fn() { }; f()"), Entity::Null);
}

#[test]
fn function_inspect() {
    assert_eq!(run("fn(x) { x + 2; };").inspect(), "fn(x) { (x + 2) }");
}

#[test]
fn closures_capture_by_reference() {
    let source = "
        var x = 1;
        var get = fn() { x };
        var x = 2;
        get()
    ";
    assert_eq!(run(source), Entity::int(2));
}

#[test]
fn parameters_shadow_outer_bindings() {
    let source = "
        var x = 10;
        var f = fn(x) { var x = x * 2; x };
        f(1) + x
    ";
    assert_eq!(run(source), Entity::int(12));
}

#[test]
fn recursion() {
    let source = "
        var fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
        fib(15)
    ";
    assert_eq!(run(source), Entity::int(610));
}

#[test]
fn higher_order_functions() {
    let source = "
        var map = fn(arr, f) {
            var iter = fn(arr, acc) {
                if (len(arr) == 0) { acc } else { iter(tail(arr), push(acc, f(head(arr)))) }
            };
            iter(arr, [])
        };
        map([1, 2, 3], fn(x) { x * x })
    ";
    assert_eq!(run(source).inspect(), "[1, 4, 9]");
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(run("[1, 2 * 2, 3 + 3]").inspect(), "[1, 4, 6]");
    assert_eq!(run("[1, 2, 3][0]"), Entity::int(1));
    assert_eq!(run("[1, 2, 3][1 + 1]"), Entity::int(3));
    assert_eq!(run("var i = 0; [1][i]"), Entity::int(1));
    assert_eq!(run("var a = [1, 2, 3]; a[0] + a[1] + a[2]"), Entity::int(6));
    assert_eq!(run("var a = [1, 2, 3]; var i = a[0]; a[i]"), Entity::int(2));
}

#[test]
fn builtins() {
    assert_eq!(run("len([])"), Entity::int(0));
    assert_eq!(run("head([7, 8])"), Entity::int(7));
    assert_eq!(run("last([7, 8])"), Entity::int(8));
    assert_eq!(run("tail([7, 8, 9])").inspect(), "[8, 9]");
    assert_eq!(run("head([])").inspect(), "[]");
    assert_eq!(run("push([], 1)").inspect(), "[1]");
    assert_eq!(
        error_kind("len(1)"),
        EvalErrorKind::WrongArgumentType {
            builtin: "len".to_owned(),
            expected: "STRING or ARRAY".to_owned(),
            got: quill_eval::EntityType::Integer,
        }
    );
    assert_eq!(
        run(r#"len("one", "two")"#).inspect(),
        "ERROR: wrong number of arguments to `len`: want 1, got 2"
    );
}

#[test]
fn push_can_store_the_array_in_itself() {
    assert_eq!(run("var a = [1]; push(a, a); a").inspect(), "[1, [...]]");
}

#[test]
fn maps() {
    let source = r#"
        var two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    assert_eq!(
        run(source).inspect(),
        r#"{4: 4, false: 6, true: 5, "one": 1, "three": 3, "two": 2}"#
    );
    assert_eq!(run(r#"{"foo": 5}["foo"]"#), Entity::int(5));
    assert_eq!(run(r#"var key = "foo"; {"foo": 5}[key]"#), Entity::int(5));
    assert_eq!(run("{5: 5}[5]"), Entity::int(5));
    assert_eq!(run("{true: 5}[true]"), Entity::int(5));
    assert_eq!(
        error_kind(r#"{"foo": 5}["bar"]"#),
        EvalErrorKind::KeyNotFound {
            key: "\"bar\"".to_owned()
        }
    );
}

#[test]
fn runtime_error_messages() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
        ("1 / 0", "division by zero"),
        ("var f = fn(x) { x / 0 }; f(1) + 1", "division by zero"),
        ("push(1, 1)", "wrong type of argument to `push`: expected ARRAY, got INTEGER"),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source).inspect(), format!("ERROR: {expected}"), "{source}");
    }
}

#[test]
fn errors_inside_calls_stop_the_program() {
    let source = "
        var check = fn(x) { if (x > 2) { x + true } else { x } };
        var result = check(1);
        check(3);
        result
    ";
    assert_eq!(error_kind(source).to_string(), "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn deeply_nested_result_prints() {
    let source = "var wrap = fn(a, n) { if (n == 0) { a } else { wrap([a], n - 1) } }; wrap([], 9990)";
    let value = run(source);
    assert!(!value.is_error());
    let text = value.inspect();
    assert_eq!(text.len(), 2 * 9991);
    assert!(text.starts_with("[[[") && text.ends_with("]]]"));
}

#[test]
fn deep_prefix_chain_parses_evaluates_and_drops() {
    let source = format!("{}1", "-".repeat(200_000));
    let parsed = parse_source(&source);
    assert!(!parsed.has_errors());
    assert_eq!(eval(&parsed.program, &Environment::new()), Entity::int(1));
    drop(parsed);
}

#[test]
fn runaway_recursion_is_an_error() {
    let source = "var loop = fn(n) { loop(n + 1) }; loop(0)";
    assert_eq!(
        error_kind(source),
        EvalErrorKind::CallDepthExceeded {
            limit: quill_eval::DEFAULT_MAX_CALL_DEPTH
        }
    );
}
