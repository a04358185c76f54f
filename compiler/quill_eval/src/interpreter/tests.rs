use pretty_assertions::assert_eq;
use quill_parse::parse_source;

use super::*;

fn run_with(interp: &mut Interpreter, source: &str) -> Entity {
    let parsed = parse_source(source);
    assert!(
        !parsed.has_errors(),
        "parse errors in {source:?}: {:?}",
        parsed.errors
    );
    interp.eval_program(&parsed.program, &Environment::new())
}

fn run(source: &str) -> Entity {
    run_with(&mut Interpreter::new(), source)
}

fn error_message(result: &Entity) -> String {
    match result {
        Entity::Error(err) => err.to_string(),
        other => panic!("expected an error, got {}", other.inspect()),
    }
}

#[test]
fn program_value_is_last_statement() {
    assert_eq!(run("1; 2; 3"), Entity::int(3));
    assert_eq!(run(""), Entity::Null);
    assert_eq!(run("var x = 5;"), Entity::Null);
}

#[test]
fn top_level_return_ends_program() {
    assert_eq!(run("1; return 2; 3"), Entity::int(2));
}

#[test]
fn nested_return_escapes_blocks_but_not_calls() {
    let source = "
        var f = fn() {
            if (true) {
                if (true) { return 10; }
                return 1;
            }
        };
        f() + 1
    ";
    assert_eq!(run(source), Entity::int(11));
}

#[test]
fn if_without_alternative_is_null() {
    assert_eq!(run("if (false) { 1 }"), Entity::Null);
    assert!(run("if (missing()) { 1 }").is_error());
}

#[test]
fn errors_short_circuit() {
    let result = run("var x = 1 + true; 5");
    assert_eq!(error_message(&result), "type mismatch: INTEGER + BOOLEAN");
    let result = run("[1, -true, missing]");
    assert_eq!(error_message(&result), "unknown operator: -BOOLEAN");
    let result = run("if (10 > 1) { true + false; 10 }");
    assert_eq!(error_message(&result), "unknown operator: BOOLEAN + BOOLEAN");
}

#[test]
fn identifiers_resolve_env_then_builtins() {
    assert_eq!(Some(run("len")), lookup_builtin("len").map(Entity::Builtin));
    assert_eq!(run("var len = 3; len"), Entity::int(3));
    assert_eq!(error_message(&run("foobar")), "identifier not found: foobar");
}

#[test]
fn not_a_function() {
    assert_eq!(error_message(&run("5()")), "not a function: INTEGER");
    assert_eq!(error_message(&run("\"f\"(1)")), "not a function: STRING");
}

#[test]
fn user_function_arity_is_checked() {
    assert_eq!(
        error_message(&run("fn(a, b) { a }(1)")),
        "wrong number of arguments to `fn`: want 2, got 1"
    );
}

#[test]
fn index_errors() {
    assert_eq!(
        error_message(&run("1[0]")),
        "index operator not supported: INTEGER"
    );
    assert_eq!(
        error_message(&run("[1][\"a\"]")),
        "index type mismatch: expected INTEGER, got STRING"
    );
    assert_eq!(
        error_message(&run("[1, 2][-1]")),
        "index out of bounds: max index 1, got -1"
    );
    assert_eq!(
        error_message(&run("[][0]")),
        "index out of bounds: max index -1, got 0"
    );
    assert_eq!(
        error_message(&run("{\"a\": 1}[[1]]")),
        "unusable as map key: ARRAY"
    );
    assert_eq!(
        error_message(&run("{\"a\": 1}[\"b\"]")),
        "no value for key: \"b\""
    );
}

#[test]
fn index_collection_checked_before_index_operand() {
    assert_eq!(
        error_message(&run("5[missing]")),
        "index operator not supported: INTEGER"
    );
}

#[test]
fn map_literal_errors() {
    assert_eq!(
        error_message(&run("{[1]: 2}")),
        "unusable as map key: ARRAY"
    );
    assert_eq!(
        error_message(&run("{\"x\": fn() { 1 }}")),
        "map value type mismatch: expected STRING, BOOLEAN or INTEGER, got FUNCTION"
    );
}

#[test]
fn duplicate_map_key_keeps_last() {
    assert_eq!(run("{\"a\": 1, \"a\": 2}[\"a\"]"), Entity::int(2));
}

#[test]
fn call_depth_limit() {
    let source = "var f = fn(n) { f(n + 1) }; f(0)";
    let mut interp = Interpreter::builder().max_call_depth(Some(50)).build();
    assert_eq!(
        error_message(&run_with(&mut interp, source)),
        "maximum call depth exceeded: 50"
    );
}

#[test]
fn depth_counter_resets_after_error() {
    let mut interp = Interpreter::builder().max_call_depth(Some(20)).build();
    let deep = "var f = fn(n) { if (n == 0) { 0 } else { f(n - 1) } }; f(15)";
    assert_eq!(run_with(&mut interp, deep), Entity::int(0));
    assert!(run_with(&mut interp, "var g = fn() { g() }; g()").is_error());
    assert_eq!(run_with(&mut interp, deep), Entity::int(0));
}

#[test]
fn default_depth_allows_deep_recursion() {
    let source = "
        var count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } };
        count(5000)
    ";
    assert_eq!(run(source), Entity::int(5000));
}

#[test]
fn builder_configuration() {
    assert_eq!(Interpreter::new().max_call_depth(), Some(DEFAULT_MAX_CALL_DEPTH));
    assert_eq!(
        Interpreter::builder().max_call_depth(None).build().max_call_depth(),
        None
    );
}

#[test]
fn environment_persists_across_programs() {
    let mut interp = Interpreter::new();
    let env = Environment::new();
    let first = parse_source("var x = 40;");
    let second = parse_source("x + 2");
    assert_eq!(interp.eval_program(&first.program, &env), Entity::Null);
    assert_eq!(interp.eval_program(&second.program, &env), Entity::int(42));
}
