use std::{cell::RefCell, fs, rc::Rc};

use mu_lang::{
    get_result,
    interpreter::{
        environment::Environment,
        evaluator::{binary::apply_operator, evaluate},
        value::{NativeFunction, Value},
    },
    parse,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Parses and evaluates a script in a fresh global environment, panicking on
/// any error.
fn eval(src: &str) -> Value {
    let program = parse(src).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    let globals = Environment::global();
    evaluate(&program, &globals).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

/// Parses and evaluates a script, returning the rendered error it must
/// produce.
fn eval_err(src: &str) -> String {
    let program = match parse(src) {
        Ok(program) => program,
        Err(e) => return e.to_string(),
    };
    let globals = Environment::global();
    match evaluate(&program, &globals) {
        Ok(v) => panic!("Script succeeded with {v} but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

/// Evaluates a script with `println` bound to a capturing sink and returns
/// everything the script printed.
fn eval_captured(src: &str) -> Vec<Value> {
    let program = parse(src).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    let globals = Environment::global();

    let sink = Rc::new(RefCell::new(Vec::new()));
    let captured = Rc::clone(&sink);
    globals.define("println",
                   Value::Native(NativeFunction::new("println", move |args| {
                                     captured.borrow_mut().extend(args.iter().cloned());
                                     Ok(Value::FALSE)
                                 })));

    evaluate(&program, &globals).unwrap_or_else(|e| panic!("Script failed: {e}"));
    sink.take()
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "mu")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = get_result(&source, false) {
            panic!("Demo script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(eval("2 + 3 * 4;"), Value::Number(14.0));
    assert_eq!(eval("2 * 3 + 4;"), Value::Number(10.0));
    assert_eq!(eval("2 + 3 * 4 - 6 / 2;"), Value::Number(11.0));
    assert_eq!(eval("(2 + 3) * 4;"), Value::Number(20.0));
    assert_eq!(eval("10 % 4 + 1;"), Value::Number(3.0));
}

#[test]
fn println_receives_evaluated_arguments() {
    assert_eq!(eval_captured("println(2 + 3 * 4);"), vec![Value::Number(14.0)]);
    assert_eq!(eval_captured("println(1); println(2);"),
               vec![Value::Number(1.0), Value::Number(2.0)]);
}

#[test]
fn recursive_fibonacci_through_the_global_frame() {
    assert_eq!(eval("fib = lambda (n) if n < 2 then n else fib(n - 1) + fib(n - 2); fib(15);"),
               Value::Number(610.0));
}

#[test]
fn then_is_elidable_before_a_block() {
    assert_eq!(parse("if n < 2 then n else 0").unwrap(),
               parse("if n < 2 { n } else { 0 }").unwrap());
    // Without a block, the keyword is required.
    assert!(parse("if n < 2 n else 0").is_err());
}

#[test]
fn sequencing_returns_the_last_value() {
    assert_eq!(eval("1; 2; 3;"), Value::Number(3.0));
    // The trailing separator is optional.
    assert_eq!(eval("1; 2"), Value::Number(2.0));
    // Empty program and empty block evaluate to false.
    assert_eq!(eval(""), Value::FALSE);
    assert_eq!(eval("{};"), Value::FALSE);
}

#[test]
fn assignment_mutates_the_owning_frame() {
    assert_eq!(eval("x = 1; { y = 2; x = 3 }; x;"), Value::Number(3.0));
    // A closure frame assigns through the chain into the global frame.
    assert_eq!(eval("x = 1; f = lambda () x = 5; f(); x;"), Value::Number(5.0));
}

#[test]
fn only_the_global_frame_introduces_names_by_assignment() {
    assert_eq!(eval_err("f = lambda (a) { z = 9 }; f(1);"),
               "Error on line 1: Undefined variable 'z'.");
}

#[test]
fn assignment_is_right_associative_and_yields_its_value() {
    assert_eq!(eval("x = y = 5; x + y;"), Value::Number(10.0));
    assert_eq!(eval("x = 7;"), Value::Number(7.0));
}

#[test]
fn closures_capture_their_defining_frame() {
    let src = "make_counter = lambda (start) lambda () start = start + 1; \
               a = make_counter(10); \
               b = make_counter(100); \
               a(); a(); b(); a() + b();";
    // a has ticked to 13, b to 102; the two counters do not share state.
    assert_eq!(eval(src), Value::Number(115.0));
}

#[test]
fn parameters_bind_positionally() {
    // Missing trailing arguments bind false.
    assert_eq!(eval("f = lambda (a, b) b; f(1);"), Value::FALSE);
    // Extra arguments are silently ignored.
    assert_eq!(eval("f = lambda (a) a; f(1, 2, 3);"), Value::Number(1.0));
}

#[test]
fn lambda_glyph_is_a_keyword() {
    assert_eq!(eval("id = λ (x) x; id(42);"), Value::Number(42.0));
}

#[test]
fn calls_chain_and_take_expression_callees() {
    assert_eq!(eval("add = lambda (a) lambda (b) a + b; add(2)(3);"),
               Value::Number(5.0));
    assert_eq!(eval("(lambda (x) x * x)(6);"), Value::Number(36.0));
}

#[test]
fn only_false_is_falsy() {
    assert_eq!(eval("if 0 then 1 else 2;"), Value::Number(1.0));
    assert_eq!(eval("if \"\" then 1 else 2;"), Value::Number(1.0));
    assert_eq!(eval("if false then 1 else 2;"), Value::Number(2.0));
    assert_eq!(eval("if true then 1 else 2;"), Value::Number(1.0));
    // A missing else branch produces false.
    assert_eq!(eval("if false then 1;"), Value::FALSE);
}

#[test]
fn logical_operators_select_operands_without_short_circuiting() {
    assert_eq!(eval("1 && 2;"), Value::Number(2.0));
    assert_eq!(eval("false && 2;"), Value::FALSE);
    assert_eq!(eval("0 || 5;"), Value::Number(0.0));
    assert_eq!(eval("false || 7;"), Value::Number(7.0));
    // Both operands are always evaluated, so their side effects always run.
    assert_eq!(eval("hits = 0; bump = lambda () hits = hits + 1; false && bump(); hits;"),
               Value::Number(1.0));
    assert_eq!(eval("hits = 0; bump = lambda () hits = hits + 1; true || bump(); hits;"),
               Value::Number(1.0));
}

#[test]
fn comparisons_and_equality() {
    assert_eq!(eval("2 < 3;"), Value::Bool(true));
    assert_eq!(eval("3 <= 3;"), Value::Bool(true));
    assert_eq!(eval("2 > 3;"), Value::Bool(false));
    assert_eq!(eval("3 >= 4;"), Value::Bool(false));
    assert_eq!(eval("2 == 2;"), Value::Bool(true));
    assert_eq!(eval("2 != 2;"), Value::Bool(false));
    // Equality compares by value across any types, never coercing.
    assert_eq!(eval("\"ab\" == \"ab\";"), Value::Bool(true));
    assert_eq!(eval("1 == \"1\";"), Value::Bool(false));
    assert_eq!(eval("true != 1;"), Value::Bool(true));
}

#[test]
fn string_escapes_keep_the_escape_pair() {
    assert_eq!(eval(r#""a\"b";"#), Value::from(r#"a\"b"#));
    assert_eq!(eval(r#""no escapes";"#), Value::from("no escapes"));
}

#[test]
fn arithmetic_errors() {
    assert_eq!(eval_err("1 / 0;"), "Error on line 1: Divide by zero.");
    assert_eq!(eval_err("1 % 0;"), "Error on line 1: Divide by zero.");
}

#[test]
fn type_errors_cite_the_offending_value() {
    assert_eq!(eval_err("1 + \"a\";"),
               "Error on line 1: Expected number but got a.");
    assert_eq!(eval_err("true < 1;"),
               "Error on line 1: Expected number but got true.");
}

#[test]
fn binding_errors() {
    assert_eq!(eval_err("nope;"), "Error on line 1: Undefined variable 'nope'.");
    assert_eq!(eval_err("1 = 2;"),
               "Error on line 1: Cannot assign to number literal.");
    assert_eq!(eval_err("5(1);"), "Error on line 1: 5 is not a function.");
}

#[test]
fn runtime_errors_carry_their_source_line() {
    assert_eq!(eval_err("x = 1;\ny = 2;\nx / (y - 2);"),
               "Error on line 3: Divide by zero.");
}

#[test]
fn operators_outside_the_table_cannot_be_applied() {
    let err = apply_operator("^", &Value::Number(2.0), &Value::Number(3.0), 1)
        .expect_err("'^' is not an operator of the language");
    assert_eq!(err.to_string(), "Error on line 1: Can't apply operator '^'.");
}

#[test]
fn comments_and_editor_whitespace_are_skipped() {
    assert_eq!(eval("# a comment line\n1 + 2;"), Value::Number(3.0));
    assert_eq!(eval("1 +\u{00A0}2; # trailing comment"), Value::Number(3.0));
}
