//! Integration tests for end-to-end interpretation.
//!
//! These tests verify that the complete pipeline works correctly from
//! source code through tokenization, parsing, and evaluation.

use std::{cell::RefCell, rc::Rc};

use interpreter::{
    eval::{environment::Environment, evaluator::eval_program, object::Value},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn interpret(source: &str, env: &Rc<RefCell<Environment>>) -> Option<Value> {
    let tokens = tokenize(source.to_string(), Some("test.lang".to_string()));
    let (program, errors) = parse(tokens);
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert!(messages.is_empty(), "parse errors: {:?}", messages);

    eval_program(&program, env)
}

#[test]
fn test_interpret_arithmetic() {
    let env = Rc::new(RefCell::new(Environment::new()));
    assert_eq!(
        interpret("(5 + 10 * 2 + 15 / 3) * 2 + -10", &env),
        Some(Value::Integer(50))
    );
}

#[test]
fn test_interpret_bindings_and_conditionals() {
    let source = r#"
        let threshold = 10;
        let pick = fn(value) {
            if (value > threshold) { value } else { threshold }
        };
        pick(3) + pick(30);
    "#;

    let env = Rc::new(RefCell::new(Environment::new()));
    assert_eq!(interpret(source, &env), Some(Value::Integer(40)));
}

#[test]
fn test_interpret_closures() {
    let source = r#"
        let makeCounterFrom = fn(start) {
            fn(step) { start + step; };
        };
        let fromTen = makeCounterFrom(10);
        fromTen(1) + fromTen(2);
    "#;

    let env = Rc::new(RefCell::new(Environment::new()));
    assert_eq!(interpret(source, &env), Some(Value::Integer(23)));
}

#[test]
fn test_interpret_recursion() {
    let source = r#"
        let factorial = fn(n) {
            if (n < 2) { 1 } else { n * factorial(n - 1) }
        };
        factorial(6);
    "#;

    let env = Rc::new(RefCell::new(Environment::new()));
    assert_eq!(interpret(source, &env), Some(Value::Integer(720)));
}

#[test]
fn test_interpret_strings() {
    let source = r#"
        let greet = fn(name) { "hello, " + name; };
        greet("world");
    "#;

    let env = Rc::new(RefCell::new(Environment::new()));
    assert_eq!(
        interpret(source, &env),
        Some(Value::String(String::from("hello, world")))
    );
}

#[test]
fn test_shell_session_keeps_bindings() {
    // Successive top-level evaluations share one environment, the way the
    // interactive shell drives them.
    let env = Rc::new(RefCell::new(Environment::new()));

    interpret("let base = 5;", &env);
    interpret("let bump = fn(x) { x + base; };", &env);
    assert_eq!(interpret("bump(2);", &env), Some(Value::Integer(7)));
    assert_eq!(interpret("let base = 6;", &env), Some(Value::Integer(6)));
}

#[test]
fn test_runtime_error_reaches_top_level_as_value() {
    let env = Rc::new(RefCell::new(Environment::new()));
    let result = interpret("let x = 3; x + true;", &env);

    let Some(value) = result else {
        panic!("expected an error value");
    };
    assert!(value.is_error());
    assert_eq!(value.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn test_parse_errors_are_surfaced_and_block_evaluation() {
    let tokens = tokenize("let 5 = x;".to_string(), Some("test.lang".to_string()));
    let (program, errors) = parse(tokens);

    // The host contract: any syntax error means the program is not run.
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "expected next token to be Identifier, got Number instead."
    );
    assert_eq!(program.statements.len(), 0);
}

#[test]
fn test_canonical_printing_roundtrip() {
    let tokens = tokenize(
        "let result = a + b * c + d / e - f;".to_string(),
        Some("test.lang".to_string()),
    );
    let (program, errors) = parse(tokens);
    assert!(errors.is_empty());

    assert_eq!(
        program.to_string(),
        "let result = (((a + (b * c)) + (d / e)) - f);"
    );
}

#[test]
fn test_tokenize_is_total() {
    // Unknown characters become Illegal tokens rather than failures, so
    // tokenizing arbitrary text always produces an EOF-terminated stream.
    let tokens = tokenize("let § = ¶;".to_string(), Some("test.lang".to_string()));
    assert_eq!(
        tokens.last().map(|token| token.kind),
        Some(interpreter::lexer::tokens::TokenKind::EOF)
    );
}
