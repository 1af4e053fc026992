//! Unit tests for error handling.
//!
//! This module contains tests for both error channels: syntax errors with
//! their positions and tips, and runtime error messages.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, RuntimeError};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            token: TokenKind::Plus,
        },
        Position(10, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lang".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            got: TokenKind::Number,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            got: TokenKind::Number,
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be Assignment, got Number instead."
    );
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            token: TokenKind::Semicolon,
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "no prefix parse function for Semicolon found"
    );
}

#[test]
fn test_integer_parse_error_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "92233720368547758199".to_string(),
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"92233720368547758199\" as integer"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            got: TokenKind::EOF,
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_runtime_error_messages() {
    let cases: [(RuntimeError, &str); 7] = [
        (
            RuntimeError::TypeMismatch {
                left: "INTEGER",
                operator: "+".to_string(),
                right: "BOOLEAN",
            },
            "type mismatch: INTEGER + BOOLEAN",
        ),
        (
            RuntimeError::UnknownPrefixOperator {
                operator: "-".to_string(),
                operand: "BOOLEAN",
            },
            "unknown operator: -BOOLEAN",
        ),
        (
            RuntimeError::UnknownInfixOperator {
                left: "BOOLEAN",
                operator: "+".to_string(),
                right: "BOOLEAN",
            },
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            RuntimeError::IdentifierNotFound {
                name: "foobar".to_string(),
            },
            "identifier not found: foobar",
        ),
        (RuntimeError::DivisionByZero, "division by zero"),
        (
            RuntimeError::NotAFunction { kind: "INTEGER" },
            "not a function: INTEGER",
        ),
        (
            RuntimeError::WrongArgumentCount {
                expected: 2,
                got: 1,
            },
            "wrong number of arguments: expected 2, got 1",
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.to_string(), expected);
    }
}
