//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(line: u32, column: u32) -> Position {
    Position::new(line, column, Rc::new("test.gs".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(1, 1),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`=`".to_string(),
            found: "newline".to_string(),
        },
        at(4, 42),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 42);
}

#[test]
fn test_error_display_includes_location() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`)`".to_string(),
            found: "`}`".to_string(),
        },
        at(2, 7),
    );

    assert_eq!(error.to_string(), "test.gs:2:7: unexpected `}`, expected `)`");
}

#[test]
fn test_non_name_on_left_of_define_message() {
    let error = Error::new(
        ErrorImpl::NonNameOnLeftOfDefine {
            expr: "a + b".to_string(),
        },
        at(1, 1),
    );

    assert_eq!(error.get_error_name(), "NonNameOnLeftOfDefine");
    assert!(error.to_string().ends_with("non-name a + b on left side of :="));
}

#[test]
fn test_statement_errors_are_syntax_errors() {
    let errors = [
        ErrorImpl::DeclarationInForPost,
        ErrorImpl::StatementUsedAsValue {
            stmt: "x := 1".to_string(),
        },
        ErrorImpl::MissingTypeAfterComma {
            found: "`)`".to_string(),
        },
        ErrorImpl::MissingParameterType {
            name: "b".to_string(),
        },
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, at(1, 1));
        assert_eq!(error.kind(), ErrorKind::Syntax);
        assert!(!error.is_internal());
    }
}

#[test]
fn test_not_implemented_error() {
    let error = Error::new(
        ErrorImpl::NotImplementedError {
            construct: "string literal".to_string(),
        },
        at(3, 5),
    );

    assert_eq!(error.get_error_name(), "NotImplementedError");
    assert_eq!(error.kind(), ErrorKind::NotImplemented);
}

#[test]
fn test_internal_error() {
    let error = Error::new(
        ErrorImpl::InternalError {
            message: "unexpected additive operator `*`".to_string(),
        },
        at(1, 3),
    );

    assert!(error.is_internal());
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "newline".to_string(),
            found: "`}`".to_string(),
        },
        at(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "expected newline, found `}`"),
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
fn test_number_parse_tip_states_literal_range() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "9223372036854775808".to_string(),
        },
        at(1, 2),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(
            tip,
            "Invalid number: `9223372036854775808`, literals are unsigned and must fit in a 64-bit signed integer"
        ),
        _ => panic!("Expected suggestion tip"),
    }
}
