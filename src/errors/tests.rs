//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.script".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::Comma,
            token: ",".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.script");
}

#[test]
fn test_unexpected_token_message_names_kind_and_value() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            kind: TokenKind::CloseParen,
            token: ")".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.message(), "unexpected token CloseParen (\")\")");
    assert_eq!(error.to_string(), error.message());
}

#[test]
fn test_expected_token_error() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: "Semicolon".to_string(),
            found: "x".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    assert_eq!(error.message(), "expected Semicolon, found \"x\"");
}

#[test]
fn test_detailed_error_uses_caller_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "EOF".to_string(),
            message: "array literal must be closed by `]`".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(error.message(), "array literal must be closed by `]`, found \"EOF\"");
}

#[test]
fn test_invalid_lvalue_error() {
    let error = Error::new(
        ErrorImpl::InvalidLvalue {
            found: "Literal".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "InvalidLvalue");
    assert_eq!(error.message(), "invalid left-hand side in update expression: Literal");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        at(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "}".to_string(),
            message: "statements must be terminated by `;`".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Unexpected token: `}`, statements must be terminated by `;`")
        }
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
fn test_unterminated_string_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, at(3));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert!(matches!(error.get_kind(), ErrorImpl::UnterminatedString));
}

#[test]
fn test_invalid_utf8_escape_error() {
    let error = Error::new(
        ErrorImpl::InvalidUtf8Escape {
            token: r#""\xFF""#.to_string(),
        },
        at(4),
    );

    assert_eq!(error.get_error_name(), "InvalidUtf8Escape");
    assert_eq!(error.message(), r#"string escapes are not valid UTF-8: "\xFF""#);
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, at(128));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.message(), "nesting exceeds the limit of 128 levels");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Expressions and blocks may be nested at most 128 levels deep")
        }
        _ => panic!("Expected suggestion tip"),
    }
}
