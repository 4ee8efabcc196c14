//! Utility macros for the lexer.
//!
//! This module defines helper macros used when producing tokens:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// With three arguments the token's raw text is its value. String literals
/// pass the raw source slice separately since their value has escapes
/// resolved.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// let token = MK_TOKEN!(TokenKind::String, "a\nb".to_string(), r#""a\nb""#.to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {{
        let value: String = $value;
        Token {
            kind: $kind,
            raw: value.clone(),
            value,
            span: $span,
        }
    }};
    ($kind:expr, $value:expr, $raw:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            raw: $raw,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for fixed-text tokens.
///
/// Generates a handler that pushes a token of the given kind and advances
/// the lexer past the token's text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let span = lexer.span_of($value.len());
            lexer.push(MK_TOKEN!($kind, String::from($value), span));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
