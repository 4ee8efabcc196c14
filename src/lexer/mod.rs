//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of identifiers, literals, operators and punctuation
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! It also provides the [`cursor::TokenCursor`] the parser reads through,
//! including the binary operator precedence queries.

pub mod cursor;
pub mod lexer;
pub mod tokens;
