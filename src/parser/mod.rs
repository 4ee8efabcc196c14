//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (assignments, blocks, expression statements)
//! - Primary expressions (literals, identifiers, arrays, maps, grouping,
//!   unary and prefix update forms)
//! - Postfix chains (calls, member and index access, postfix updates)
//! - Binary expressions through precedence climbing
//!
//! Tokens are classified into NUD (null denotation) and LED (left
//! denotation) roles by exhaustive matches in `lookups`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
