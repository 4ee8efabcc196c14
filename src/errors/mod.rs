//! Error types and error handling for the parser.
//!
//! This module defines the single error type surfaced by lexing and
//! parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for unexpected tokens, failed expectations
//!   and invalid update targets
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
