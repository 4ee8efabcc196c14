//! Parser entry point.
//!
//! The parser reads through a [`TokenCursor`] it borrows from the caller and
//! builds the tree bottom-up in a single pass. Statement parsing lives in
//! `stmt`, expression parsing (primary dispatch, postfix chains and
//! precedence climbing) in `expr`, and the token classification both use in
//! `lookups`. The first syntax error aborts the parse.

use std::ops::{Deref, DerefMut};

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl},
    lexer::{cursor::TokenCursor, tokens::Token},
    Span,
};

use super::stmt::parse_stmt;

/// Maximum nesting of expressions and blocks.
pub const MAX_DEPTH: usize = 128;

/// The parsing state: a borrowed cursor over the token stream, plus how
/// deeply the current construct is nested.
///
/// Dereferences to the cursor so parsing functions can peek, test and
/// expect tokens directly on the parser.
pub struct Parser<'a> {
    cursor: &'a mut TokenCursor,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(cursor: &'a mut TokenCursor) -> Self {
        Parser { cursor, depth: 0 }
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` at the current token once `MAX_DEPTH`
    /// levels are open, before recursing any further.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep { limit: MAX_DEPTH },
                self.current().span.start.clone(),
            ));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Parses statements until EOF and wraps them in the root block.
    pub fn parse(&mut self) -> Result<BlockStmt, Error> {
        let start = self.current().span.start.clone();

        let mut body = vec![];
        while !self.eof() {
            body.push(parse_stmt(self)?);
        }

        let end = self.current().span.end.clone();
        tracing::debug!(statements = body.len(), "parsed program");

        Ok(BlockStmt {
            body,
            span: Span { start, end },
        })
    }
}

impl Deref for Parser<'_> {
    type Target = TokenCursor;

    fn deref(&self) -> &Self::Target {
        &*self.cursor
    }
}

impl DerefMut for Parser<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.cursor
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. The tokens are expected to end
/// with an EOF token, as produced by [`crate::lexer::lexer::tokenize`]; one is
/// appended if missing.
///
/// # Returns
///
/// The root `BlockStmt` holding every top-level statement in order, or the
/// first syntax error encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: Vec<Token>) -> Result<BlockStmt, Error> {
    let mut cursor = TokenCursor::new(tokens);
    Parser::new(&mut cursor).parse()
}
