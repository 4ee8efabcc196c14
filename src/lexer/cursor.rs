use std::rc::Rc;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::tokens::{BindingPower, Token, TokenKind};

/// Forward-only reader over a materialised token stream.
///
/// The stream always ends in an EOF token: looking past the end yields that
/// token again and `next` never moves beyond it. Lookahead is bounded by the
/// callers to the current token plus two.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let span = match tokens.last() {
                Some(last) => Span {
                    start: last.span.end.clone(),
                    end: last.span.end.clone(),
                },
                None => Span {
                    start: Position(0, Rc::new(String::from("shell"))),
                    end: Position(0, Rc::new(String::from("shell"))),
                },
            };
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), String::new(), span));
        }

        TokenCursor { tokens, pos: 0 }
    }

    /// Returns the token under the cursor.
    pub fn current(&self) -> &Token {
        self.look(0)
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Returns the token `n` positions ahead without advancing.
    pub fn look(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Advances past the current token and returns it.
    pub fn next(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    pub fn eof(&self) -> bool {
        self.current_kind() == TokenKind::EOF
    }

    pub fn test(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn test_any(&self, kinds: &[TokenKind]) -> bool {
        self.current().is_one_of_many(kinds)
    }

    /// Consumes the current token if it is of `kind`.
    ///
    /// Fails with `message` when given, otherwise with a generic
    /// expected/found error naming the kind.
    pub fn expect(&mut self, kind: TokenKind, message: Option<&str>) -> Result<Token, Error> {
        if self.test(kind) {
            return Ok(self.next());
        }

        let token = self.current();
        let error = match message {
            Some(message) => ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from(message),
            },
            None => ErrorImpl::ExpectedToken {
                expected: kind.to_string(),
                found: token.value.clone(),
            },
        };

        Err(Error::new(error, token.span.start.clone()))
    }

    /// Consumes the current token if it is any of `kinds`.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Result<Token, Error> {
        if self.test_any(kinds) {
            return Ok(self.next());
        }

        let expected = kinds
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        let token = self.current();

        Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected,
                found: token.value.clone(),
            },
            token.span.start.clone(),
        ))
    }

    pub fn is_binary_operator(&self) -> bool {
        self.current().is_binary_operator()
    }

    pub fn binary_precedence(&self) -> BindingPower {
        self.current().binary_precedence()
    }
}
