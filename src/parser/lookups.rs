use crate::lexer::tokens::TokenKind;

/// What a token starts when it appears where an expression is expected.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Nud {
    Literal,
    Identifier,
    Array,
    Map,
    Grouping,
    PrefixUpdate,
    Unary,
    /// Not valid at the start of an expression.
    None,
}

/// How a token extends an expression it directly follows.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Led {
    Call,
    Member,
    ComputedMember,
    PostfixUpdate,
}

// Both tables match every token kind by name, so a new kind has to be
// placed in each of them before the crate compiles again.

pub fn nud_for(kind: TokenKind) -> Nud {
    match kind {
        TokenKind::Number | TokenKind::String => Nud::Literal,
        TokenKind::Identifier => Nud::Identifier,
        TokenKind::OpenBracket => Nud::Array,
        TokenKind::OpenCurly => Nud::Map,
        TokenKind::OpenParen => Nud::Grouping,
        TokenKind::PlusPlus | TokenKind::MinusMinus => Nud::PrefixUpdate,
        TokenKind::Not | TokenKind::Plus | TokenKind::Dash => Nud::Unary,
        TokenKind::EOF
        | TokenKind::CloseBracket
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::Or
        | TokenKind::And
        | TokenKind::Dot
        | TokenKind::Semicolon
        | TokenKind::Colon
        | TokenKind::Comma
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Percent => Nud::None,
    }
}

pub fn led_for(kind: TokenKind) -> Option<Led> {
    match kind {
        TokenKind::OpenParen => Some(Led::Call),
        TokenKind::Dot => Some(Led::Member),
        TokenKind::OpenBracket => Some(Led::ComputedMember),
        TokenKind::PlusPlus | TokenKind::MinusMinus => Some(Led::PostfixUpdate),
        TokenKind::EOF
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::Identifier
        | TokenKind::CloseBracket
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::CloseParen
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::Not
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::Or
        | TokenKind::And
        | TokenKind::Semicolon
        | TokenKind::Colon
        | TokenKind::Comma
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Slash
        | TokenKind::Star
        | TokenKind::Percent => None,
    }
}
