use std::fmt::Display;

use crate::Span;

use super::{
    expressions::{
        ArrayExpr, BinaryExpr, CallExpr, LiteralExpr, MapExpr, MemberExpr, UnaryExpr, UpdateExpr,
        VariableExpr,
    },
    statements::{AssignStmt, BlockStmt, ExpressionStmt},
};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    BlockStmt,
    AssignStmt,
    ExpressionStmt,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Assign(AssignStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Block(_) => StmtType::BlockStmt,
            Stmt::Assign(_) => StmtType::AssignStmt,
            Stmt::Expression(_) => StmtType::ExpressionStmt,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Assign(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

/// Expression Types
///
/// Discriminant of [`Expr`], used in diagnostics.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Variable,
    Member,
    Call,
    Array,
    Map,
    Binary,
    Unary,
    Update,
}

impl Display for ExprType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An expression node.
///
/// Children are owned through `Box`/`Vec`, so a parsed program is a plain
/// tree with no sharing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Variable(VariableExpr),
    Member(MemberExpr),
    Call(CallExpr),
    Array(ArrayExpr),
    Map(MapExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Update(UpdateExpr),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Variable(_) => ExprType::Variable,
            Expr::Member(_) => ExprType::Member,
            Expr::Call(_) => ExprType::Call,
            Expr::Array(_) => ExprType::Array,
            Expr::Map(_) => ExprType::Map,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Update(_) => ExprType::Update,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Literal(expr) => &expr.span,
            Expr::Variable(expr) => &expr.span,
            Expr::Member(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Array(expr) => &expr.span,
            Expr::Map(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Update(expr) => expr.get_span(),
        }
    }

    /// Lets the parser widen a parenthesized node to cover its parentheses.
    pub(crate) fn span_mut(&mut self) -> &mut Span {
        match self {
            Expr::Literal(expr) => &mut expr.span,
            Expr::Variable(expr) => &mut expr.span,
            Expr::Member(expr) => &mut expr.span,
            Expr::Call(expr) => &mut expr.span,
            Expr::Array(expr) => &mut expr.span,
            Expr::Map(expr) => &mut expr.span,
            Expr::Binary(expr) => &mut expr.span,
            Expr::Unary(expr) => &mut expr.span,
            Expr::Update(expr) => expr.span_mut(),
        }
    }

    /// Whether the expression can be the target of `++`/`--`.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Expr::Variable(_) | Expr::Member(_))
    }
}

/// A bare name: an assignment target or a non-computed member property.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}
