use crate::{
    errors::errors::{Error, ErrorImpl},
    Span,
};

use super::{
    ast::{Expr, Identifier},
    operators::{BinaryOperator, UnaryOperator, UpdateOperator},
};

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

/// Literal Expression
/// A string, number, boolean or null, along with its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub raw: String,
    pub span: Span,
}

/// Variable Expression
/// A reference to a named value.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub span: Span,
}

// CONTAINERS

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
    pub span: Span,
}

/// Map Expression
///
/// Entries keep source order. Keys may repeat; which one wins is up to
/// whoever evaluates the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MapExpr {
    pub entries: Vec<(LiteralExpr, Expr)>,
    pub span: Span,
}

// COMPLEX

#[derive(Debug, Clone, PartialEq)]
pub enum MemberProperty {
    /// `object.name`
    Identifier(Identifier),
    /// `object[expr]`
    Computed(Box<Expr>),
}

/// Member Expression
/// Property access, either `a.b` or `a[b]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: MemberProperty,
    pub span: Span,
}

impl MemberExpr {
    pub fn is_computed(&self) -> bool {
        matches!(self.property, MemberProperty::Computed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: UnaryOperator,
    pub argument: Box<Expr>,
    pub span: Span,
}

/// Update Expression
/// `++x`, `x--` and friends.
///
/// Only constructible through [`UpdateExpr::new`], which rejects arguments
/// that are not variables or member accesses.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpr {
    operator: UpdateOperator,
    argument: Box<Expr>,
    is_prefix: bool,
    span: Span,
}

impl UpdateExpr {
    pub fn new(
        operator: UpdateOperator,
        argument: Expr,
        is_prefix: bool,
        span: Span,
    ) -> Result<Self, Error> {
        if !argument.is_lvalue() {
            return Err(Error::new(
                ErrorImpl::InvalidLvalue {
                    found: argument.get_expr_type().to_string(),
                },
                argument.get_span().start.clone(),
            ));
        }

        Ok(UpdateExpr {
            operator,
            argument: Box::new(argument),
            is_prefix,
            span,
        })
    }

    pub fn operator(&self) -> UpdateOperator {
        self.operator
    }

    pub fn argument(&self) -> &Expr {
        &self.argument
    }

    pub fn is_prefix(&self) -> bool {
        self.is_prefix
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub(crate) fn span_mut(&mut self) -> &mut Span {
        &mut self.span
    }
}
