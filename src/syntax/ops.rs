use crate::syntax::ast::{InfixOp, PrefixOp};
use crate::syntax::token::TokenKind;

/// Binding strength, weakest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

pub trait AsOperator {
    fn as_prefix_op(&self) -> Option<PrefixOp>;
    fn as_infix_op(&self) -> Option<InfixOp>;
    fn precedence(&self) -> Precedence;
}

impl AsOperator for TokenKind {
    fn as_prefix_op(&self) -> Option<PrefixOp> {
        match *self {
            TokenKind::Bang => Some(PrefixOp::Not),
            TokenKind::Minus => Some(PrefixOp::Minus),
            _ => None,
        }
    }

    fn as_infix_op(&self) -> Option<InfixOp> {
        match *self {
            TokenKind::Plus => Some(InfixOp::Plus),
            TokenKind::Minus => Some(InfixOp::Minus),
            TokenKind::Asterisk => Some(InfixOp::Times),
            TokenKind::Slash => Some(InfixOp::Div),
            TokenKind::Lt => Some(InfixOp::Lt),
            TokenKind::Gt => Some(InfixOp::Gt),
            TokenKind::Eq => Some(InfixOp::EqEq),
            TokenKind::NotEq => Some(InfixOp::NotEq),
            _ => None,
        }
    }

    fn precedence(&self) -> Precedence {
        match *self {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::OpenParen => Precedence::Call,
            TokenKind::OpenSquare => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}
