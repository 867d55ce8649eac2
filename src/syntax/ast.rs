//! Syntax tree produced by the parser.
//!
//! Every node keeps the token it started from (first field of each variant),
//! which is only consulted for diagnostics and rendering. Children are owned
//! exclusively by their parent and never mutated after construction.

use crate::syntax::token::Token;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOp {
    Not,
    Minus,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOp {
    Plus,
    Minus,
    Times,
    Div,
    Lt,
    Gt,
    EqEq,
    NotEq,
}

impl PrefixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOp::Not => "!",
            PrefixOp::Minus => "-",
        }
    }
}

impl InfixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            InfixOp::Plus => "+",
            InfixOp::Minus => "-",
            InfixOp::Times => "*",
            InfixOp::Div => "/",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::EqEq => "==",
            InfixOp::NotEq => "!=",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn from_token(token: Token) -> Identifier {
        let name = token.literal.clone();
        Identifier { token: token, name: name }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Statement>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Function {
    pub parameters: Vec<Identifier>,
    pub body: Block,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(Identifier),
    Integer(Token, i64),
    Boolean(Token, bool),
    String(Token, String),
    Array(Token, Vec<Expression>),
    /// Pairs in source order; duplicate keys are kept.
    Hash(Token, Vec<(Expression, Expression)>),
    Prefix(Token, PrefixOp, Box<Expression>),
    Infix(Token, InfixOp, Box<Expression>, Box<Expression>),
    If(Token, Box<Expression>, Block, Option<Block>),
    Function(Token, Function),
    Call(Token, Box<Expression>, Vec<Expression>),
    Index(Token, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn token(&self) -> &Token {
        match *self {
            Expression::Identifier(ref id) => &id.token,
            Expression::Integer(ref t, _)
            | Expression::Boolean(ref t, _)
            | Expression::String(ref t, _)
            | Expression::Array(ref t, _)
            | Expression::Hash(ref t, _)
            | Expression::Prefix(ref t, _, _)
            | Expression::Infix(ref t, _, _, _)
            | Expression::If(ref t, _, _, _)
            | Expression::Function(ref t, _)
            | Expression::Call(ref t, _, _)
            | Expression::Index(ref t, _, _) => t,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Let(Token, Identifier, Expression),
    Return(Token, Expression),
    Expression(Token, Expression),
    Block(Block),
}

impl Statement {
    pub fn token(&self) -> &Token {
        match *self {
            Statement::Let(ref t, _, _)
            | Statement::Return(ref t, _)
            | Statement::Expression(ref t, _) => t,
            Statement::Block(ref block) => &block.token,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program(pub Vec<Statement>);

impl Program {
    pub fn statements(&self) -> &[Statement] {
        &self.0
    }

    /// Literal of the first statement's token, or the empty string.
    pub fn token_literal(&self) -> &str {
        self.0.first().map(|s| s.token().literal.as_str()).unwrap_or("")
    }
}
