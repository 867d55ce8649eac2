use crate::errors::ParseError;
use crate::syntax::ast::*;
use crate::syntax::ops::{AsOperator, Precedence};
use crate::syntax::scanner::Scanner;
use crate::syntax::token::{Token, TokenKind};
use std::mem;

/// Recursive-descent statement parser with a Pratt expression core.
///
/// The parser always looks at two tokens: `current`, the token being
/// handled, and `peek`, the one after it. Structural mismatches are recorded
/// in `errors` and the offending node comes back as `None`; parsing itself
/// never stops early.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(scanner: Scanner<'a>) -> Parser<'a> {
        let mut parser = Parser {
            scanner: scanner,
            current: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses the whole input and hands back the tree with every recorded error.
    pub fn parse(mut self) -> (Program, Vec<ParseError>) {
        let program = self.parse_program();
        (program, self.errors)
    }

    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Program(statements)
    }

    fn next_token(&mut self) {
        let next = self.scanner.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.errors.push(ParseError::UnexpectedToken { expected: kind, found: self.peek.kind });
            false
        }
    }

    fn peek_precedence(&self) -> Precedence {
        self.peek.kind.precedence()
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::from_token(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_to_semicolon();
        Some(Statement::Let(token, name, value?))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_to_semicolon();
        Some(Statement::Return(token, value?))
    }

    // Anything between the value and the `;` is dropped without complaint.
    fn skip_to_semicolon(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression(token, expression?))
    }

    fn parse_block(&mut self) -> Block {
        let token = self.current.clone();
        let mut statements = Vec::new();
        self.next_token();

        while !self.current_is(TokenKind::CloseCurly) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        if self.current_is(TokenKind::Eof) {
            self.errors.push(ParseError::UnexpectedToken {
                expected: TokenKind::CloseCurly,
                found: TokenKind::Eof,
            });
        }

        Block { token: token, statements: statements }
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            self.next_token();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Ident => Some(Expression::Identifier(Identifier::from_token(self.current.clone()))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => {
                let value = self.current_is(TokenKind::True);
                Some(Expression::Boolean(self.current.clone(), value))
            }
            TokenKind::String => {
                let value = self.current.literal.clone();
                Some(Expression::String(self.current.clone(), value))
            }
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::OpenParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::OpenSquare => self.parse_array_literal(),
            TokenKind::OpenCurly => self.parse_hash_literal(),
            kind => {
                self.errors.push(ParseError::NoPrefixParser(kind));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.current.kind {
            TokenKind::OpenParen => self.parse_call_expression(left),
            TokenKind::OpenSquare => self.parse_index_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(self.current.clone(), value)),
            Err(_) => {
                self.errors.push(ParseError::InvalidInteger(self.current.literal.clone()));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let op = token.kind.as_prefix_op()?;
        self.next_token();

        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(token, op, Box::new(operand)))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let op = match token.kind.as_infix_op() {
            Some(op) => op,
            None => return Some(left),
        };
        let precedence = token.kind.precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(token, op, Box::new(left), Box::new(right)))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::CloseParen) {
            return None;
        }
        expression
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::OpenParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::CloseParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::OpenCurly) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::OpenCurly) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expression::If(token, Box::new(condition?), consequence, alternative))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::OpenParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::OpenCurly) {
            return None;
        }
        let body = self.parse_block();

        Some(Expression::Function(token, Function { parameters: parameters, body: body }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::CloseParen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        parameters.push(Identifier::from_token(self.current.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(Identifier::from_token(self.current.clone()));
        }

        if !self.expect_peek(TokenKind::CloseParen) {
            return None;
        }
        Some(parameters)
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let elements = self.parse_expression_list(TokenKind::CloseSquare)?;
        Some(Expression::Array(token, elements))
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::CloseCurly) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest);

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest);
            pairs.push((key, value));

            if !self.peek_is(TokenKind::CloseCurly) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::CloseCurly) {
            return None;
        }

        let pairs = pairs.into_iter()
            .map(|(key, value)| Some((key?, value?)))
            .collect::<Option<Vec<_>>>()?;
        Some(Expression::Hash(token, pairs))
    }

    fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(TokenKind::CloseParen)?;
        Some(Expression::Call(token, Box::new(callee), arguments))
    }

    fn parse_index_expression(&mut self, collection: Expression) -> Option<Expression> {
        let token = self.current.clone();
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::CloseSquare) {
            return None;
        }
        Some(Expression::Index(token, Box::new(collection), Box::new(index?)))
    }

    /// Comma separated expressions closed by `end`, shared by call arguments
    /// and array elements. Parsing continues past a bad element so later
    /// mismatches are still reported.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        if self.peek_is(end) {
            self.next_token();
            return Some(Vec::new());
        }

        self.next_token();
        let mut list = vec![self.parse_expression(Precedence::Lowest)];

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest));
        }

        if !self.expect_peek(end) {
            return None;
        }
        list.into_iter().collect()
    }
}
