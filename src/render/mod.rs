//! Renders syntax trees back to source text.
//!
//! Operator nodes are fully parenthesized, so the output spells out the
//! precedence the parser chose and parses back to the same tree.

use crate::syntax::ast::*;
use std::fmt::{self, Write};

pub fn render_program<W: Write>(out: &mut W, program: &Program) -> fmt::Result {
    render_statements(out, &program.0)
}

fn render_statements<W: Write>(out: &mut W, statements: &[Statement]) -> fmt::Result {
    for (i, statement) in statements.iter().enumerate() {
        if i > 0 {
            out.write_char(' ')?;
        }
        render_statement(out, statement)?;

        let followed = i + 1 < statements.len();
        if let Statement::Expression(..) = *statement {
            if followed {
                out.write_char(';')?;
            }
        }
    }
    Ok(())
}

pub fn render_statement<W: Write>(out: &mut W, statement: &Statement) -> fmt::Result {
    match *statement {
        Statement::Let(_, ref name, ref value) => {
            write!(out, "let {} = ", name.name)?;
            render_expression(out, value)?;
            out.write_char(';')
        }
        Statement::Return(_, ref value) => {
            out.write_str("return ")?;
            render_expression(out, value)?;
            out.write_char(';')
        }
        Statement::Expression(_, ref expression) => render_expression(out, expression),
        Statement::Block(ref block) => render_block(out, block),
    }
}

pub fn render_block<W: Write>(out: &mut W, block: &Block) -> fmt::Result {
    if block.statements.is_empty() {
        return out.write_str("{}");
    }
    out.write_str("{ ")?;
    render_statements(out, &block.statements)?;
    out.write_str(" }")
}

pub fn render_expression<W: Write>(out: &mut W, expr: &Expression) -> fmt::Result {
    match *expr {
        Expression::Identifier(ref id) => out.write_str(&id.name),
        Expression::Integer(ref token, _) | Expression::Boolean(ref token, _) => out.write_str(&token.literal),
        Expression::String(_, ref value) => write!(out, "\"{}\"", value),
        Expression::Array(_, ref elements) => {
            out.write_char('[')?;
            render_list(out, elements)?;
            out.write_char(']')
        }
        Expression::Hash(_, ref pairs) => render_hash(out, pairs),
        Expression::Prefix(_, op, ref operand) => {
            write!(out, "({}", op.as_str())?;
            render_expression(out, operand)?;
            out.write_char(')')
        }
        Expression::Infix(_, op, ref left, ref right) => {
            out.write_char('(')?;
            render_expression(out, left)?;
            write!(out, " {} ", op.as_str())?;
            render_expression(out, right)?;
            out.write_char(')')
        }
        Expression::If(_, ref condition, ref consequence, ref alternative) => {
            render_if(out, condition, consequence, alternative.as_ref())
        }
        Expression::Function(_, ref function) => render_function(out, function),
        Expression::Call(_, ref callee, ref arguments) => {
            render_expression(out, callee)?;
            out.write_char('(')?;
            render_list(out, arguments)?;
            out.write_char(')')
        }
        Expression::Index(_, ref collection, ref index) => {
            out.write_char('(')?;
            render_expression(out, collection)?;
            out.write_char('[')?;
            render_expression(out, index)?;
            out.write_str("])")
        }
    }
}

fn render_list<W: Write>(out: &mut W, expressions: &[Expression]) -> fmt::Result {
    for (i, expression) in expressions.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        render_expression(out, expression)?;
    }
    Ok(())
}

fn render_hash<W: Write>(out: &mut W, pairs: &[(Expression, Expression)]) -> fmt::Result {
    out.write_char('{')?;
    for (i, &(ref key, ref value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        render_expression(out, key)?;
        out.write_str(": ")?;
        render_expression(out, value)?;
    }
    out.write_char('}')
}

fn render_if<W: Write>(out: &mut W, condition: &Expression, consequence: &Block, alternative: Option<&Block>) -> fmt::Result {
    out.write_str("if (")?;
    render_expression(out, condition)?;
    out.write_str(") ")?;
    render_block(out, consequence)?;

    if let Some(alternative) = alternative {
        out.write_str(" else ")?;
        render_block(out, alternative)?;
    }
    Ok(())
}

fn render_function<W: Write>(out: &mut W, function: &Function) -> fmt::Result {
    out.write_str("func(")?;
    for (i, parameter) in function.parameters.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        out.write_str(&parameter.name)?;
    }
    out.write_str(") ")?;
    render_block(out, &function.body)
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_program(f, self)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_statement(f, self)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_block(f, self)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render_expression(f, self)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::token::{Token, TokenKind};

    fn ident(name: &str) -> Identifier {
        Identifier::from_token(Token::new(TokenKind::Ident, name))
    }

    #[test]
    fn let_statement_from_hand_built_tree() {
        let program = Program(vec![Statement::Let(
            Token::new(TokenKind::Let, "let"),
            ident("myVar"),
            Expression::Identifier(ident("anotherVar")),
        )]);
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn block_statement_renders_braced() {
        let block = Block {
            token: Token::new(TokenKind::OpenCurly, "{"),
            statements: vec![
                Statement::Expression(Token::new(TokenKind::Ident, "x"), Expression::Identifier(ident("x"))),
                Statement::Return(Token::new(TokenKind::Return, "return"), Expression::Identifier(ident("y"))),
            ],
        };
        assert_eq!(Statement::Block(block).to_string(), "{ x; return y; }");
    }

    #[test]
    fn empty_block() {
        let block = Block { token: Token::new(TokenKind::OpenCurly, "{"), statements: Vec::new() };
        assert_eq!(block.to_string(), "{}");
    }
}
