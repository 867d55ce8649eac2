#![allow(dead_code)]

use arbok::syntax::ast::*;

pub fn parse_program(source: &str) -> Program {
    match arbok::parse(source) {
        Ok(program) => program,
        Err(errors) => panic!("{:?} failed to parse:\n{}", source, errors),
    }
}

pub fn single_statement(source: &str) -> Statement {
    let mut program = parse_program(source);
    assert_eq!(program.0.len(), 1, "expected exactly one statement in {:?}, got {:?}", source, program.0);
    program.0.remove(0)
}

pub fn single_expression(source: &str) -> Expression {
    match single_statement(source) {
        Statement::Expression(_, expression) => expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

pub fn assert_integer(expression: &Expression, expected: i64) {
    match *expression {
        Expression::Integer(ref token, value) => {
            assert_eq!(value, expected);
            assert_eq!(token.literal, expected.to_string());
        }
        ref other => panic!("expected integer {}, got {:?}", expected, other),
    }
}

pub fn assert_boolean(expression: &Expression, expected: bool) {
    match *expression {
        Expression::Boolean(ref token, value) => {
            assert_eq!(value, expected);
            assert_eq!(token.literal, expected.to_string());
        }
        ref other => panic!("expected boolean {}, got {:?}", expected, other),
    }
}

pub fn assert_identifier(expression: &Expression, expected: &str) {
    match *expression {
        Expression::Identifier(ref id) => {
            assert_eq!(id.name, expected);
            assert_eq!(id.token.literal, expected);
        }
        ref other => panic!("expected identifier {}, got {:?}", expected, other),
    }
}

pub fn assert_string(expression: &Expression, expected: &str) {
    match *expression {
        Expression::String(_, ref value) => assert_eq!(value, expected),
        ref other => panic!("expected string {:?}, got {:?}", expected, other),
    }
}

/// Checks an infix node whose operands render as `left` and `right`.
pub fn assert_infix(expression: &Expression, left: &str, op: InfixOp, right: &str) {
    match *expression {
        Expression::Infix(_, actual_op, ref l, ref r) => {
            assert_eq!(actual_op, op);
            assert_eq!(l.to_string(), left);
            assert_eq!(r.to_string(), right);
        }
        ref other => panic!("expected infix {}, got {:?}", op, other),
    }
}

pub fn error_messages(source: &str) -> Vec<String> {
    let (_, errors) = arbok::syntax::parse(source);
    errors.iter().map(|e| e.to_string()).collect()
}
