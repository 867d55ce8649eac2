mod support;

use arbok::syntax::ast::*;
use support::*;

#[test]
fn prefix_expressions() {
    let tests = [("!5;", PrefixOp::Not, "5"), ("-15;", PrefixOp::Minus, "15"),
                 ("!true;", PrefixOp::Not, "true"), ("!false;", PrefixOp::Not, "false")];

    for &(source, op, operand) in tests.iter() {
        match single_expression(source) {
            Expression::Prefix(token, actual, right) => {
                assert_eq!(actual, op);
                assert_eq!(token.literal, op.as_str());
                assert_eq!(right.to_string(), operand);
            }
            other => panic!("{:?} is not a prefix expression: {:?}", source, other),
        }
    }
}

#[test]
fn infix_expressions() {
    let tests = [
        ("5 + 5;", "5", InfixOp::Plus, "5"),
        ("5 - 5;", "5", InfixOp::Minus, "5"),
        ("5 * 5;", "5", InfixOp::Times, "5"),
        ("5 / 5;", "5", InfixOp::Div, "5"),
        ("5 > 5;", "5", InfixOp::Gt, "5"),
        ("5 < 5;", "5", InfixOp::Lt, "5"),
        ("5 == 5;", "5", InfixOp::EqEq, "5"),
        ("5 != 5;", "5", InfixOp::NotEq, "5"),
        ("true == true", "true", InfixOp::EqEq, "true"),
        ("true != false", "true", InfixOp::NotEq, "false"),
        ("false == false", "false", InfixOp::EqEq, "false"),
    ];

    for &(source, left, op, right) in tests.iter() {
        assert_infix(&single_expression(source), left, op, right);
    }
}

#[test]
fn call_expression_arguments() {
    match single_expression("add(1, 2 * 3, 4 + 5);") {
        Expression::Call(token, callee, arguments) => {
            assert_eq!(token.literal, "(");
            assert_identifier(&callee, "add");
            assert_eq!(arguments.len(), 3);
            assert_integer(&arguments[0], 1);
            assert_infix(&arguments[1], "2", InfixOp::Times, "3");
            assert_infix(&arguments[2], "4", InfixOp::Plus, "5");
        }
        other => panic!("not a call: {:?}", other),
    }
}

#[test]
fn calls_without_arguments() {
    match single_expression("tick()") {
        Expression::Call(_, callee, arguments) => {
            assert_identifier(&callee, "tick");
            assert!(arguments.is_empty());
        }
        other => panic!("not a call: {:?}", other),
    }
}

#[test]
fn calls_can_be_chained() {
    match single_expression("curry(1)(2)") {
        Expression::Call(_, callee, arguments) => {
            assert_eq!(callee.to_string(), "curry(1)");
            assert_integer(&arguments[0], 2);
        }
        other => panic!("not a call: {:?}", other),
    }
}

#[test]
fn array_literals() {
    match single_expression("[1, 2 * 2, 3 + 3]") {
        Expression::Array(token, elements) => {
            assert_eq!(token.literal, "[");
            assert_eq!(elements.len(), 3);
            assert_integer(&elements[0], 1);
            assert_infix(&elements[1], "2", InfixOp::Times, "2");
            assert_infix(&elements[2], "3", InfixOp::Plus, "3");
        }
        other => panic!("not an array: {:?}", other),
    }

    match single_expression("[]") {
        Expression::Array(_, elements) => assert!(elements.is_empty()),
        other => panic!("not an array: {:?}", other),
    }
}

#[test]
fn index_expressions() {
    match single_expression("myArray[1 + 1]") {
        Expression::Index(token, collection, index) => {
            assert_eq!(token.literal, "[");
            assert_identifier(&collection, "myArray");
            assert_infix(&index, "1", InfixOp::Plus, "1");
        }
        other => panic!("not an index expression: {:?}", other),
    }
}

#[test]
fn hash_literal_with_string_keys() {
    match single_expression("{\"one\": 1, \"two\": 2, \"three\": 3}") {
        Expression::Hash(token, pairs) => {
            assert_eq!(token.literal, "{");
            assert_eq!(pairs.len(), 3);
            let expected = [("one", 1), ("two", 2), ("three", 3)];
            for (&(ref key, ref value), &(name, number)) in pairs.iter().zip(expected.iter()) {
                assert_string(key, name);
                assert_integer(value, number);
            }
        }
        other => panic!("not a hash: {:?}", other),
    }
}

#[test]
fn empty_hash_literal() {
    match single_expression("{}") {
        Expression::Hash(_, pairs) => assert!(pairs.is_empty()),
        other => panic!("not a hash: {:?}", other),
    }
}

#[test]
fn hash_keys_may_be_any_expression() {
    match single_expression("{1: 0 + 1, true: 10 - 8, \"thr\" + \"ee\": 15 / 5, 1: 2}") {
        Expression::Hash(_, pairs) => {
            assert_eq!(pairs.len(), 4);
            assert_integer(&pairs[0].0, 1);
            assert_infix(&pairs[0].1, "0", InfixOp::Plus, "1");
            assert_boolean(&pairs[1].0, true);
            assert_infix(&pairs[1].1, "10", InfixOp::Minus, "8");
            assert_infix(&pairs[2].0, "\"thr\"", InfixOp::Plus, "\"ee\"");
            assert_infix(&pairs[2].1, "15", InfixOp::Div, "5");
            // duplicates are kept in source order
            assert_integer(&pairs[3].0, 1);
            assert_integer(&pairs[3].1, 2);
        }
        other => panic!("not a hash: {:?}", other),
    }
}

#[test]
fn string_literals_render_quoted() {
    let expression = single_expression("\"hello\" + \" world\"");
    assert_eq!(expression.to_string(), "(\"hello\" + \" world\")");
}
