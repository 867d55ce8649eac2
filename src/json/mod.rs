use crate::syntax::ast::*;
use crate::syntax::token::{Token, TokenKind};
use serde::ser::{Serialize, SerializeMap, Serializer};

impl Serialize for TokenKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("literal", &self.literal)?;
        map.end()
    }
}

impl Serialize for PrefixOp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for InfixOp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Program {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "Program")?;
        map.serialize_entry("body", &self.0)?;
        map.end()
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "Identifier")?;
        map.serialize_entry("name", &self.name)?;
        map.end()
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "BlockStatement")?;
        map.serialize_entry("body", &self.statements)?;
        map.end()
    }
}

impl Serialize for Statement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        match *self {
            Statement::Let(_, ref name, ref value) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "LetStatement")?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            Statement::Return(_, ref argument) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "ReturnStatement")?;
                map.serialize_entry("argument", argument)?;
                map.end()
            }
            Statement::Expression(_, ref expression) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "ExpressionStatement")?;
                map.serialize_entry("expression", expression)?;
                map.end()
            }
            Statement::Block(ref block) => block.serialize(serializer),
        }
    }
}

struct HashPair<'a>(&'a Expression, &'a Expression);

impl<'a> Serialize for HashPair<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("key", self.0)?;
        map.serialize_entry("value", self.1)?;
        map.end()
    }
}

impl Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let mut map = serializer.serialize_map(None)?;
        match *self {
            Expression::Identifier(ref id) => {
                map.serialize_entry("type", "Identifier")?;
                map.serialize_entry("name", &id.name)?;
            }
            Expression::Integer(_, value) => {
                map.serialize_entry("type", "IntegerLiteral")?;
                map.serialize_entry("value", &value)?;
            }
            Expression::Boolean(_, value) => {
                map.serialize_entry("type", "BooleanLiteral")?;
                map.serialize_entry("value", &value)?;
            }
            Expression::String(_, ref value) => {
                map.serialize_entry("type", "StringLiteral")?;
                map.serialize_entry("value", value)?;
            }
            Expression::Array(_, ref elements) => {
                map.serialize_entry("type", "ArrayLiteral")?;
                map.serialize_entry("elements", elements)?;
            }
            Expression::Hash(_, ref pairs) => {
                let pairs: Vec<HashPair> = pairs.iter().map(|&(ref k, ref v)| HashPair(k, v)).collect();
                map.serialize_entry("type", "HashLiteral")?;
                map.serialize_entry("pairs", &pairs)?;
            }
            Expression::Prefix(_, op, ref operand) => {
                map.serialize_entry("type", "PrefixExpression")?;
                map.serialize_entry("operator", &op)?;
                map.serialize_entry("operand", operand)?;
            }
            Expression::Infix(_, op, ref left, ref right) => {
                map.serialize_entry("type", "InfixExpression")?;
                map.serialize_entry("operator", &op)?;
                map.serialize_entry("left", left)?;
                map.serialize_entry("right", right)?;
            }
            Expression::If(_, ref condition, ref consequence, ref alternative) => {
                map.serialize_entry("type", "IfExpression")?;
                map.serialize_entry("condition", condition)?;
                map.serialize_entry("consequence", consequence)?;
                map.serialize_entry("alternative", alternative)?;
            }
            Expression::Function(_, ref function) => {
                map.serialize_entry("type", "FunctionLiteral")?;
                map.serialize_entry("parameters", &function.parameters)?;
                map.serialize_entry("body", &function.body)?;
            }
            Expression::Call(_, ref callee, ref arguments) => {
                map.serialize_entry("type", "CallExpression")?;
                map.serialize_entry("callee", callee)?;
                map.serialize_entry("arguments", arguments)?;
            }
            Expression::Index(_, ref collection, ref index) => {
                map.serialize_entry("type", "IndexExpression")?;
                map.serialize_entry("collection", collection)?;
                map.serialize_entry("index", index)?;
            }
        };

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax;
    use serde_json::json;

    fn to_json(source: &str) -> serde_json::Value {
        let (program, errors) = syntax::parse(source);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        serde_json::to_value(&program).unwrap()
    }

    #[test]
    fn prefix_operand_is_nested() {
        assert_eq!(to_json("-5"), json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "PrefixExpression",
                    "operator": "-",
                    "operand": { "type": "IntegerLiteral", "value": 5 }
                }
            }]
        }));
    }

    #[test]
    fn if_without_else_has_null_alternative() {
        let value = to_json("if (x) { y }");
        let expression = &value["body"][0]["expression"];
        assert_eq!(expression["type"], "IfExpression");
        assert!(expression["alternative"].is_null());
        assert_eq!(expression["consequence"]["body"][0]["expression"]["name"], "y");
    }

    #[test]
    fn tokens_carry_kind_and_literal() {
        let token = syntax::token::Token::new(syntax::token::TokenKind::NotEq, "!=");
        assert_eq!(serde_json::to_value(&token).unwrap(), json!({ "kind": "!=", "literal": "!=" }));
    }
}
