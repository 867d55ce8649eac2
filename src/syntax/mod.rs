pub mod ast;
pub mod token;
pub mod ops;
pub mod scanner;
pub mod parser;
mod char;
mod word;

pub use self::word::lookup_identifier;

use crate::errors::ParseError;

/// Tokenizes and parses `source`, returning the tree together with every
/// error recorded on the way. The tree is only trustworthy when the list is
/// empty.
pub fn parse(source: &str) -> (ast::Program, Vec<ParseError>) {
    parse_bytes(source.as_bytes())
}

/// Like [`parse`], for input that may not be valid UTF-8.
pub fn parse_bytes(source: &[u8]) -> (ast::Program, Vec<ParseError>) {
    parser::Parser::new(scanner::Scanner::from_bytes(source)).parse()
}
