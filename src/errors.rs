use crate::syntax::token::TokenKind;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    NoPrefixParser(TokenKind),
    InvalidInteger(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(fmt, "expected next token to be {}, got {} instead", expected, found)
            }
            ParseError::NoPrefixParser(kind) => {
                write!(fmt, "no prefix parse function for {} found", kind)
            }
            ParseError::InvalidInteger(ref literal) => {
                write!(fmt, "could not parse {:?} as integer", literal)
            }
        }
    }
}

impl Error for ParseError {}

/// Every diagnostic recorded while parsing one input, in order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|e| e.to_string()).collect()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "parser ran into errors:")?;
        for error in &self.0 {
            writeln!(fmt, "\t{}", error)?;
        }
        Ok(())
    }
}

impl Error for ParseErrors {}
