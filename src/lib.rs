pub mod errors;
pub mod syntax;
pub mod render;
pub mod json;
pub mod repl;

pub use errors::{ParseError, ParseErrors};

use syntax::ast::Program;

/// Parses `code`, failing if the parser recorded any error.
pub fn parse(code: &str) -> Result<Program, ParseErrors> {
    let (program, errors) = syntax::parse(code);
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(ParseErrors(errors))
    }
}

/// Parses `code` and renders the tree back to its fully parenthesized form.
pub fn transform(code: &str) -> Result<String, ParseErrors> {
    let program = parse(code)?;
    Ok(program.to_string())
}
