use crate::syntax;
use crate::errors::ParseErrors;
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Hello, welcome to arbok!";
pub const PROMPT: &str = ">> ";

/// Reads one line at a time, parses it with a fresh parser and prints either
/// the rendered program or the recorded errors. `exit` ends the session.
///
/// Lines are read as raw bytes; bytes that are not valid UTF-8 become
/// ILLEGAL tokens instead of ending the session.
pub fn start<R: BufRead, W: Write>(mut input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", WELCOME)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }

        let line = strip_line_ending(&buffer);
        if line == b"exit" {
            break;
        }

        let (program, errors) = syntax::parse_bytes(line);
        if errors.is_empty() {
            writeln!(out, "{}", program)?;
        } else {
            write!(out, "{}", ParseErrors(errors))?;
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        session_bytes(input.as_bytes())
    }

    fn session_bytes(input: &[u8]) -> String {
        let mut out = Vec::new();
        start(input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_each_line() {
        assert_eq!(session("1 + 2 * 3\nlet x = 5;\n"),
                   "Hello, welcome to arbok!\n>> (1 + (2 * 3))\n>> let x = 5;\n>> ");
    }

    #[test]
    fn errors_are_tab_prefixed() {
        assert_eq!(session("let x 5;\n"),
                   "Hello, welcome to arbok!\n>> parser ran into errors:\n\
                    \texpected next token to be =, got INTEGER instead\n>> ");
    }

    #[test]
    fn exit_stops_reading() {
        assert_eq!(session("exit\n1\n"), "Hello, welcome to arbok!\n>> ");
    }

    #[test]
    fn exit_must_match_the_whole_line() {
        assert_eq!(session("  exit \nexit\r\n1\n"), "Hello, welcome to arbok!\n>> exit\n>> ");
    }

    #[test]
    fn invalid_utf8_line_does_not_end_the_session() {
        assert_eq!(session_bytes(b"1 + 2\n\xff\n3 * 4\n"),
                   "Hello, welcome to arbok!\n>> (1 + 2)\n>> parser ran into errors:\n\
                    \tno prefix parse function for ILLEGAL found\n>> (3 * 4)\n>> ");
    }

    #[test]
    fn last_line_without_newline_is_parsed() {
        assert_eq!(session("a + b"), "Hello, welcome to arbok!\n>> (a + b)\n>> ");
    }
}
