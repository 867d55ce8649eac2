use crate::syntax::char::ScanByteExt;
use crate::syntax::token::{Token, TokenKind};
use crate::syntax::word::lookup_identifier;

/// Pull-based tokenizer over a fully resident source text.
///
/// The input is scanned as raw bytes, so it need not be valid UTF-8; token
/// literals are decoded lossily.
///
/// Every call to [`Scanner::next_token`] skips blanks and produces one token.
/// Once the input is exhausted it keeps answering `Eof`; as an `Iterator` it
/// yields that `Eof` exactly once and then stops.
pub struct Scanner<'a> {
    bytes: &'a [u8],
    index: usize,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner::from_bytes(source.as_bytes())
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Scanner<'a> {
        Scanner {
            bytes: bytes,
            index: 0,
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.take_while(|b| b.is_blank());

        let character = match self.current_byte() {
            Some(c) => c,
            None => return Token::eof(),
        };

        if character == b'"' {
            return self.scan_string();
        } else if character.is_identifier_byte() {
            return self.scan_identifier();
        } else if character.is_decimal_digit() {
            return self.scan_number();
        }

        let start = self.index;
        let kind = if self.eat_byte(b'=') {
            if self.eat_byte(b'=') {
                TokenKind::Eq
            } else {
                TokenKind::Assign
            }
        } else if self.eat_byte(b'!') {
            if self.eat_byte(b'=') {
                TokenKind::NotEq
            } else {
                TokenKind::Bang
            }
        } else if self.eat_byte(b'+') {
            TokenKind::Plus
        } else if self.eat_byte(b'-') {
            TokenKind::Minus
        } else if self.eat_byte(b'*') {
            TokenKind::Asterisk
        } else if self.eat_byte(b'/') {
            TokenKind::Slash
        } else if self.eat_byte(b'>') {
            TokenKind::Gt
        } else if self.eat_byte(b'<') {
            TokenKind::Lt
        } else if self.eat_byte(b',') {
            TokenKind::Comma
        } else if self.eat_byte(b';') {
            TokenKind::Semicolon
        } else if self.eat_byte(b':') {
            TokenKind::Colon
        } else if self.eat_byte(b'(') {
            TokenKind::OpenParen
        } else if self.eat_byte(b')') {
            TokenKind::CloseParen
        } else if self.eat_byte(b'{') {
            TokenKind::OpenCurly
        } else if self.eat_byte(b'}') {
            TokenKind::CloseCurly
        } else if self.eat_byte(b'[') {
            TokenKind::OpenSquare
        } else if self.eat_byte(b']') {
            TokenKind::CloseSquare
        } else {
            // A lone byte may split a multi-byte character.
            self.next_byte();
            TokenKind::Illegal
        };

        Token::new(kind, self.literal(start, self.index))
    }

    fn scan_string(&mut self) -> Token {
        let start = self.index;
        self.eat_byte(b'"');
        self.take_while(|b| b != b'"');

        if self.eat_byte(b'"') {
            Token::new(TokenKind::String, self.literal(start + 1, self.index - 1))
        } else {
            Token::new(TokenKind::Illegal, self.literal(start, self.index))
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.index;
        self.take_while(|b| b.is_identifier_byte());
        let word = self.literal(start, self.index);
        Token::new(lookup_identifier(&word), word)
    }

    fn scan_number(&mut self) -> Token {
        let start = self.index;
        self.take_while(|b| b.is_decimal_digit());
        Token::new(TokenKind::Int, self.literal(start, self.index))
    }

    fn literal(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.bytes[start..end]).into_owned()
    }

    fn take_while<F>(&mut self, predicate: F) where F: Fn(u8) -> bool {
        while let Some(b) = self.current_byte() {
            if predicate(b) {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    fn current_byte(&self) -> Option<u8> {
        self.bytes.get(self.index).map(|b| *b)
    }

    fn next_byte(&mut self) -> Option<u8> {
        self.current_byte().map(|b| {
            self.index += 1;
            b
        })
    }

    fn eat_byte(&mut self, byte: u8) -> bool {
        match self.current_byte() {
            Some(b) if b == byte => {
                self.next_byte();
                true
            }
            _ => false,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}
