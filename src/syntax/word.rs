use crate::syntax::token::TokenKind;

pub trait Keyword {
    fn keyword(&self) -> Option<TokenKind>;
}

impl Keyword for str {
    fn keyword(&self) -> Option<TokenKind> {
        match self {
            "let" => Some(TokenKind::Let),
            "func" => Some(TokenKind::Function),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            _ => None,
        }
    }
}

/// Reserved-word kind for an identifier-shaped lexeme, or `Ident`.
pub fn lookup_identifier(word: &str) -> TokenKind {
    word.keyword().unwrap_or(TokenKind::Ident)
}
