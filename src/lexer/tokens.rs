use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Payload carried by the end-of-input token.
pub const EOF_PAYLOAD: &str = "-1";

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map
    };

    pub static ref PUNCTUATION_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('{', TokenKind::LeftBrace);
        map.insert('}', TokenKind::RightBrace);
        map.insert('[', TokenKind::LeftBracket);
        map.insert(']', TokenKind::RightBracket);
        map.insert(':', TokenKind::Colon);
        map.insert(',', TokenKind::Comma);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    String,
    Number,
    True,
    False,
    Null,

    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Comma,
    Colon,

    EOF,
}

impl TokenKind {
    /// Name used in token dumps and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::EOF => "END_OF_INPUT",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

/// Renders the token in dump form: `<KIND, payload>`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_opener(&self) -> bool {
        self.is_one_of_many(&[TokenKind::LeftBrace, TokenKind::LeftBracket])
    }

    pub fn is_closer(&self) -> bool {
        self.is_one_of_many(&[TokenKind::RightBrace, TokenKind::RightBracket])
    }
}
