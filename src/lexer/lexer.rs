use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::LexError, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, EOF_PAYLOAD, PUNCTUATION_LOOKUP, RESERVED_LOOKUP};

/// Handles one lexeme matched at the cursor and advances past it.
pub type LexemeHandler = fn(&mut Lexer<'_>, &str) -> Result<(), LexError>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: LexemeHandler,
}

lazy_static! {
    // Tried in order; every pattern is anchored at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[\t\n\x0B\x0C\r ]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^(true|false|null)").unwrap(), handler: literal_handler },
        RegexPattern { regex: Regex::new("^[{}\\[\\]:,]").unwrap(), handler: punctuation_handler },
    ];
}

/// Cursor over the source text plus the tokens produced so far.
#[derive(Clone)]
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Error for a character no pattern accepts.
    fn unrecognised(&self, character: char) -> LexError {
        match character {
            '"' => LexError::UnterminatedString { start_position: self.pos },
            't' | 'f' | 'n' => LexError::UnrecognizedLiteral { position: self.pos },
            _ => LexError::UnrecognizedCharacter { character, position: self.pos },
        }
    }
}

fn skip_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), LexError> {
    lexer.advance_n(lexeme.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), LexError> {
    // Contents are taken verbatim, backslashes included.
    let contents = &lexeme[1..lexeme.len() - 1];

    lexer.push(MK_TOKEN!(TokenKind::String, contents.to_string(), MK_SPAN!(lexer, lexeme.len())));
    lexer.advance_n(lexeme.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), LexError> {
    lexer.push(MK_TOKEN!(TokenKind::Number, lexeme.to_string(), MK_SPAN!(lexer, lexeme.len())));
    lexer.advance_n(lexeme.len());
    Ok(())
}

fn literal_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), LexError> {
    let Some(kind) = RESERVED_LOOKUP.get(lexeme) else {
        return Err(LexError::UnrecognizedLiteral { position: lexer.pos });
    };

    lexer.push(MK_TOKEN!(*kind, lexeme.to_string(), MK_SPAN!(lexer, lexeme.len())));
    lexer.advance_n(lexeme.len());
    Ok(())
}

pub(crate) fn punctuation_handler(lexer: &mut Lexer, lexeme: &str) -> Result<(), LexError> {
    let character = lexeme.chars().next().unwrap_or_default();
    let Some(kind) = PUNCTUATION_LOOKUP.get(&character) else {
        return Err(LexError::UnrecognizedPunctuation { character });
    };

    lexer.push(MK_TOKEN!(*kind, character.to_string(), MK_SPAN!(lexer, character.len_utf8())));
    lexer.advance_n(character.len_utf8());
    Ok(())
}

/// Splits `source` into tokens, ending with a single end-of-input token.
///
/// Lexing stops at the first character no pattern accepts and returns that
/// error; no partial sequence is produced.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while let Some(character) = lex.at() {
        let remaining = lex.remainder();
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|found| (pattern.handler, found.as_str())));

        match matched {
            Some((handler, lexeme)) => handler(&mut lex, lexeme)?,
            None => return Err(lex.unrecognised(character)),
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from(EOF_PAYLOAD), MK_SPAN!(lex, 0)));
    Ok(lex.tokens)
}
