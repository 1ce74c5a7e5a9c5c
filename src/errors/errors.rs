use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::{
    lexer::tokens::TokenKind,
    validator::state::{ContainerKind, State},
};

/// Failures of the lexing pass. Each one ends the pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unclosed string starting at position {start_position}")]
    UnterminatedString { start_position: usize },
    #[error("unrecognized literal starting at position {position}")]
    UnrecognizedLiteral { position: usize },
    #[error("unrecognized punctuation: {character:?}")]
    UnrecognizedPunctuation { character: char },
    #[error("unrecognized input {character:?} starting at position {position}")]
    UnrecognizedCharacter { character: char, position: usize },
}

impl LexError {
    /// Byte offset of the failure, when the error carries one.
    pub fn get_position(&self) -> Option<usize> {
        match self {
            LexError::UnterminatedString { start_position } => Some(*start_position),
            LexError::UnrecognizedLiteral { position } => Some(*position),
            LexError::UnrecognizedPunctuation { .. } => None,
            LexError::UnrecognizedCharacter { position, .. } => Some(*position),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            LexError::UnterminatedString { .. } => "UnterminatedString",
            LexError::UnrecognizedLiteral { .. } => "UnrecognizedLiteral",
            LexError::UnrecognizedPunctuation { .. } => "UnrecognizedPunctuation",
            LexError::UnrecognizedCharacter { .. } => "UnrecognizedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            LexError::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("Add the closing `\"` to the string"))
            }
            LexError::UnrecognizedLiteral { .. } => {
                ErrorTip::Suggestion(String::from("Expected one of `true`, `false` or `null`"))
            }
            LexError::UnrecognizedPunctuation { .. } => ErrorTip::None,
            LexError::UnrecognizedCharacter { character, .. } => match character {
                '-' | '+' | '.' | 'e' | 'E' => ErrorTip::Suggestion(String::from(
                    "Only unsigned whole numbers are supported",
                )),
                '\\' => ErrorTip::Suggestion(String::from(
                    "Escape sequences are not supported",
                )),
                _ => ErrorTip::None,
            },
        }
    }
}

/// Why a token could not be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnexpectedReason {
    /// No transition exists for the token in the current state.
    NoTransition,
    /// The closer does not match the innermost open container.
    MismatchedCloser { open: ContainerKind },
    /// A closer was seen with no container open.
    DanglingCloser,
}

impl Display for UnexpectedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnexpectedReason::NoTransition => write!(f, "no transition"),
            UnexpectedReason::MismatchedCloser { open } => {
                write!(f, "closes an open {}", open)
            }
            UnexpectedReason::DanglingCloser => write!(f, "no open container"),
        }
    }
}

/// Failures of the validation pass. Each one ends the pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unexpected token {kind} at index {index} in state {state} ({reason})")]
    UnexpectedToken {
        index: usize,
        kind: TokenKind,
        state: State,
        reason: UnexpectedReason,
    },
    #[error("token sequence did not end in an accepting state ({state}, {open_containers} open)")]
    IncompleteStructure {
        index: usize,
        state: State,
        open_containers: usize,
    },
}

impl ValidationError {
    /// Index of the token that triggered the rejection.
    pub fn index(&self) -> usize {
        match self {
            ValidationError::UnexpectedToken { index, .. } => *index,
            ValidationError::IncompleteStructure { index, .. } => *index,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            ValidationError::UnexpectedToken { kind, .. } => *kind,
            ValidationError::IncompleteStructure { .. } => TokenKind::EOF,
        }
    }

    /// State the automaton was in when it rejected.
    pub fn state(&self) -> State {
        match self {
            ValidationError::UnexpectedToken { state, .. } => *state,
            ValidationError::IncompleteStructure { state, .. } => *state,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match self {
            ValidationError::UnexpectedToken { .. } => "UnexpectedToken",
            ValidationError::IncompleteStructure { .. } => "IncompleteStructure",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ValidationError::UnexpectedToken {
                reason: UnexpectedReason::MismatchedCloser { open },
                ..
            } => ErrorTip::Suggestion(format!(
                "The innermost open {} must be closed with `{}` first",
                open,
                open.closer()
            )),
            ValidationError::UnexpectedToken {
                reason: UnexpectedReason::DanglingCloser,
                ..
            } => ErrorTip::Suggestion(String::from("Nothing is open at this point")),
            ValidationError::UnexpectedToken { kind, state, .. } => ErrorTip::Suggestion(format!(
                "`{}` is not allowed in state {}",
                kind, state
            )),
            ValidationError::IncompleteStructure {
                open_containers, ..
            } if *open_containers > 0 => ErrorTip::Suggestion(format!(
                "{} container(s) left open",
                open_containers
            )),
            ValidationError::IncompleteStructure { .. } => ErrorTip::None,
        }
    }
}

/// Failures of the batch driver itself, as opposed to failures of an input.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("input folder not found: {0:?}")]
    MissingInputDirectory(PathBuf),
    #[error("output folder not found: {0:?}")]
    MissingOutputDirectory(PathBuf),
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
