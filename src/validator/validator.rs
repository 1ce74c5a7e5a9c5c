//! Stack-augmented automaton over the token sequence.
//!
//! The validator keeps a current [`State`] and a stack of [`Frame`]s, one per
//! open container. Openers, closers and commas are handled structurally;
//! every other token goes through the fixed transition table in
//! [`super::lookups`]. The first rejection is final.

use crate::{
    errors::errors::{UnexpectedReason, ValidationError},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::TRANSITIONS,
    state::{ContainerKind, Frame, State},
};

/// Outcome of validating a whole token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(ValidationError),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(error) => Some(error),
        }
    }
}

/// Automaton state for a single validation. Build a new one per sequence.
#[derive(Debug)]
pub struct Validator {
    /// Current automaton state
    state: State,
    /// One frame per open container, innermost last
    stack: Vec<Frame>,
    /// Index of the next token to consume
    index: usize,
    /// First rejection, kept so later calls report it again
    error: Option<ValidationError>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Validator {
            state: State::Start,
            stack: Vec::new(),
            index: 0,
            error: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of currently open containers.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_accepting(&self) -> bool {
        self.state == State::Accept && self.stack.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.state == State::Error
    }

    /// Consumes one token.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) if the token was accepted, otherwise the rejection. Once a
    /// token has been rejected every later call returns that same rejection.
    pub fn step(&mut self, token: &Token) -> Result<(), ValidationError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let index = self.index;
        self.index += 1;

        let transition = match token.kind {
            TokenKind::LeftBrace => Ok(self.open(ContainerKind::Object)),
            TokenKind::LeftBracket => Ok(self.open(ContainerKind::Array)),
            TokenKind::RightBrace => self.close(ContainerKind::Object),
            TokenKind::RightBracket => self.close(ContainerKind::Array),
            TokenKind::Comma => self.comma(),
            TokenKind::EOF => return self.end(index),
            kind => TRANSITIONS
                .get(&(self.state, kind))
                .copied()
                .ok_or(UnexpectedReason::NoTransition),
        };

        match transition.map_err(|reason| self.unexpected(index, token.kind, reason)) {
            Ok(state) => {
                self.state = state;
                Ok(())
            }
            Err(error) => Err(self.fail(error)),
        }
    }

    /// Produces the verdict for everything consumed so far.
    pub fn finish(self) -> Verdict {
        if let Some(error) = &self.error {
            return Verdict::Rejected(error.clone());
        }

        if self.is_accepting() {
            Verdict::Accepted
        } else {
            Verdict::Rejected(ValidationError::IncompleteStructure {
                index: self.index,
                state: self.state,
                open_containers: self.stack.len(),
            })
        }
    }

    /// Opening a container is valid in every state; the frame remembers where
    /// it was opened from.
    fn open(&mut self, kind: ContainerKind) -> State {
        self.stack.push(Frame::new(kind, self.state));
        kind.initial_state()
    }

    fn close(&mut self, kind: ContainerKind) -> Result<State, UnexpectedReason> {
        let Some(top) = self.stack.last().copied() else {
            return Err(UnexpectedReason::DanglingCloser);
        };

        if top.kind != kind {
            return Err(UnexpectedReason::MismatchedCloser { open: top.kind });
        }

        self.stack.pop();
        Ok(top.resume_state())
    }

    fn comma(&self) -> Result<State, UnexpectedReason> {
        match self.state {
            State::AfterValue | State::Accept => Ok(State::ExpectingKey),
            State::AfterArrayElement => Ok(State::ExpectingArrayElement),
            State::Start
            | State::ExpectingKey
            | State::AfterKey
            | State::ExpectingColonValue
            | State::ExpectingArrayElement
            | State::Error => Err(UnexpectedReason::NoTransition),
        }
    }

    fn end(&mut self, index: usize) -> Result<(), ValidationError> {
        if self.is_accepting() {
            return Ok(());
        }

        let error = ValidationError::IncompleteStructure {
            index,
            state: self.state,
            open_containers: self.stack.len(),
        };
        Err(self.fail(error))
    }

    fn unexpected(&self, index: usize, kind: TokenKind, reason: UnexpectedReason) -> ValidationError {
        ValidationError::UnexpectedToken {
            index,
            kind,
            state: self.state,
            reason,
        }
    }

    fn fail(&mut self, error: ValidationError) -> ValidationError {
        self.state = State::Error;
        self.error = Some(error.clone());
        error
    }
}

/// Runs a fresh validator over the whole sequence, stopping at the first rejection.
pub fn validate(tokens: &[Token]) -> Verdict {
    let mut validator = Validator::new();

    for token in tokens {
        if validator.step(token).is_err() {
            break;
        }
    }

    validator.finish()
}
