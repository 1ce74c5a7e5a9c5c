use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

use super::state::State;

pub type TransitionLookup = HashMap<(State, TokenKind), State>;

const SCALARS: [TokenKind; 5] = [
    TokenKind::String,
    TokenKind::Number,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
];

lazy_static! {
    /// Transitions for tokens that never open, close or separate a container.
    pub static ref TRANSITIONS: TransitionLookup = create_transition_lookups();
}

fn on(lookup: &mut TransitionLookup, from: State, kinds: &[TokenKind], to: State) {
    for kind in kinds {
        lookup.insert((from, *kind), to);
    }
}

pub fn create_transition_lookups() -> TransitionLookup {
    let mut lookup = HashMap::new();

    // Object members
    on(&mut lookup, State::ExpectingKey, &[TokenKind::String], State::AfterKey);
    on(&mut lookup, State::AfterKey, &[TokenKind::Colon], State::ExpectingColonValue);
    on(&mut lookup, State::ExpectingColonValue, &SCALARS, State::AfterValue);

    // Array elements
    on(&mut lookup, State::ExpectingArrayElement, &SCALARS, State::AfterArrayElement);

    lookup
}
