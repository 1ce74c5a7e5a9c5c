//! Unit tests for the validator module.
//!
//! This module contains tests for the structural automaton including:
//! - Flat and nested objects and arrays
//! - Container mismatch and dangling closers
//! - Comma handling per state, including after a complete document
//! - Incomplete input and fail-fast behavior

use rstest::rstest;

use crate::errors::errors::{UnexpectedReason, ValidationError};
use crate::lexer::{lexer::tokenize, tokens::{Token, TokenKind}};
use crate::Span;

use super::{
    lookups::create_transition_lookups,
    state::{ContainerKind, Frame, State},
    validator::{validate, Validator, Verdict},
};

fn verdict(source: &str) -> Verdict {
    validate(&tokenize(source).unwrap())
}

fn token(kind: TokenKind, value: &str) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: Span { start: 0, end: 0 },
    }
}

#[rstest]
#[case(r#"{"a": 1}"#)]
#[case(r#"{"a": [1,2]}"#)]
#[case("{}")]
#[case("[]")]
#[case("[1, \"two\", true, false, null]")]
#[case(r#"{"a": {"b": {"c": null}}, "d": []}"#)]
#[case(r#"[{"a": 1}, {"b": [2, [3]]}, {}]"#)]
#[case(r#"{"k": [[], [[]], {}]}"#)]
#[case("\n{\n  \"spaced\" :\t\"out\"\n}\n")]
fn test_accepts(#[case] source: &str) {
    assert_eq!(verdict(source), Verdict::Accepted);
}

#[test]
fn test_empty_input_is_incomplete() {
    assert_eq!(
        verdict(""),
        Verdict::Rejected(ValidationError::IncompleteStructure {
            index: 0,
            state: State::Start,
            open_containers: 0,
        })
    );
}

#[test]
fn test_mismatched_closer() {
    let verdict = verdict(r#"{"a": [1,2}"#);

    assert_eq!(
        verdict,
        Verdict::Rejected(ValidationError::UnexpectedToken {
            index: 7,
            kind: TokenKind::RightBrace,
            state: State::AfterArrayElement,
            reason: UnexpectedReason::MismatchedCloser { open: ContainerKind::Array },
        })
    );
}

#[test]
fn test_mismatched_bracket_for_object() {
    let verdict = verdict(r#"{"a": 1]"#);
    let error = verdict.error().unwrap();

    assert_eq!(error.index(), 4);
    assert_eq!(error.kind(), TokenKind::RightBracket);
    assert!(matches!(
        error,
        ValidationError::UnexpectedToken {
            reason: UnexpectedReason::MismatchedCloser { open: ContainerKind::Object },
            ..
        }
    ));
}

#[rstest]
#[case("}", TokenKind::RightBrace)]
#[case("]", TokenKind::RightBracket)]
fn test_dangling_closer(#[case] source: &str, #[case] kind: TokenKind) {
    assert_eq!(
        verdict(source),
        Verdict::Rejected(ValidationError::UnexpectedToken {
            index: 0,
            kind,
            state: State::Start,
            reason: UnexpectedReason::DanglingCloser,
        })
    );
}

#[test]
fn test_closer_after_complete_document() {
    let error = verdict("{}}").error().cloned().unwrap();

    assert_eq!(error.index(), 2);
    assert_eq!(error.state(), State::Accept);
}

// Openers push in any state and closers only check the stack, so these pass.
#[rstest]
#[case(r#"{"a": 1,}"#)]
#[case("[1,]")]
#[case(r#"{"a":}"#)]
#[case(r#"{"a"}"#)]
#[case("{{}}")]
#[case(r#"{"a" []}"#)]
#[case("[1 []]")]
#[case("{}[]")]
#[case(r#"{"a":1},{"b":2}"#)]
#[case(r#"{"a":1}{"b":2}"#)]
fn test_accepts_through_frame_rules(#[case] source: &str) {
    assert_eq!(verdict(source), Verdict::Accepted);
}

#[rstest]
#[case("{,}", 1, State::ExpectingKey)]
#[case("[,1]", 1, State::ExpectingArrayElement)]
#[case(r#"{"a",: 1}"#, 2, State::AfterKey)]
#[case(r#"{"a": ,1}"#, 3, State::ExpectingColonValue)]
#[case(",", 0, State::Start)]
#[case(r#"{"a": 1,, "b": 2}"#, 5, State::ExpectingKey)]
fn test_comma_rejected_outside_completed_entries(
    #[case] source: &str,
    #[case] index: usize,
    #[case] state: State,
) {
    assert_eq!(
        verdict(source),
        Verdict::Rejected(ValidationError::UnexpectedToken {
            index,
            kind: TokenKind::Comma,
            state,
            reason: UnexpectedReason::NoTransition,
        })
    );
}

#[rstest]
#[case("1", State::Start)]
#[case("\"top\"", State::Start)]
#[case("{1: 2}", State::ExpectingKey)]
#[case(r#"{"a" 1}"#, State::AfterKey)]
#[case(r#"{"a": 1 "b": 2}"#, State::AfterValue)]
#[case("[1 2]", State::AfterArrayElement)]
#[case("[:]", State::ExpectingArrayElement)]
fn test_no_transition(#[case] source: &str, #[case] state: State) {
    let error = verdict(source).error().cloned().unwrap();

    assert_eq!(error.state(), state);
    assert!(matches!(
        error,
        ValidationError::UnexpectedToken { reason: UnexpectedReason::NoTransition, .. }
    ));
}

#[test]
fn test_opener_pushes_from_any_state() {
    let tokens = tokenize("{{}}").unwrap();
    let mut validator = Validator::new();
    let mut trace = vec![];

    for token in &tokens {
        validator.step(token).unwrap();
        trace.push((validator.state(), validator.depth()));
    }

    assert_eq!(
        trace,
        vec![
            (State::ExpectingKey, 1),
            (State::ExpectingKey, 2),
            (State::Accept, 1),
            (State::Accept, 0),
            (State::Accept, 0),
        ]
    );
    assert_eq!(validator.finish(), Verdict::Accepted);
}

#[test]
fn test_comma_after_document_starts_a_key() {
    let tokens = tokenize("{},").unwrap();
    let mut validator = Validator::new();

    validator.step(&tokens[0]).unwrap();
    validator.step(&tokens[1]).unwrap();
    assert_eq!(validator.state(), State::Accept);

    validator.step(&tokens[2]).unwrap();
    assert_eq!(validator.state(), State::ExpectingKey);
    assert_eq!(validator.depth(), 0);

    assert_eq!(
        validator.step(&tokens[3]),
        Err(ValidationError::IncompleteStructure {
            index: 3,
            state: State::ExpectingKey,
            open_containers: 0,
        })
    );
}

#[rstest]
#[case("{", State::ExpectingKey, 1)]
#[case(r#"{"a": [1"#, State::AfterArrayElement, 2)]
#[case(r#"{"a""#, State::AfterKey, 1)]
#[case("[[[]]", State::AfterArrayElement, 1)]
fn test_incomplete_structure(#[case] source: &str, #[case] state: State, #[case] open_containers: usize) {
    let tokens = tokenize(source).unwrap();

    assert_eq!(
        validate(&tokens),
        Verdict::Rejected(ValidationError::IncompleteStructure {
            index: tokens.len() - 1,
            state,
            open_containers,
        })
    );
}

#[test]
fn test_stack_unwinds_in_order() {
    let tokens = tokenize(r#"{"a": [1,2]}"#).unwrap();
    let mut validator = Validator::new();
    let mut depths = vec![];

    for token in &tokens {
        validator.step(token).unwrap();
        depths.push(validator.depth());
    }

    assert_eq!(depths, vec![1, 1, 1, 2, 2, 2, 2, 1, 0, 0]);
    assert!(validator.is_accepting());
    assert_eq!(validator.finish(), Verdict::Accepted);
}

#[test]
fn test_states_through_flat_object() {
    let tokens = tokenize(r#"{"a": 1}"#).unwrap();
    let mut validator = Validator::new();
    let mut states = vec![validator.state()];

    for token in &tokens {
        validator.step(token).unwrap();
        states.push(validator.state());
    }

    assert_eq!(
        states,
        vec![
            State::Start,
            State::ExpectingKey,
            State::AfterKey,
            State::ExpectingColonValue,
            State::AfterValue,
            State::Accept,
            State::Accept,
        ]
    );
}

#[test]
fn test_fail_fast() {
    let tokens = tokenize("}{}").unwrap();
    let mut validator = Validator::new();

    let first = validator.step(&tokens[0]).unwrap_err();
    assert!(validator.is_error());

    // Later tokens are not processed; the first rejection is reported again.
    assert_eq!(validator.step(&tokens[1]), Err(first.clone()));
    assert_eq!(validator.step(&tokens[2]), Err(first.clone()));
    assert_eq!(validator.depth(), 0);
    assert_eq!(validator.finish(), Verdict::Rejected(first));
}

#[test]
fn test_sequence_without_end_token() {
    let tokens = vec![
        token(TokenKind::LeftBracket, "["),
        token(TokenKind::Number, "1"),
        token(TokenKind::RightBracket, "]"),
    ];

    assert_eq!(validate(&tokens), Verdict::Accepted);
    assert_eq!(
        validate(&tokens[..2]),
        Verdict::Rejected(ValidationError::IncompleteStructure {
            index: 2,
            state: State::AfterArrayElement,
            open_containers: 1,
        })
    );
}

#[test]
fn test_tokens_after_end_are_judged_on_final_state() {
    let mut tokens = tokenize("[]").unwrap();
    tokens.push(token(TokenKind::Comma, ","));

    assert_eq!(
        validate(&tokens),
        Verdict::Rejected(ValidationError::IncompleteStructure {
            index: 4,
            state: State::ExpectingKey,
            open_containers: 0,
        })
    );
}

#[test]
fn test_frame_resume_state() {
    assert_eq!(
        Frame::new(ContainerKind::Object, State::ExpectingArrayElement).resume_state(),
        State::AfterArrayElement
    );
    assert_eq!(
        Frame::new(ContainerKind::Array, State::ExpectingColonValue).resume_state(),
        State::AfterValue
    );
    assert_eq!(Frame::new(ContainerKind::Object, State::Start).resume_state(), State::Accept);
}

#[test]
fn test_transition_table_has_no_structural_entries() {
    let lookup = create_transition_lookups();

    assert_eq!(lookup.len(), 12);
    assert_eq!(lookup.get(&(State::ExpectingKey, TokenKind::String)), Some(&State::AfterKey));
    assert_eq!(lookup.get(&(State::ExpectingKey, TokenKind::Number)), None);
    assert!(lookup.keys().all(|(_, kind)| !matches!(
        kind,
        TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Comma
            | TokenKind::EOF
    )));
}
