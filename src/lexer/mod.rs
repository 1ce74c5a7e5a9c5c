//! Lexical analysis module for the scanner.
//!
//! This module contains the lexer (tokenizer) that converts input text
//! into a sequence of tokens for validation. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of strings, digit runs, `true`/`false`/`null` and punctuation
//! - Token span tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
