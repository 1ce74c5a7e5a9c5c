//! Structural validation of a token sequence.
//!
//! This module contains the stack-augmented automaton that decides whether
//! a token sequence forms well-nested objects and arrays:
//!
//! - Automaton states and container stack frames
//! - The fixed transition table for keys, colons and scalar values
//! - Container-aware handling of braces, brackets and commas
//! - Fail-fast rejection carrying the token index, kind and state

pub mod lookups;
pub mod state;
pub mod validator;

#[cfg(test)]
mod tests;
