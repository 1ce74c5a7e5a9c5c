//! Error types for the scanner.
//!
//! This module defines the error values returned to callers:
//!
//! - Lexing failures with the offending byte position
//! - Validation failures with the offending token index, kind and state
//! - Batch driver failures (missing folders, I/O)
//! - Short suggestions used when rendering errors

pub mod errors;
