//! Batch driver over numbered input files.
//!
//! For each `inputNN.txt` in the input folder the driver lexes and validates
//! the text, then writes either the token dump or a one-line diagnostic to
//! the matching `outputNN.txt`. A failing input never stops the batch.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::errors::{DriverError, LexError, ValidationError},
    lexer::{lexer::tokenize, tokens::Token},
    validator::validator::{validate, Verdict},
};

/// Second half of every diagnostic.
pub const CANNOT_PROCEED: &str = "Cannot proceed further until resolved";

/// Result of running the whole pipeline over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(Vec<Token>),
    LexFailed(LexError),
    Rejected {
        tokens: Vec<Token>,
        error: ValidationError,
    },
}

impl Outcome {
    /// Token dump for accepted input, diagnostic line otherwise.
    pub fn render(&self) -> String {
        match self {
            Outcome::Accepted(tokens) => render_tokens(tokens),
            Outcome::LexFailed(error) => format!("Error: {} {}", error, CANNOT_PROCEED),
            Outcome::Rejected {
                error: ValidationError::UnexpectedToken { index, kind, .. },
                ..
            } => format!(
                "Error at token {}: Unexpected token '{}' {}",
                index, kind, CANNOT_PROCEED
            ),
            Outcome::Rejected {
                error: ValidationError::IncompleteStructure { .. },
                ..
            } => format!(
                "Error: Token sequence did not end in an accepting state {}",
                CANNOT_PROCEED
            ),
        }
    }

    pub fn status(&self) -> EntryStatus {
        match self {
            Outcome::Accepted(_) => EntryStatus::Accepted,
            Outcome::LexFailed(_) => EntryStatus::LexFailed,
            Outcome::Rejected { .. } => EntryStatus::Rejected,
        }
    }
}

/// Lexes then validates `source`.
pub fn scan(source: &str) -> Outcome {
    let tokens = match tokenize(source) {
        Ok(tokens) => tokens,
        Err(error) => return Outcome::LexFailed(error),
    };

    match validate(&tokens) {
        Verdict::Accepted => Outcome::Accepted(tokens),
        Verdict::Rejected(error) => Outcome::Rejected { tokens, error },
    }
}

/// One `<KIND, payload>` line per token.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

pub fn input_file_name(number: usize) -> String {
    format!("input{:02}.txt", number)
}

pub fn output_file_name(number: usize) -> String {
    format!("output{:02}.txt", number)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Inputs are numbered `1..=count`.
    pub count: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            input_dir: PathBuf::from("input_folder"),
            output_dir: PathBuf::from("output_folder"),
            count: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Accepted,
    LexFailed,
    Rejected,
    /// No input file with this number; nothing was written.
    Missing,
    /// The input exists but could not be read as text.
    Unreadable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub number: usize,
    pub input: PathBuf,
    pub output: PathBuf,
    pub status: EntryStatus,
    /// Rendered lex error with source excerpt for lex failures, the read
    /// error for unreadable inputs.
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn count(&self, status: EntryStatus) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.status == status)
            .count()
    }
}

/// Processes `input01.txt ..= inputNN.txt` from the configured folders.
///
/// # Returns
///
/// Returns the per-file report, or a DriverError when a folder is missing or
/// an output cannot be written. An input that cannot be read is reported as
/// [`EntryStatus::Unreadable`] and the batch moves on.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, DriverError> {
    if !config.input_dir.is_dir() {
        return Err(DriverError::MissingInputDirectory(config.input_dir.clone()));
    }
    if !config.output_dir.is_dir() {
        return Err(DriverError::MissingOutputDirectory(config.output_dir.clone()));
    }

    let mut report = BatchReport::default();

    for number in 1..=config.count {
        let input = config.input_dir.join(input_file_name(number));
        let output = config.output_dir.join(output_file_name(number));

        if !input.is_file() {
            report.entries.push(BatchEntry {
                number,
                input,
                output,
                status: EntryStatus::Missing,
                detail: None,
            });
            continue;
        }

        let source = match fs::read_to_string(&input) {
            Ok(source) => source,
            Err(source) => {
                let error = DriverError::Read {
                    path: input.clone(),
                    source,
                };
                write_output(&output, &format!("Error: {} {}", error, CANNOT_PROCEED))?;

                report.entries.push(BatchEntry {
                    number,
                    input,
                    output,
                    status: EntryStatus::Unreadable,
                    detail: Some(error.to_string()),
                });
                continue;
            }
        };

        let outcome = scan(&source);
        write_output(&output, &outcome.render())?;

        let detail = match &outcome {
            Outcome::LexFailed(error) => Some(crate::render_error(error, &source, &input)),
            _ => None,
        };

        report.entries.push(BatchEntry {
            number,
            input,
            output,
            status: outcome.status(),
            detail,
        });
    }

    Ok(report)
}

fn write_output(path: &Path, contents: &str) -> Result<(), DriverError> {
    fs::write(path, contents).map_err(|source| DriverError::Write {
        path: path.to_path_buf(),
        source,
    })
}
