use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use json_scanner::{
    driver::{run_batch, scan, BatchConfig, EntryStatus, Outcome},
    render_error,
};

/// Lexes and structurally validates JSON-like text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scan a single file and print its token dump or diagnostic
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Folder holding input01.txt, input02.txt, ...
    #[arg(long, default_value = "input_folder")]
    input_dir: PathBuf,

    /// Folder receiving output01.txt, output02.txt, ...
    #[arg(long, default_value = "output_folder")]
    output_dir: PathBuf,

    /// Number of numbered inputs to process
    #[arg(long, short = 'n', default_value_t = 10)]
    count: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.file {
        Some(file) => scan_file(file),
        None => scan_batch(BatchConfig {
            input_dir: args.input_dir,
            output_dir: args.output_dir,
            count: args.count,
        }),
    }
}

fn scan_file(file: PathBuf) -> ExitCode {
    let contents = match read_to_string(&file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let outcome = scan(&contents);
    println!("Scanned in {:?}", start.elapsed());

    if let Outcome::LexFailed(error) = &outcome {
        eprint!("{}", render_error(error, &contents, &file));
    }
    print!("{}", outcome.render());
    if !matches!(outcome, Outcome::Accepted(_)) {
        println!();
    }

    match outcome {
        Outcome::Accepted(_) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

fn scan_batch(config: BatchConfig) -> ExitCode {
    let start = Instant::now();

    let report = match run_batch(&config) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("Error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    for entry in &report.entries {
        match entry.status {
            EntryStatus::Accepted => {
                println!("{} -> {}", entry.input.display(), entry.output.display())
            }
            EntryStatus::LexFailed => {
                println!("Error found in {} during tokenization.", entry.input.display());
                if let Some(detail) = &entry.detail {
                    eprint!("{}", detail);
                }
            }
            EntryStatus::Rejected => {
                println!("Error found in {} during validation.", entry.input.display())
            }
            EntryStatus::Unreadable => {
                println!("Error found in {} while reading.", entry.input.display());
                if let Some(detail) = &entry.detail {
                    eprintln!("{}", detail);
                }
            }
            EntryStatus::Missing => {}
        }
    }

    println!(
        "Processed {} file(s) in {:?}: {} accepted, {} lex errors, {} rejected, {} unreadable",
        report.entries.len() - report.count(EntryStatus::Missing),
        start.elapsed(),
        report.count(EntryStatus::Accepted),
        report.count(EntryStatus::LexFailed),
        report.count(EntryStatus::Rejected),
        report.count(EntryStatus::Unreadable),
    );

    ExitCode::SUCCESS
}
