//! CLI argument parsing and execution.
//!
//! Subcommands:
//! - `check <file>` — parse and print `OK`
//! - `sections <file>` — list section names
//! - `keys <file> <section>` — list keys of a section
//! - `get <file> <section> <key>` — print one value
//! - `set <file> <section> <key> <value>` — update and rewrite the file
//! - `fmt <file> [-o <out>] [--spaced]` — reparse and emit normalized text

mod error;
mod execute;
mod parse;
mod types;

use std::process::ExitCode;

pub use types::Args;

pub fn run() -> ExitCode {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = args.execute() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
