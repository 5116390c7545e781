use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseArgError {
    #[error("no command given (expected one of: check, sections, keys, get, set, fmt)")]
    NoCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("missing argument: <{0}>")]
    MissingArgument(&'static str),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Check {
        file: PathBuf,
    },
    Sections {
        file: PathBuf,
    },
    Keys {
        file: PathBuf,
        section: String,
    },
    Get {
        file: PathBuf,
        section: String,
        key: String,
    },
    Set {
        file: PathBuf,
        section: String,
        key: String,
        value: String,
    },
    Fmt {
        file: PathBuf,
        output: Option<PathBuf>,
        spaced: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
}
