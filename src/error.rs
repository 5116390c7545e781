use thiserror::Error;

use crate::io::ParseError;

/// Failure of a file-level load or save.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
