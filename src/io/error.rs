use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported line {line}: {content:?}")]
    UnsupportedLine { line: usize, content: String },

    #[error("empty section name at line {line}")]
    EmptySectionName { line: usize },

    #[error("empty key at line {line}")]
    EmptyKey { line: usize },

    #[error("key/value pair before any section header at line {line}")]
    GlobalKeyNotAllowed { line: usize },
}
