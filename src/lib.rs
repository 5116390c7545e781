pub mod document;
pub mod error;
pub mod io;

pub use document::{Document, DocumentError, Section};
pub use error::Error;
pub use io::{
    IniWriteOptions, LineKind, ParseError, classify_line, parse_ini, read_ini_file, write_ini,
    write_ini_file,
};
