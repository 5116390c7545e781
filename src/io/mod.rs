mod error;
mod ini;

pub use error::ParseError;
pub use ini::{
    IniWriteOptions, LineKind, classify_line, parse_ini, read_ini_file, write_ini, write_ini_file,
};
