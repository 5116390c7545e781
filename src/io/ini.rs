use std::path::Path;

use super::ParseError;
use crate::{Document, Error};

/// Syntactic kind of one line of INI text.
///
/// Classification is purely local. An `Invalid` line is not an error by
/// itself; [`parse_ini`] turns it into [`ParseError::UnsupportedLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    SectionHeader,
    KeyValue,
    Invalid,
}

/// Classify one line. Rules are checked in order, first match wins.
///
/// Only the empty string counts as blank; a whitespace-only line is
/// `Invalid`. A header with trailing content (`[section] ;note`) or unbalanced
/// brackets (`[a]]`) is `Invalid` rather than guessed at.
pub fn classify_line(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('[')
        && line.ends_with(']')
        && line.matches('[').count() == 1
        && line.matches(']').count() == 1
    {
        return LineKind::SectionHeader;
    }
    if line.starts_with(';') {
        return LineKind::Comment;
    }
    if line.contains('=') {
        return LineKind::KeyValue;
    }
    LineKind::Invalid
}

/// Name between the brackets, verbatim (not trimmed).
fn section_name(line: &str, line_num: usize) -> Result<&str, ParseError> {
    let name = &line[1..line.len() - 1];
    if name.is_empty() {
        return Err(ParseError::EmptySectionName { line: line_num });
    }
    Ok(name)
}

/// Split at the first `=`; both sides trimmed. The value may be empty, the
/// key may not.
fn split_key_value(line: &str, line_num: usize) -> Result<(&str, &str), ParseError> {
    let Some((raw_key, raw_value)) = line.split_once('=') else {
        return Err(ParseError::UnsupportedLine {
            line: line_num,
            content: line.to_string(),
        });
    };
    let key = raw_key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey { line: line_num });
    }
    Ok((key, raw_value.trim()))
}

/// Parse INI text into a [`Document`].
///
/// Single linear pass; the first structural error aborts the parse. A
/// key/value line is only legal once a section header has been seen. A
/// repeated section header discards the earlier content under that name.
pub fn parse_ini(input: &str) -> Result<Document, ParseError> {
    let mut document = Document::new();
    let mut current_section: Option<String> = None;

    for (index, line) in input.lines().enumerate() {
        let line_num = index + 1;

        match classify_line(line) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::SectionHeader => {
                let name = section_name(line, line_num)?;
                document.insert_section(name);
                current_section = Some(name.to_string());
            }
            LineKind::KeyValue => {
                let (key, value) = split_key_value(line, line_num)?;
                let Some(section) = current_section.as_deref() else {
                    return Err(ParseError::GlobalKeyNotAllowed { line: line_num });
                };
                document.set(section, key, value);
            }
            LineKind::Invalid => {
                return Err(ParseError::UnsupportedLine {
                    line: line_num,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(document)
}

#[derive(Debug, Clone, Default)]
pub struct IniWriteOptions {
    /// Emit an empty line between consecutive sections.
    pub blank_line_between_sections: bool,
}

/// Serialize a document to INI text, in document iteration order.
///
/// Lossy inverse of [`parse_ini`]: comments, blank lines, and the original
/// ordering of the source text are not reproduced.
pub fn write_ini(document: &Document, options: &IniWriteOptions) -> String {
    let mut output = String::new();

    for (index, (name, section)) in document.iter().enumerate() {
        if options.blank_line_between_sections && index > 0 {
            output.push('\n');
        }
        output.push('[');
        output.push_str(name);
        output.push_str("]\n");
        for (key, value) in section.iter() {
            output.push_str(key);
            output.push_str(" = ");
            output.push_str(value);
            output.push('\n');
        }
    }

    output
}

/// Load and parse an INI file from disk.
pub fn read_ini_file(path: &Path) -> Result<Document, Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_ini(&content)?)
}

/// Serialize a document and write it to disk.
pub fn write_ini_file(
    path: &Path,
    document: &Document,
    options: &IniWriteOptions,
) -> Result<(), Error> {
    std::fs::write(path, write_ini(document, options))?;
    Ok(())
}
