use serde::de::IgnoredAny;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::Outcome;
use super::context::{ContextLine, context_window};
use crate::error::ReadError;

/// A document that was read successfully but is not valid JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (line {line}, column {column})")]
pub struct ParseFailure {
    /// 1-based line of the failure
    pub line: usize,
    /// 1-based column of the failure
    pub column: usize,
    pub message: String,
    pub context: Vec<ContextLine>,
    /// 1-based column in bytes, as serde_json reports it
    byte_column: usize,
    source_text: String,
}

impl ParseFailure {
    pub fn from_json_error(error: &serde_json::Error, source: &str) -> Self {
        // serde_json reports column 0 when nothing on the line was consumed
        let line = error.line().max(1);
        let byte_column = error.column().max(1);

        Self {
            line,
            column: char_column(source, line, byte_column),
            byte_column,
            message: bare_message(error),
            context: context_window(source, line),
            source_text: source.to_string(),
        }
    }

    /// The full document text the failure was found in.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Byte offset of the failure position within the source text.
    pub fn byte_offset(&self) -> usize {
        byte_offset(&self.source_text, self.line, self.byte_column)
    }
}

/// Read, parse, and classify the document at `path`.
///
/// Once the text is read, every parser error is a structural failure: the
/// parser never touches I/O when reading from a string.
pub fn validate(path: &Path) -> Outcome {
    debug!("Validating {}", path.display());

    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => return Outcome::Error(e),
    };

    match parse_source(&source) {
        Ok(()) => Outcome::Valid,
        Err(error) => Outcome::Invalid(ParseFailure::from_json_error(&error, &source)),
    }
}

/// Read the whole file as UTF-8 text with line endings normalised to `\n`.
///
/// `\r\n` and a lone `\r` both end a line. The file handle lives only inside
/// this function.
pub fn read_source(path: &Path) -> Result<String, ReadError> {
    let mut file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| ReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let text = String::from_utf8(bytes).map_err(|source| ReadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(normalize_newlines(text))
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

/// Check that `source` is a complete JSON document.
///
/// Only the grammar is checked. No values are built, so huge numbers, deep
/// nesting, and unpaired surrogate escapes are all accepted.
pub fn parse_source(source: &str) -> Result<(), serde_json::Error> {
    serde_json::from_str::<IgnoredAny>(source).map(|_| ())
}

/// The parser's message without the " at line X column Y" suffix.
fn bare_message(error: &serde_json::Error) -> String {
    let full = error.to_string();
    let suffix = format!(" at line {} column {}", error.line(), error.column());
    full.strip_suffix(&suffix).unwrap_or(&full).to_string()
}

/// Byte offset where the 1-based `line` starts.
fn line_start(source: &str, line: usize) -> usize {
    source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum()
}

/// Byte offset of a (line, byte column) position, snapped back to a
/// character boundary.
fn byte_offset(source: &str, line: usize, byte_column: usize) -> usize {
    let mut offset = (line_start(source, line) + byte_column - 1).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Convert serde_json's byte column into a 1-based character column.
fn char_column(source: &str, line: usize, byte_column: usize) -> usize {
    let start = line_start(source, line);
    source[start..byte_offset(source, line, byte_column)]
        .chars()
        .count()
        + 1
}
