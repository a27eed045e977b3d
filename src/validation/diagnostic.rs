//! Parse failure diagnostics with miette integration

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

use super::ParseFailure;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON")]
#[diagnostic(code(jsoncheck::invalid_json))]
pub struct InvalidJsonDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{}", self.reason)]
    span: SourceSpan,

    reason: String,

    #[help]
    help: Option<String>,
}

impl InvalidJsonDiagnostic {
    pub fn new(failure: &ParseFailure, path: &Path) -> Self {
        let source = failure.source_text();
        let offset = failure.byte_offset();

        // Highlight the offending character, or nothing at end of input
        let len = source[offset..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);

        Self {
            src: crate::error_utils::create_named_source(path, source.to_string()),
            span: SourceSpan::new(offset.into(), len),
            reason: failure.message.clone(),
            help: help_for(&failure.message),
        }
    }

    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

fn help_for(message: &str) -> Option<String> {
    if message.starts_with("EOF while parsing") {
        Some("The document ends before the value is complete".to_string())
    } else if message.starts_with("key must be a string") {
        Some(
            "Object keys must be enclosed in double quotes; a comma after the last member also ends up here"
                .to_string(),
        )
    } else if message.starts_with("expected value") {
        Some("A value is missing here, often because of a comma before a closing bracket".to_string())
    } else {
        None
    }
}
