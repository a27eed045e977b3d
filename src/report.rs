//! Rendering of validation outcomes
//!
//! The text format is a stable contract consumed by scripts:
//!
//! ```text
//! VALID
//! ```
//!
//! ```text
//! INVALID
//! Line: 1, Col: 9, Msg: key must be a string
//!      1: {"a": 1,})
//! ```
//!
//! ```text
//! ERROR
//! could not open missing.json: No such file or directory (os error 2)
//! ```
//!
//! The closing parenthesis after each context line is part of the format.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::config::Format;
use crate::validation::{ContextLine, Outcome};

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum JsonReport<'a> {
    Valid {
        path: String,
    },
    Invalid {
        path: String,
        line: usize,
        column: usize,
        message: &'a str,
        context: &'a [ContextLine],
    },
    Error {
        path: String,
        message: String,
    },
}

pub fn render(
    outcome: &Outcome,
    path: &Path,
    format: Format,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        Format::Text => render_text(outcome, out)?,
        Format::Json => render_json(outcome, path, out)?,
    }
    Ok(())
}

pub fn render_text(outcome: &Outcome, out: &mut impl Write) -> std::io::Result<()> {
    match outcome {
        Outcome::Valid => writeln!(out, "VALID"),
        Outcome::Invalid(failure) => {
            writeln!(out, "INVALID")?;
            writeln!(
                out,
                "Line: {}, Col: {}, Msg: {}",
                failure.line, failure.column, failure.message
            )?;
            for line in &failure.context {
                writeln!(out, "{:>6}: {})", line.number, line.text)?;
            }
            Ok(())
        }
        Outcome::Error(error) => {
            writeln!(out, "ERROR")?;
            writeln!(out, "{error}")
        }
    }
}

pub fn render_json(outcome: &Outcome, path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let path = path.display().to_string();
    let report = match outcome {
        Outcome::Valid => JsonReport::Valid { path },
        Outcome::Invalid(failure) => JsonReport::Invalid {
            path,
            line: failure.line,
            column: failure.column,
            message: &failure.message,
            context: &failure.context,
        },
        Outcome::Error(error) => JsonReport::Error {
            path,
            message: error.to_string(),
        },
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ParseFailure, parse_source};
    use insta::assert_snapshot;
    use serde_json::{Value, json};

    fn invalid(source: &str) -> Outcome {
        let error = parse_source(source).unwrap_err();
        Outcome::Invalid(ParseFailure::from_json_error(&error, source))
    }

    fn text(outcome: &Outcome) -> String {
        let mut buf = Vec::new();
        render_text(outcome, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn json(outcome: &Outcome) -> Value {
        let mut buf = Vec::new();
        render_json(outcome, Path::new("doc.json"), &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn test_valid_text() {
        assert_eq!(text(&Outcome::Valid), "VALID\n");
    }

    #[test]
    fn test_single_line_failure_text() {
        assert_eq!(
            text(&invalid(r#"{"a": 1,}"#)),
            "INVALID\nLine: 1, Col: 9, Msg: key must be a string\n     1: {\"a\": 1,})\n"
        );
    }

    #[test]
    fn test_multi_line_failure_text() {
        let outcome = invalid("{\n  \"a\": 1,\n  \"b\": ,\n  \"c\": 3\n}\n");
        assert_snapshot!(text(&outcome), @r#"
INVALID
Line: 3, Col: 8, Msg: expected value
     1: {)
     2:   "a": 1,)
     3:   "b": ,)
     4:   "c": 3)
     5: })
"#);
    }

    #[test]
    fn test_line_numbers_right_aligned() {
        let mut source = "\n".repeat(1233);
        source.push_str("{]");
        let rendered = text(&invalid(&source));
        assert!(rendered.contains("\n  1232: )\n"));
        assert!(rendered.contains("\n  1234: {])\n"));
    }

    #[test]
    fn test_empty_document_text() {
        assert_eq!(
            text(&invalid("")),
            "INVALID\nLine: 1, Col: 1, Msg: EOF while parsing a value\n"
        );
    }

    #[test]
    fn test_error_text() {
        let outcome = crate::validation::validate(Path::new("/nonexistent/dir/doc.json"));
        let rendered = text(&outcome);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("ERROR"));
        let message = lines.next().unwrap();
        assert!(message.contains("/nonexistent/dir/doc.json"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_valid_json() {
        assert_eq!(
            json(&Outcome::Valid),
            json!({"status": "valid", "path": "doc.json"})
        );
    }

    #[test]
    fn test_invalid_json() {
        let report = json(&invalid(r#"{"a": 1,}"#));
        assert_eq!(
            report,
            json!({
                "status": "invalid",
                "path": "doc.json",
                "line": 1,
                "column": 9,
                "message": "key must be a string",
                "context": [{"number": 1, "text": "{\"a\": 1,}"}]
            })
        );
    }

    #[test]
    fn test_error_json() {
        let outcome = crate::validation::validate(Path::new("/nonexistent/dir/doc.json"));
        let report = json(&outcome);
        assert_eq!(report["status"], "error");
        assert!(
            report["message"]
                .as_str()
                .is_some_and(|m| m.starts_with("could not open"))
        );
    }
}
