//! JSON document validation
//!
//! `validate` reads a file, parses it, and classifies the result into an
//! [`Outcome`]. Rendering the outcome is left to [`crate::report`].

mod context;
mod diagnostic;
mod validator;


pub use context::{ContextLine, LINES_AFTER, LINES_BEFORE, context_window};
pub use diagnostic::InvalidJsonDiagnostic;
pub use validator::{ParseFailure, parse_source, read_source, validate};

use crate::error::ReadError;

/// Result of a single validation run.
#[derive(Debug)]
pub enum Outcome {
    Valid,
    Invalid(ParseFailure),
    Error(ReadError),
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Valid => 0,
            Outcome::Invalid(_) => 1,
            Outcome::Error(_) => 2,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }
}
