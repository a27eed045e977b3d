//! Operational error types
//!
//! Anything that stops a document from being read or handed to the parser
//! lands here. Structural parse failures are not errors in this sense; they
//! are reported through [`crate::validation::ParseFailure`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl ReadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReadError::Open { path, .. }
            | ReadError::Read { path, .. }
            | ReadError::Decode { path, .. } => path,
        }
    }
}
