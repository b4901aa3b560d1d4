//! Error types and reporting

use crate::interp::RuntimeError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Host-level error: failure to load a program, or a fatal runtime error
#[derive(Debug, Error)]
pub enum Error {
    /// IO error while reading a program
    #[error("IO error: {message}")]
    Io { message: String },

    /// The program file is not a valid encoded AST
    #[error("Load error: {message}")]
    Load { message: String },

    /// Fatal error raised while running the program
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn load_error(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::load_error(err.to_string())
    }
}

/// Report an error on stderr, one line, prefixed with the program name
pub fn report_error(filename: &str, error: &Error) {
    eprintln!("{}", report_line(filename, error));
}

fn report_line(filename: &str, error: &Error) -> String {
    format!("{filename}: {error}")
}
