use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for header insertion and configuration
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the pure header core: config, prompts and documents
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(levelup_header::io_error))]
    Io(String),

    #[error("Invalid config file {}: {message}", path.display())]
    #[diagnostic(
        code(levelup_header::config_error),
        help("fix or delete the file, then run `levelup-header set-author`")
    )]
    Config { path: PathBuf, message: String },

    #[error("Author not set, header cancelled")]
    #[diagnostic(
        code(levelup_header::missing_author),
        help("pass --author or run `levelup-header set-author <NAME>`")
    )]
    MissingAuthor,

    #[error("No {what} entered, operation cancelled")]
    #[diagnostic(code(levelup_header::empty_input))]
    EmptyInput { what: String },

    #[error("Serialization failed: {message}")]
    #[diagnostic(code(levelup_header::serialize_error))]
    Serialize { message: String },

    #[error("No such document: {}", path.display())]
    #[diagnostic(code(levelup_header::document_not_found))]
    DocumentNotFound { path: PathBuf },
}

impl Error {
    /// Create a config error for `path`
    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
