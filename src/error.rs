use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bible operations
#[derive(Error, Diagnostic, Debug)]
pub enum BibleError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(bible::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Design document not found: {path}")]
    #[diagnostic(
        code(bible::missing_input),
        help("Pass the document path explicitly or set `input:` in bible.yaml")
    )]
    MissingInput { path: std::path::PathBuf },

    #[error("Config error: {message}")]
    #[diagnostic(code(bible::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(bible::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(bible::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BibleError>;
