//! Error types for the parser.
//!
//! `ParserError` separates contract violations (`InvalidArgument`) from
//! recoverable lookups (`NotFound`). Document façades wrap lookup failures
//! with `Context` before surfacing them.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// A caller broke the engine or façade contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Identifier or range endpoint absent from the tree.
    #[error("Couldn't find: {0}")]
    NotFound(String),

    /// Range endpoints given in reverse document order.
    #[error("Invalid range: '{start}' comes after '{end}'")]
    InvalidRange { start: String, end: String },

    /// Regular expression failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Not a usable roman or arabic numeral.
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML profile parsing or outline serialization failed.
    #[error("YAML processing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Inner error with a message describing what was being attempted.
    #[error("{message} {source}")]
    Context {
        message: String,
        #[source]
        source: Box<ParserError>,
    },
}

impl ParserError {
    /// Wrap this error with a message describing the failed operation.
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the error it wraps) is a `NotFound`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Context { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
