//! Unified error types for vehicle-eval.
//!
//! Per-record problems (blank text, unparseable descriptions) are not
//! errors — they degrade to skipped field comparisons. Everything here
//! covers batch-level failures: missing input, malformed files, bad
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vehicle-eval operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VehicleEvalError {
    /// Errors while obtaining or decoding the input record sequence
    #[error("Failed to load records: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors (lexicon files, presets, thresholds)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Unknown input format - expected a .csv or .json file")]
    UnknownFormat,

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Invalid CSV structure: {0}")]
    InvalidCsv(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("No results file found under {dir}")]
    NoInputFound { dir: String },
}

/// Convenient Result type for vehicle-eval operations
pub type Result<T> = std::result::Result<T, VehicleEvalError>;

impl VehicleEvalError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an input error for a missing column
    pub fn missing_column(column: impl Into<String>, context: impl Into<String>) -> Self {
        Self::input(
            context,
            InputErrorKind::MissingColumn {
                column: column.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for VehicleEvalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<csv::Error> for VehicleEvalError {
    fn from(err: csv::Error) -> Self {
        Self::input(
            "CSV deserialization",
            InputErrorKind::InvalidCsv(err.to_string()),
        )
    }
}

impl From<serde_json::Error> for VehicleEvalError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<VehicleEvalError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: VehicleEvalError, new_ctx: &str) -> VehicleEvalError {
    match err {
        VehicleEvalError::Input {
            context: existing,
            source,
        } => VehicleEvalError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        VehicleEvalError::Io {
            path,
            message,
            source,
        } => VehicleEvalError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        VehicleEvalError::Config(msg) => VehicleEvalError::Config(chain_context(new_ctx, &msg)),
        VehicleEvalError::Validation(msg) => {
            VehicleEvalError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
