//! Unified error types for seo-tools.
//!
//! Scoring itself cannot fail. These errors cover everything around it:
//! loading records, rendering reports, and reading configuration.

use crate::parsers::ParseError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for seo-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SeoToolsError {
    /// Errors while loading a content record
    #[error("Failed to load content record: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for seo-tools operations
pub type Result<T> = std::result::Result<T, SeoToolsError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SeoToolsError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<ParseError> for SeoToolsError {
    fn from(err: ParseError) -> Self {
        Self::parse(String::new(), err)
    }
}

impl From<ReportError> for SeoToolsError {
    fn from(err: ReportError) -> Self {
        Self::report(String::new(), err)
    }
}

impl From<std::io::Error> for SeoToolsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost first, so a failure deep in a load
/// reads as `"scoring batch: loading post.md: ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SeoToolsError>> ErrorContext<T> for std::result::Result<T, E> {
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

fn add_context_to_error(err: SeoToolsError, new_ctx: &str) -> SeoToolsError {
    match err {
        SeoToolsError::Parse {
            context: existing,
            source,
        } => SeoToolsError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SeoToolsError::Report {
            context: existing,
            source,
        } => SeoToolsError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SeoToolsError::Io {
            path,
            message,
            source,
        } => SeoToolsError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SeoToolsError::Config(msg) => SeoToolsError::Config(chain_context(new_ctx, &msg)),
        SeoToolsError::Validation(msg) => {
            SeoToolsError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Join `new` in front of `existing` as `"new: existing"`
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
