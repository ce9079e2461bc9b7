//! Pipeline orchestration for scoring runs.
//!
//! Shared load → score → report logic used by the CLI command handlers.

mod batch;
mod output;
mod parse;

pub use batch::{BatchSummary, ScoredRecord, score_batch, score_loaded};
pub use output::{OutputTarget, resolve_format, should_use_color, write_output};
pub use parse::{LoadedRecord, load_records, parse_records_with_context};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a record file
    #[error("Parse failed for {path}")]
    ParseFailed {
        path: String,
        #[source]
        source: crate::parsers::ParseError,
    },

    /// Report generation or output failed
    #[error("Report failed")]
    ReportFailed {
        #[source]
        source: crate::reports::ReportError,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// All records scored and met the configured thresholds
    pub const SUCCESS: i32 = 0;
    /// At least one record fell below a threshold
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
