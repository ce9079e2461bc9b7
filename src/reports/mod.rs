//! Report generation for score results.
//!
//! This module renders scored records in several formats:
//! - Summary: score badge and status lines per record
//! - Table: aligned one-row-per-record terminal output
//! - JSON: structured data for programmatic integration
//! - Markdown: documentation and PR comments
//! - SARIF: CI/CD dashboard integration
//!
//! All user-controlled text (titles, sources, messages) is escaped via
//! [`escape`] before embedding in Markdown.

pub mod escape;
mod json;
mod markdown;
mod sarif;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use sarif::SarifReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{DEFAULT_MAX_CHECKS, ReportConfig, ReportFormat};

use crate::pipeline::ScoredRecord;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a report for a set of scored records
    fn generate(&self, records: &[ScoredRecord], config: &ReportConfig)
        -> Result<String, ReportError>;

    /// Write the report to a writer
    fn write_report(
        &self,
        records: &[ScoredRecord],
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(records, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format.
///
/// `Auto` should be resolved first; it falls back to the summary reporter.
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Sarif => Box::new(SarifReporter::new()),
    }
}
