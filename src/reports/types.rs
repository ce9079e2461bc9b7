//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Summary for one record, table for several
    #[default]
    Auto,
    /// Score, tier and status lines per record
    Summary,
    /// One aligned row per record
    Table,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    Markdown,
    /// SARIF 2.1.0 for CI/CD
    Sarif,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Markdown => write!(f, "markdown"),
            ReportFormat::Sarif => write!(f, "sarif"),
        }
    }
}

/// Default number of status lines shown per record
pub const DEFAULT_MAX_CHECKS: usize = 5;

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Status lines shown per record in human-readable formats
    pub max_checks: usize,
    /// Title for the report
    pub title: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_checks: DEFAULT_MAX_CHECKS,
            title: None,
        }
    }
}
