//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::{BatchSummary, ScoredRecord};
use crate::scoring::{Check, SCORING_ENGINE_VERSION, ScoreTier};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        records: &[ScoredRecord],
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonScoreReport {
            tool: "seo-tools",
            version: env!("CARGO_PKG_VERSION"),
            scoring_engine_version: SCORING_ENGINE_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            summary: BatchSummary::from_scored(records),
            records: records.iter().map(JsonRecord::from_scored).collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonScoreReport<'a> {
    tool: &'static str,
    version: &'static str,
    scoring_engine_version: &'static str,
    generated_at: String,
    summary: BatchSummary,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    source: &'a str,
    title: &'a str,
    slug: &'a str,
    score: u32,
    tier: ScoreTier,
    checks: &'a [Check],
}

impl<'a> JsonRecord<'a> {
    fn from_scored(scored: &'a ScoredRecord) -> Self {
        Self {
            source: &scored.source,
            title: &scored.title,
            slug: &scored.slug,
            score: scored.report.score,
            tier: scored.report.tier(),
            checks: &scored.report.checks,
        }
    }
}
