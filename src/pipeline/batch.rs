//! Parallel batch scoring.
//!
//! Records are scored independently, so a list page or a directory of posts
//! is fanned out across rayon's pool. Output order always matches input.

use super::LoadedRecord;
use crate::model::ContentRecord;
use crate::scoring::{ScoreReport, ScoreTier, SeoScorer};
use rayon::prelude::*;
use serde::Serialize;

/// A scored record, ready for reporting
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    /// Where the record came from
    pub source: String,
    pub title: String,
    pub slug: String,
    pub report: ScoreReport,
}

impl ScoredRecord {
    /// Score a single record with a source label
    pub fn new(scorer: &SeoScorer, source: impl Into<String>, record: &ContentRecord) -> Self {
        Self {
            source: source.into(),
            title: record.title.clone(),
            slug: record.effective_slug(),
            report: scorer.evaluate(record),
        }
    }
}

/// Score many records in parallel
pub fn score_batch(scorer: &SeoScorer, records: &[ContentRecord]) -> Vec<ScoreReport> {
    records.par_iter().map(|r| scorer.evaluate(r)).collect()
}

/// Score loaded records in parallel, keeping their source labels
pub fn score_loaded(scorer: &SeoScorer, loaded: &[LoadedRecord]) -> Vec<ScoredRecord> {
    loaded
        .par_iter()
        .map(|l| ScoredRecord::new(scorer, l.source.clone(), &l.record))
        .collect()
}

/// Aggregate statistics over a batch of reports
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    /// Mean score, 0 for an empty batch
    pub mean_score: f32,
    pub min_score: Option<u32>,
    pub max_score: Option<u32>,
    pub excellent: usize,
    pub good: usize,
    pub needs_work: usize,
}

impl BatchSummary {
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a ScoreReport>) -> Self {
        let mut summary = Self::default();
        let mut sum: u64 = 0;

        for report in reports {
            summary.total += 1;
            sum += u64::from(report.score);
            summary.min_score = Some(summary.min_score.map_or(report.score, |m| m.min(report.score)));
            summary.max_score = Some(summary.max_score.map_or(report.score, |m| m.max(report.score)));
            match report.tier() {
                ScoreTier::Excellent => summary.excellent += 1,
                ScoreTier::Good => summary.good += 1,
                ScoreTier::NeedsWork => summary.needs_work += 1,
            }
        }

        if summary.total > 0 {
            summary.mean_score = sum as f32 / summary.total as f32;
        }
        summary
    }

    /// Summarize a slice of scored records
    #[must_use]
    pub fn from_scored(records: &[ScoredRecord]) -> Self {
        Self::from_reports(records.iter().map(|r| &r.report))
    }
}
