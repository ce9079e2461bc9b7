//! SEO scorer.
//!
//! Runs the five rules over a record and combines them into a
//! [`ScoreReport`].

use crate::model::ContentRecord;
use serde::{Deserialize, Serialize};

use super::rules;

/// Scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Highest possible total score
pub const MAX_SCORE: u32 = 100;

/// Category of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckCategory {
    Title,
    MetaDescription,
    Content,
    Keywords,
    /// Tag coverage
    Readability,
}

impl CheckCategory {
    /// All categories in report order
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::MetaDescription,
        Self::Content,
        Self::Keywords,
        Self::Readability,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::MetaDescription => "Meta Description",
            Self::Content => "Content",
            Self::Keywords => "Keywords",
            Self::Readability => "Readability",
        }
    }

    /// Most points this category can contribute
    #[must_use]
    pub const fn max_points(&self) -> u32 {
        match self {
            Self::Title | Self::MetaDescription | Self::Content => 25,
            Self::Keywords => 15,
            Self::Readability => 10,
        }
    }

    /// Points awarded at this category's lowest tier
    #[must_use]
    pub const fn min_points(&self) -> u32 {
        match self {
            Self::Title | Self::MetaDescription | Self::Content => 5,
            Self::Keywords | Self::Readability => 0,
        }
    }

    /// Stable identifier used in machine-readable output
    #[must_use]
    pub const fn rule_id(&self) -> &'static str {
        match self {
            Self::Title => "SEO-TITLE",
            Self::MetaDescription => "SEO-META-DESCRIPTION",
            Self::Content => "SEO-CONTENT",
            Self::Keywords => "SEO-KEYWORDS",
            Self::Readability => "SEO-READABILITY",
        }
    }
}

impl std::fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One categorized diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub category: CheckCategory,
    pub passed: bool,
    /// Human-readable explanation
    pub message: String,
    /// Contribution to the total score
    pub points: u32,
}

impl Check {
    /// Whether the check landed in its category's lowest tier
    #[must_use]
    pub fn is_lowest_tier(&self) -> bool {
        self.points <= self.category.min_points()
    }
}

/// Score tier shown next to the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreTier {
    /// 80-100
    Excellent,
    /// 60-79
    Good,
    /// Below 60
    NeedsWork,
}

impl ScoreTier {
    pub const EXCELLENT_THRESHOLD: u32 = 80;
    pub const GOOD_THRESHOLD: u32 = 60;

    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        if score >= Self::EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if score >= Self::GOOD_THRESHOLD {
            Self::Good
        } else {
            Self::NeedsWork
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsWork => "Needs Work",
        }
    }

    /// Badge color
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "yellow",
            Self::NeedsWork => "red",
        }
    }
}

impl std::fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ScoreReport {
    /// Total score (0-100)
    pub score: u32,
    /// One check per category, in [`CheckCategory::ALL`] order
    pub checks: Vec<Check>,
}

impl ScoreReport {
    /// Build a report from checks, deriving the capped total
    pub fn from_checks(checks: Vec<Check>) -> Self {
        let total: u32 = checks.iter().map(|c| c.points).sum();
        Self {
            score: total.min(MAX_SCORE),
            checks,
        }
    }

    #[must_use]
    pub const fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }

    #[must_use]
    pub const fn max_points(&self) -> u32 {
        MAX_SCORE
    }

    #[must_use]
    pub fn check(&self, category: CheckCategory) -> Option<&Check> {
        self.checks.iter().find(|c| c.category == category)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Checks with failures first, category order kept within each group
    #[must_use]
    pub fn checks_failed_first(&self) -> Vec<&Check> {
        let mut checks: Vec<&Check> = self.checks.iter().collect();
        checks.sort_by_key(|c| c.passed);
        checks
    }
}

/// Scorer for content records.
///
/// Stateless; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeoScorer;

impl SeoScorer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluate a record
    pub fn evaluate(&self, record: &ContentRecord) -> ScoreReport {
        ScoreReport::from_checks(vec![
            rules::title_check(record),
            rules::description_check(record),
            rules::content_check(record),
            rules::keyword_check(record),
            rules::tag_check(record),
        ])
    }
}

/// Evaluate a record with the default scorer
pub fn evaluate(record: &ContentRecord) -> ScoreReport {
    SeoScorer::new().evaluate(record)
}
