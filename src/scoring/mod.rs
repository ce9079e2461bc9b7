//! SEO scoring engine.
//!
//! Deterministic, rule-based scoring of a [`ContentRecord`](crate::model::ContentRecord)
//! for search readiness. Five independent rules each produce one check:
//!
//! | Category           | Max | Measures                                      |
//! |--------------------|-----|-----------------------------------------------|
//! | `title`            | 25  | 30-60 characters, contains focus keyword      |
//! | `metaDescription`  | 25  | 120-160 characters, contains focus keyword    |
//! | `content`          | 25  | word count (300 / 500 / 1000 tiers)           |
//! | `keywords`         | 15  | focus keyword set and used in the body        |
//! | `readability`      | 10  | tag coverage (1 / 3 / 5 tiers)                |
//!
//! The total is the sum of check points, capped at 100. Evaluation never
//! fails and has no side effects, so it is safe to rerun on every edit.
//!
//! # Usage
//!
//! ```
//! use seo_tools::model::ContentRecord;
//! use seo_tools::scoring::{SeoScorer, ScoreTier};
//!
//! let record = ContentRecord::builder()
//!     .title("A Complete Guide to Container Orchestration Patterns")
//!     .focus_keyword("orchestration")
//!     .tags(["kubernetes", "containers"])
//!     .build();
//!
//! let report = SeoScorer::new().evaluate(&record);
//! assert_eq!(report.checks.len(), 5);
//! assert_eq!(report.tier(), ScoreTier::NeedsWork);
//! ```

mod rules;
mod scorer;

pub use rules::{DESCRIPTION_LENGTH, LengthWindow, MIN_CONTENT_WORDS, MIN_TAGS, TITLE_LENGTH};
pub use scorer::{
    Check, CheckCategory, MAX_SCORE, SCORING_ENGINE_VERSION, ScoreReport, ScoreTier, SeoScorer,
    evaluate,
};
