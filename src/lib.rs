//! **A library for scoring content records for search-engine readiness.**
//!
//! `seo-tools` evaluates a blog post or page (title, meta description, body,
//! focus keyword, tags) against a fixed rule set and produces a 0-100 score,
//! a tier label, and one categorized check per rule. It powers both a
//! command-line interface for CI use and a Rust library for programmatic
//! integration into editors and publishing pipelines.
//!
//! ## Key Features
//!
//! - **Deterministic Scoring**: Five independent rules covering title length,
//!   meta description length, content depth, keyword usage, and tag coverage.
//! - **Multi-Format Parsing**: Reads records from JSON, YAML, or Markdown with
//!   YAML front matter, with automatic format detection.
//! - **Batch Scoring**: Scores many records in parallel, preserving input order.
//! - **Flexible Reporting**: Renders results as terminal summaries, aligned
//!   tables, JSON, Markdown, or SARIF for CI dashboards.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Defines [`ContentRecord`], the record being scored.
//! - **[`scoring`]**: Home of [`SeoScorer`], which turns a record into a
//!   [`ScoreReport`].
//! - **[`parsers`]**: Reads records from files or strings.
//! - **[`pipeline`]**: Load, score, and write steps shared by the CLI.
//! - **[`reports`]**: Generators for each output format.
//! - **[`config`]**: YAML config file discovery, validation, and merging.
//!
//! ## Getting Started
//!
//! ```
//! use seo_tools::{ContentRecord, ScoreTier, SeoScorer};
//!
//! let record = ContentRecord::builder()
//!     .title("Kubernetes Networking Explained for Platform Teams")
//!     .focus_keyword("kubernetes")
//!     .tags(["k8s", "networking", "devops"])
//!     .build();
//!
//! let report = SeoScorer::new().evaluate(&record);
//! for check in &report.checks {
//!     println!("[{}] {}: {}", if check.passed { "PASS" } else { "FAIL" },
//!         check.category, check.message);
//! }
//! assert_eq!(report.score, 43);
//! assert_eq!(report.tier(), ScoreTier::NeedsWork);
//! ```
//!
//! ### Scoring a File
//!
//! ```no_run
//! use std::path::Path;
//! use seo_tools::{parse_record, SeoScorer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let record = parse_record(Path::new("content/posts/hello.md"))?;
//!     let report = SeoScorer::new().evaluate(&record);
//!     println!("{}: {}/100 ({})", record.title, report.score, report.tier());
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `seo-tools` library crate. The `seo-tools`
//! binary wraps it: `seo-tools score content/posts/*.md --min-score 60`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // usize -> f32 casts for batch means; counts are small in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are not written for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CliOverrides, OutputConfig, ScoringConfig,
};
pub use config::{ConfigError, ScoreConfig, Validatable};
pub use error::{ErrorContext, Result, SeoToolsError};
pub use model::{ContentRecord, ContentRecordBuilder};
pub use parsers::{ParseError, RecordFormat, parse_record, parse_record_str, parse_records};
pub use pipeline::{BatchSummary, ScoredRecord, score_batch};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{Check, CheckCategory, ScoreReport, ScoreTier, SeoScorer, evaluate};
