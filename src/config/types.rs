//! Configuration types for seo-tools operations.
//!
//! Provides structured configuration for scoring runs and the config file.

use crate::reports::{DEFAULT_MAX_CHECKS, ReportFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over the file with [`AppConfig::merge`] via
/// [`CliOverrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Scoring thresholds
    pub scoring: ScoringConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set how many status lines are shown per record.
    pub const fn max_checks(mut self, max_checks: usize) -> Self {
        self.config.output.max_checks = max_checks;
        self
    }

    /// Set the minimum passing score.
    pub const fn min_score(mut self, min_score: Option<u32>) -> Self {
        self.config.scoring.min_score = min_score;
        self
    }

    /// Fail when any record lands in the needs-work tier.
    pub const fn fail_on_needs_work(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_needs_work = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Settings given on the command line.
///
/// `None` and `false` leave the config file value in place, so a flag that
/// repeats the default still overrides the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub format: Option<ReportFormat>,
    pub file: Option<PathBuf>,
    pub no_color: bool,
    pub max_checks: Option<usize>,
    pub min_score: Option<u32>,
    pub quiet: bool,
    pub fail_on_needs_work: bool,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for score operations
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Record files to score
    pub paths: Vec<PathBuf>,
    /// Output configuration
    pub output: OutputConfig,
    /// Scoring thresholds
    pub scoring: ScoringConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl ScoreConfig {
    /// Build a score configuration from resolved application settings
    #[must_use]
    pub fn from_app_config(paths: Vec<PathBuf>, app: AppConfig) -> Self {
        Self {
            paths,
            output: app.output,
            scoring: app.scoring,
            behavior: app.behavior,
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Status lines shown per record in summary and markdown output (1-5)
    pub max_checks: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            max_checks: DEFAULT_MAX_CHECKS,
        }
    }
}

/// Scoring thresholds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Exit with code 1 if any record scores below this value (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u32>,
}

/// Behavior flags for score operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 if any record is in the "Needs Work" tier
    pub fail_on_needs_work: bool,
}

// ============================================================================
// Builder for ScoreConfig
// ============================================================================

/// Builder for `ScoreConfig`
#[derive(Debug, Default)]
pub struct ScoreConfigBuilder {
    paths: Vec<PathBuf>,
    output: OutputConfig,
    scoring: ScoringConfig,
    behavior: BehaviorConfig,
}

impl ScoreConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    #[must_use]
    pub fn paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn max_checks(mut self, max_checks: usize) -> Self {
        self.output.max_checks = max_checks;
        self
    }

    #[must_use]
    pub const fn min_score(mut self, min_score: Option<u32>) -> Self {
        self.scoring.min_score = min_score;
        self
    }

    #[must_use]
    pub const fn fail_on_needs_work(mut self, fail: bool) -> Self {
        self.behavior.fail_on_needs_work = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    /// Build the `ScoreConfig`, failing when no input files were given.
    pub fn build(self) -> anyhow::Result<ScoreConfig> {
        if self.paths.is_empty() {
            anyhow::bail!("at least one record file is required");
        }
        Ok(ScoreConfig {
            paths: self.paths,
            output: self.output,
            scoring: self.scoring,
            behavior: self.behavior,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_builder() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .min_score(Some(70))
            .fail_on_needs_work(true)
            .quiet(true)
            .build();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.scoring.min_score, Some(70));
        assert!(config.behavior.fail_on_needs_work);
        assert!(config.behavior.quiet);
        assert_eq!(config.output.max_checks, DEFAULT_MAX_CHECKS);
    }

    #[test]
    fn test_score_config_builder_requires_paths() {
        assert!(ScoreConfigBuilder::new().build().is_err());

        let config = ScoreConfigBuilder::new()
            .path("post.md")
            .max_checks(3)
            .build()
            .unwrap();
        assert_eq!(config.paths, vec![PathBuf::from("post.md")]);
        assert_eq!(config.output.max_checks, 3);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml_ng::from_str("scoring:\n  min_score: 60\n").unwrap();
        assert_eq!(config.scoring.min_score, Some(60));
        assert_eq!(config.output, OutputConfig::default());
        assert!(!config.behavior.quiet);
    }

    #[test]
    fn test_score_config_from_app_config() {
        let app = AppConfig::builder().no_color(true).build();
        let config = ScoreConfig::from_app_config(vec![PathBuf::from("a.json")], app);
        assert!(config.output.no_color);
        assert_eq!(config.paths.len(), 1);
    }
}
