//! Configuration validation for seo-tools.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoreConfig, ScoringConfig};
use crate::reports::DEFAULT_MAX_CHECKS;
use crate::scoring::MAX_SCORE;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.scoring.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file
            && let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ConfigError {
                field: "output.file".to_string(),
                message: format!("Parent directory does not exist: {}", parent.display()),
            });
        }

        if !(1..=DEFAULT_MAX_CHECKS).contains(&self.max_checks) {
            errors.push(ConfigError {
                field: "output.max_checks".to_string(),
                message: format!(
                    "max_checks must be between 1 and {DEFAULT_MAX_CHECKS}, got {}",
                    self.max_checks
                ),
            });
        }

        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score
            && min_score > MAX_SCORE
        {
            errors.push(ConfigError {
                field: "scoring.min_score".to_string(),
                message: format!("min_score must be between 0 and {MAX_SCORE}, got {min_score}"),
            });
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for ScoreConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.paths.is_empty() {
            errors.push(ConfigError {
                field: "paths".to_string(),
                message: "At least one record file is required".to_string(),
            });
        }
        for path in &self.paths {
            if !path.exists() {
                errors.push(ConfigError {
                    field: "paths".to_string(),
                    message: format!("File not found: {}", path.display()),
                });
            }
        }

        errors.extend(self.output.validate());
        errors.extend(self.scoring.validate());
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================
