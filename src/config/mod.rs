//! Configuration module for seo-tools.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seo_tools::config::AppConfig;
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .min_score(Some(70))
//!     .fail_on_needs_work(true)
//!     .build();
//!
//! // Load from file
//! use seo_tools::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None)?;
//! ```
//!
//! # Configuration File
//!
//! Place a `.seo-tools.yaml` file in your project root or `~/.config/seo-tools/`:
//!
//! ```yaml
//! output:
//!   format: table
//! scoring:
//!   min_score: 60
//! ```

pub mod file;
mod types;
mod validation;

// Re-export main types
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CliOverrides, OutputConfig, ScoreConfig,
    ScoreConfigBuilder, ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, generate_full_example_config,
    load_config_file, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.seo-tools.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = &value["properties"];
        assert!(properties.get("output").is_some());
        assert!(properties.get("scoring").is_some());
        assert!(properties.get("behavior").is_some());
    }
}
