//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod score;

pub use score::run_score;

// Re-export config types used by handlers
pub use crate::config::{ScoreConfig, ScoreConfigBuilder};
