//! Score command handler.
//!
//! Implements the `score` subcommand for evaluating content records.

use crate::config::{ScoreConfig, Validatable};
use crate::pipeline::{
    OutputTarget, PipelineError, ScoredRecord, exit_codes, parse_records_with_context,
    resolve_format, score_loaded, should_use_color, write_output,
};
use crate::reports::{ReportConfig, create_reporter};
use crate::scoring::{ScoreTier, SeoScorer};
use anyhow::{Result, bail};

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }

    let quiet = config.behavior.quiet;
    let loaded = parse_records_with_context(config.paths.as_slice(), quiet)?;

    let scorer = SeoScorer::new();
    let scored = score_loaded(&scorer, &loaded);

    for record in &scored {
        tracing::debug!(
            "{}: {}/100 ({})",
            record.source,
            record.report.score,
            record.report.tier()
        );
    }
    if !quiet {
        tracing::info!("Scored {} record(s)", scored.len());
    }

    // Render and write the report
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let format = resolve_format(config.output.format, scored.len());
    let use_color = should_use_color(config.output.no_color, &output_target);
    let report_config = ReportConfig {
        max_checks: config.output.max_checks,
        ..ReportConfig::default()
    };

    let reporter = create_reporter(format, use_color);
    let output_text = reporter
        .generate(&scored, &report_config)
        .map_err(|source| PipelineError::ReportFailed { source })?;
    write_output(&output_text, &output_target, quiet)?;

    Ok(determine_exit_code(&config, &scored))
}

/// Determine the exit code from the configured thresholds.
fn determine_exit_code(config: &ScoreConfig, scored: &[ScoredRecord]) -> i32 {
    let mut exit_code = exit_codes::SUCCESS;

    if let Some(threshold) = config.scoring.min_score {
        for record in scored.iter().filter(|r| r.report.score < threshold) {
            tracing::error!(
                "{}: score {} is below minimum threshold {}",
                record.source,
                record.report.score,
                threshold
            );
            exit_code = exit_codes::BELOW_THRESHOLD;
        }
    }

    if config.behavior.fail_on_needs_work {
        for record in scored
            .iter()
            .filter(|r| r.report.tier() == ScoreTier::NeedsWork)
        {
            tracing::error!(
                "{}: score {} is in the {} tier",
                record.source,
                record.report.score,
                ScoreTier::NeedsWork
            );
            exit_code = exit_codes::BELOW_THRESHOLD;
        }
    }

    exit_code
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreConfigBuilder;
    use crate::model::ContentRecord;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    fn scored_with_tags(n: usize) -> ScoredRecord {
        let record = ContentRecord::builder()
            .tags((0..n).map(|i| format!("t{i}")))
            .build();
        ScoredRecord::new(&SeoScorer::new(), "post.md", &record)
    }

    #[test]
    fn test_exit_code_without_thresholds() {
        let config = ScoreConfigBuilder::new().path("post.md").build().unwrap();
        assert_eq!(
            determine_exit_code(&config, &[scored_with_tags(0)]),
            exit_codes::SUCCESS
        );
    }

    #[test]
    fn test_exit_code_min_score() {
        // 15 base points plus 10 for five tags
        let scored = [scored_with_tags(5)];
        let config = ScoreConfigBuilder::new()
            .path("post.md")
            .min_score(Some(25))
            .build()
            .unwrap();
        assert_eq!(determine_exit_code(&config, &scored), exit_codes::SUCCESS);

        let config = ScoreConfigBuilder::new()
            .path("post.md")
            .min_score(Some(26))
            .build()
            .unwrap();
        assert_eq!(
            determine_exit_code(&config, &scored),
            exit_codes::BELOW_THRESHOLD
        );
    }

    #[test]
    fn test_exit_code_fail_on_needs_work() {
        let config = ScoreConfigBuilder::new()
            .path("post.md")
            .fail_on_needs_work(true)
            .build()
            .unwrap();
        assert_eq!(
            determine_exit_code(&config, &[scored_with_tags(0)]),
            exit_codes::BELOW_THRESHOLD
        );
    }

    #[test]
    fn test_run_score_writes_json_report() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("post.json");
        let output = tmp.path().join("report.json");
        std::fs::write(&input, r#"{"title": "Hello", "tags": ["a", "b", "c"]}"#).unwrap();

        let config = ScoreConfigBuilder::new()
            .path(&input)
            .output_format(ReportFormat::Json)
            .output_file(Some(output.clone()))
            .quiet(true)
            .build()
            .unwrap();
        assert_eq!(run_score(config).unwrap(), exit_codes::SUCCESS);

        let report: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(report["records"][0]["score"], 23);
        assert_eq!(report["records"][0]["slug"], "hello");
    }

    #[test]
    fn test_run_score_rejects_invalid_config() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("post.json");
        std::fs::write(&input, "{}").unwrap();

        let config = ScoreConfigBuilder::new()
            .path(&input)
            .max_checks(0)
            .quiet(true)
            .build()
            .unwrap();
        let err = run_score(config).unwrap_err();
        assert!(err.to_string().contains("output.max_checks"), "{err}");
    }

    #[test]
    fn test_run_score_missing_file() {
        let config = ScoreConfigBuilder::new()
            .path("/nonexistent/post.md")
            .quiet(true)
            .build()
            .unwrap();
        assert!(run_score(config).is_err());
    }
}
