//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_list, escape_markdown_table, escape_md_or_dash};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::{BatchSummary, ScoredRecord};
use crate::scoring::MAX_SCORE;
use chrono::Utc;
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the per-record check tables
    include_checks: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_checks: true,
        }
    }

    /// Only render the overview table
    #[must_use]
    pub const fn overview_only(mut self) -> Self {
        self.include_checks = false;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        records: &[ScoredRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        let title = config.title.as_deref().unwrap_or("SEO Score Report");

        writeln!(md, "# {}\n", escape_markdown_inline(title))?;
        writeln!(
            md,
            "**Generated:** {} by seo-tools {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            env!("CARGO_PKG_VERSION")
        )?;

        // Overview
        let summary = BatchSummary::from_scored(records);
        writeln!(md, "## Summary\n")?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Records | {} |", summary.total)?;
        writeln!(md, "| Mean score | {:.1} |", summary.mean_score)?;
        writeln!(md, "| Excellent | {} |", summary.excellent)?;
        writeln!(md, "| Good | {} |", summary.good)?;
        writeln!(md, "| Needs Work | {} |\n", summary.needs_work)?;

        if records.len() > 1 {
            writeln!(md, "| Source | Title | Score | Tier |")?;
            writeln!(md, "|--------|-------|-------|------|")?;
            for scored in records {
                writeln!(
                    md,
                    "| {} | {} | {} | {} |",
                    escape_markdown_table(&scored.source),
                    escape_md_or_dash(&scored.title),
                    scored.report.score,
                    scored.report.tier()
                )?;
            }
            md.push('\n');
        }

        if !self.include_checks {
            return Ok(md);
        }

        for scored in records {
            let report = &scored.report;
            let heading = if scored.title.trim().is_empty() {
                &scored.source
            } else {
                &scored.title
            };
            writeln!(md, "## {}\n", escape_markdown_inline(heading))?;
            writeln!(md, "- **Source:** `{}`", scored.source.replace('`', "'"))?;
            writeln!(md, "- **Slug:** `{}`", scored.slug.replace('`', "'"))?;
            writeln!(
                md,
                "- **Score:** {}/{MAX_SCORE} ({})\n",
                report.score,
                report.tier()
            )?;

            writeln!(md, "| Status | Category | Points | Message |")?;
            writeln!(md, "|--------|----------|--------|---------|")?;
            for check in report.checks_failed_first().into_iter().take(config.max_checks) {
                writeln!(
                    md,
                    "| {} | {} | {}/{} | {} |",
                    if check.passed { "✅ Pass" } else { "❌ Fail" },
                    check.category,
                    check.points,
                    check.category.max_points(),
                    escape_markdown_table(&check.message)
                )?;
            }
            md.push('\n');

            let failed: Vec<_> = report.failed_checks().collect();
            if !failed.is_empty() {
                writeln!(md, "**To improve:**\n")?;
                for check in failed {
                    writeln!(md, "- {}", escape_markdown_list(&check.message))?;
                }
                md.push('\n');
            }
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
