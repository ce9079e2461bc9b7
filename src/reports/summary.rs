//! Summary and table report generators for shell output.
//!
//! Provides compact, human-readable output for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::{BatchSummary, ScoredRecord};
use crate::scoring::{Check, MAX_SCORE};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SOURCE_WIDTH: usize = 32;
const TITLE_WIDTH: usize = 40;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn status_line(&self, check: &Check) -> String {
        let status = if check.passed {
            self.color("[PASS]", "green")
        } else {
            self.color("[FAIL]", "red")
        };
        format!(
            "  {status} {} {}  {}",
            pad_to_width(check.category.name(), 16),
            self.color(
                &format!("{:>2}/{}", check.points, check.category.max_points()),
                "dim"
            ),
            check.message
        )
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        records: &[ScoredRecord],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(config.title.as_deref().unwrap_or("SEO Score"), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if records.is_empty() {
            lines.push(self.color("No records scored", "dim"));
            return Ok(lines.join("\n"));
        }

        for (i, scored) in records.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            let report = &scored.report;
            let tier = report.tier();

            lines.push(format!("{}  {}", self.color("Source:", "cyan"), scored.source));
            if !scored.title.is_empty() {
                lines.push(format!("{}   {}", self.color("Title:", "cyan"), scored.title));
            }
            lines.push(format!(
                "{}   {} {}",
                self.color("Score:", "cyan"),
                self.color(&format!("{}/{MAX_SCORE}", report.score), tier.color()),
                self.color(&format!("({tier})"), tier.color())
            ));

            let checks = report.checks_failed_first();
            for check in checks.iter().take(config.max_checks) {
                lines.push(self.status_line(check));
            }
            let hidden = checks.len().saturating_sub(config.max_checks);
            if hidden > 0 {
                lines.push(self.color(&format!("  ... and {hidden} more checks"), "dim"));
            }
        }

        if records.len() > 1 {
            let summary = BatchSummary::from_scored(records);
            lines.push(String::new());
            lines.push(self.color("Batch:", "bold"));
            lines.push(format!(
                "  {} records, mean {:.1}, {} excellent, {} good, {} needs work",
                summary.total, summary.mean_score, summary.excellent, summary.good, summary.needs_work
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for terminal output with aligned columns
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        records: &[ScoredRecord],
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Widths are measured on uncolored text
        lines.push(self.color(
            &format!(
                "{} {} {} {} {}",
                pad_to_width("SOURCE", SOURCE_WIDTH),
                pad_to_width("SCORE", 7),
                pad_to_width("TIER", 11),
                pad_to_width("FAILED", 7),
                "TITLE"
            ),
            "bold",
        ));
        lines.push("─".repeat(SOURCE_WIDTH + TITLE_WIDTH + 28));

        for scored in records {
            let report = &scored.report;
            let tier = report.tier();
            let failed = report.failed_checks().count();
            let failed_display = pad_to_width(&failed.to_string(), 7);

            lines.push(format!(
                "{} {} {} {} {}",
                pad_to_width(&truncate(&scored.source, SOURCE_WIDTH), SOURCE_WIDTH),
                self.color(&pad_to_width(&report.score.to_string(), 7), tier.color()),
                self.color(&pad_to_width(tier.label(), 11), tier.color()),
                if failed > 0 {
                    self.color(&failed_display, "red")
                } else {
                    failed_display
                },
                truncate(&scored.title, TITLE_WIDTH)
            ));
        }

        let summary = BatchSummary::from_scored(records);
        lines.push(String::new());
        lines.push(format!(
            "Total: {} records | Mean: {:.1} | Excellent: {}, Good: {}, Needs Work: {}",
            summary.total, summary.mean_score, summary.excellent, summary.good, summary.needs_work
        ));

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

/// Truncate a string to fit within `max_width` terminal columns
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = if max_width > 3 { max_width - 3 } else { max_width };
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max_width > 3 {
        out.push_str("...");
    }
    out
}

/// Right-pad to `width` terminal columns
fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}
