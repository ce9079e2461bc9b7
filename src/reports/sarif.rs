//! SARIF 2.1.0 report generator for CI/CD integration.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::pipeline::ScoredRecord;
use crate::scoring::{Check, CheckCategory};
use serde::Serialize;

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

/// SARIF report generator
pub struct SarifReporter {
    /// Attach file locations to results
    include_locations: bool,
}

impl SarifReporter {
    /// Create a new SARIF reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_locations: true,
        }
    }

    /// Set whether results carry file locations
    #[must_use]
    pub const fn include_locations(mut self, include: bool) -> Self {
        self.include_locations = include;
        self
    }

    fn result_for(&self, scored: &ScoredRecord, check: &Check) -> SarifResult {
        let title = if scored.title.is_empty() {
            scored.source.as_str()
        } else {
            scored.title.as_str()
        };
        SarifResult {
            rule_id: check.category.rule_id().to_string(),
            level: level_for(check),
            message: SarifMessage {
                text: format!("{title}: {}", check.message),
            },
            locations: if self.include_locations {
                vec![SarifLocation {
                    physical_location: Some(SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: artifact_uri(&scored.source),
                        },
                    }),
                }]
            } else {
                vec![]
            },
        }
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SarifReporter {
    fn generate(
        &self,
        records: &[ScoredRecord],
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let results = records
            .iter()
            .flat_map(|scored| {
                scored
                    .report
                    .failed_checks()
                    .map(move |check| self.result_for(scored, check))
            })
            .collect();

        let report = SarifReport {
            schema: SARIF_SCHEMA.to_string(),
            version: "2.1.0".to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "seo-tools".to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                        rules: get_sarif_rules(),
                    },
                },
                results,
            }],
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Sarif
    }
}

/// A check stuck at its category's lowest tier is a warning; partial credit is a note
fn level_for(check: &Check) -> SarifLevel {
    if check.is_lowest_tier() {
        SarifLevel::Warning
    } else {
        SarifLevel::Note
    }
}

/// Strip the `#N` record suffix so the URI names the file
fn artifact_uri(source: &str) -> String {
    match source.rsplit_once('#') {
        Some((path, index)) if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) => {
            path.to_string()
        }
        _ => source.to_string(),
    }
}

fn get_sarif_rules() -> Vec<SarifRule> {
    CheckCategory::ALL
        .iter()
        .map(|category| SarifRule {
            id: category.rule_id().to_string(),
            name: format!("{category:?}"),
            short_description: SarifMessage {
                text: rule_description(*category).to_string(),
            },
            default_configuration: SarifConfiguration {
                level: SarifLevel::Warning,
            },
        })
        .collect()
}

const fn rule_description(category: CheckCategory) -> &'static str {
    match category {
        CheckCategory::Title => "Title should be 30-60 characters and include the focus keyword",
        CheckCategory::MetaDescription => {
            "Meta description should be 120-160 characters and include the focus keyword"
        }
        CheckCategory::Content => "Content should have at least 300 words",
        CheckCategory::Keywords => "Focus keyword should be set and used in the content",
        CheckCategory::Readability => "Record should have at least 3 tags",
    }
}

// SARIF structures

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
    default_configuration: SarifConfiguration,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifConfiguration {
    level: SarifLevel,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: SarifLevel,
    message: SarifMessage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: Option<SarifPhysicalLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum SarifLevel {
    Note,
    Warning,
}
