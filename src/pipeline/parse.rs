//! Record loading with source labels and error context.

use super::PipelineError;
use crate::error::{ErrorContext, Result};
use crate::model::ContentRecord;
use crate::parsers::parse_records;
use std::path::Path;

/// A record together with a label naming where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRecord {
    /// File path, suffixed with `#N` (1-based) when the file holds several records
    pub source: String,
    pub record: ContentRecord,
}

/// Load every record in a file, labelling each with its source
pub fn load_records(path: &Path) -> Result<Vec<LoadedRecord>> {
    let records =
        parse_records(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(label_records(path, records))
}

/// Label records with the path, suffixed `#N` when the file holds several
fn label_records(path: &Path, records: Vec<ContentRecord>) -> Vec<LoadedRecord> {
    let display = path.display().to_string();
    let multiple = records.len() > 1;
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| LoadedRecord {
            source: if multiple {
                format!("{display}#{}", i + 1)
            } else {
                display.clone()
            },
            record,
        })
        .collect()
}

/// Load all records from a list of files, stopping at the first failure
pub fn parse_records_with_context(
    paths: &[impl AsRef<Path>],
    quiet: bool,
) -> anyhow::Result<Vec<LoadedRecord>> {
    let mut loaded = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if !quiet {
            tracing::info!("Loading content record: {:?}", path);
        }
        let records = parse_records(path).map_err(|source| PipelineError::ParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        let records = label_records(path, records);
        tracing::debug!("Loaded {} record(s) from {:?}", records.len(), path);
        loaded.extend(records);
    }
    Ok(loaded)
}
