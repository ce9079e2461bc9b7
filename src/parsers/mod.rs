//! Content record parsers.
//!
//! Loads [`ContentRecord`]s from files exported by the CMS or written by
//! authors:
//!
//! - **JSON**: one record object, or an array of records
//! - **YAML**: one record mapping, or a sequence of records
//! - **Markdown**: YAML front matter for the metadata, the body as `content`
//!
//! The format is taken from the file extension when it is recognized and
//! sniffed from the content otherwise.
//!
//! ```no_run
//! use seo_tools::parsers::parse_records;
//! use std::path::Path;
//!
//! let records = parse_records(Path::new("posts/hello-world.md")).unwrap();
//! println!("{}", records[0].title);
//! ```

mod frontmatter;

pub use frontmatter::{FrontMatter, split_front_matter};

use crate::model::ContentRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a content record
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("YAML parse error: {0}")]
    YamlError(String),

    #[error("Invalid front matter: {0}")]
    FrontMatter(String),

    #[error("File is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

/// On-disk representation of a content record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Yaml,
    /// Markdown with optional YAML front matter
    Markdown,
}

impl RecordFormat {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Markdown => "Markdown",
        }
    }

    /// Format implied by a file extension, if recognized
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    /// Sniff the format from content
    #[must_use]
    pub fn detect(content: &str) -> Self {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            return Self::Json;
        }
        // A bare `---` also opens a YAML document, so only claim Markdown
        // when the block is closed
        if matches!(split_front_matter(content), Ok(Some(_))) {
            return Self::Markdown;
        }
        Self::Yaml
    }
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maximum record file size (16 MB)
pub const MAX_RECORD_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Read every record in a file
pub fn parse_records(path: &Path) -> Result<Vec<ContentRecord>, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_RECORD_FILE_SIZE {
        return Err(ParseError::TooLarge {
            size: metadata.len(),
            limit: MAX_RECORD_FILE_SIZE,
        });
    }
    let content = std::fs::read_to_string(path)?;
    let format = RecordFormat::from_path(path).unwrap_or_else(|| RecordFormat::detect(&content));
    tracing::debug!("Reading {} as {}", path.display(), format);
    parse_records_str(&content, format)
}

/// Read a file expected to hold exactly one record.
///
/// When the file holds a list, the first record is returned; an empty list
/// yields an empty record.
pub fn parse_record(path: &Path) -> Result<ContentRecord, ParseError> {
    Ok(parse_records(path)?.into_iter().next().unwrap_or_default())
}

/// Parse records from string content in a known format
pub fn parse_records_str(
    content: &str,
    format: RecordFormat,
) -> Result<Vec<ContentRecord>, ParseError> {
    match format {
        RecordFormat::Json => parse_json(content),
        RecordFormat::Yaml => parse_yaml(content),
        RecordFormat::Markdown => parse_markdown(content).map(|record| vec![record]),
    }
}

/// Parse a single record, sniffing the format
pub fn parse_record_str(content: &str) -> Result<ContentRecord, ParseError> {
    let records = parse_records_str(content, RecordFormat::detect(content))?;
    Ok(records.into_iter().next().unwrap_or_default())
}

/// A file may hold a single record or a list of them. The shape is decided
/// before deserializing so field errors keep their detail.
fn parse_json(content: &str) -> Result<Vec<ContentRecord>, ParseError> {
    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(vec![serde_json::from_str(content)?])
    }
}

fn parse_yaml(content: &str) -> Result<Vec<ContentRecord>, ParseError> {
    if content.trim().is_empty() {
        return Ok(vec![ContentRecord::default()]);
    }
    let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(content)?;
    if value.is_null() {
        Ok(vec![ContentRecord::default()])
    } else if value.is_sequence() {
        Ok(serde_yaml_ng::from_str(content)?)
    } else {
        Ok(vec![serde_yaml_ng::from_str(content)?])
    }
}

fn parse_markdown(content: &str) -> Result<ContentRecord, ParseError> {
    let Some(front_matter) = split_front_matter(content)? else {
        return Ok(ContentRecord {
            content: content.trim().to_string(),
            ..ContentRecord::default()
        });
    };

    let mut record: ContentRecord = if front_matter.yaml.trim().is_empty() {
        ContentRecord::default()
    } else {
        serde_yaml_ng::from_str(front_matter.yaml)?
    };

    let body = front_matter.body.trim();
    if !body.is_empty() {
        record.content = body.to_string();
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            RecordFormat::from_path(Path::new("post.json")),
            Some(RecordFormat::Json)
        );
        assert_eq!(
            RecordFormat::from_path(Path::new("post.YML")),
            Some(RecordFormat::Yaml)
        );
        assert_eq!(
            RecordFormat::from_path(Path::new("drafts/post.markdown")),
            Some(RecordFormat::Markdown)
        );
        assert_eq!(RecordFormat::from_path(Path::new("post.txt")), None);
        assert_eq!(RecordFormat::from_path(Path::new("post")), None);
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(RecordFormat::detect(r#"{"title": "x"}"#), RecordFormat::Json);
        assert_eq!(RecordFormat::detect("  [ ]"), RecordFormat::Json);
        assert_eq!(
            RecordFormat::detect("---\ntitle: x\n---\nbody"),
            RecordFormat::Markdown
        );
        assert_eq!(RecordFormat::detect("---\ntitle: x\n"), RecordFormat::Yaml);
        assert_eq!(RecordFormat::detect("title: x"), RecordFormat::Yaml);
    }

    #[test]
    fn test_parse_json_single_and_many() {
        let one = parse_records_str(r#"{"title": "One"}"#, RecordFormat::Json).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].title, "One");

        let many = parse_records_str(
            r#"[{"title": "A"}, {"title": "B", "tags": ["x"]}]"#,
            RecordFormat::Json,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].tags, vec!["x"]);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = "title: Hello\nfocusKeyword: rust\ntags:\n  - a\n  - b\n";
        let records = parse_records_str(yaml, RecordFormat::Yaml).unwrap();
        assert_eq!(records[0].focus_keyword, "rust");
        assert_eq!(records[0].tags.len(), 2);
    }

    #[test]
    fn test_parse_empty_yaml_is_default() {
        let records = parse_records_str("", RecordFormat::Yaml).unwrap();
        assert_eq!(records, vec![ContentRecord::default()]);
    }

    #[test]
    fn test_parse_markdown_front_matter() {
        let doc = "---\ntitle: Hello\ndescription: World\ntags: [a, b, c]\n---\n\nSome body words here.\n";
        let record = parse_record_str(doc).unwrap();
        assert_eq!(record.title, "Hello");
        assert_eq!(record.tags, vec!["a", "b", "c"]);
        assert_eq!(record.content, "Some body words here.");
    }

    #[test]
    fn test_markdown_body_overrides_front_matter_content() {
        let doc = "---\ncontent: from yaml\n---\nfrom body";
        let records = parse_records_str(doc, RecordFormat::Markdown).unwrap();
        assert_eq!(records[0].content, "from body");

        let doc = "---\ncontent: from yaml\n---\n\n";
        let records = parse_records_str(doc, RecordFormat::Markdown).unwrap();
        assert_eq!(records[0].content, "from yaml");
    }

    #[test]
    fn test_markdown_without_front_matter() {
        let records = parse_records_str("Just prose.\n", RecordFormat::Markdown).unwrap();
        assert_eq!(records[0].content, "Just prose.");
        assert!(records[0].title.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let result = parse_records_str("{not json", RecordFormat::Json);
        assert!(matches!(result, Err(ParseError::JsonError(_))));
    }

    #[test]
    fn test_field_errors_name_the_field() {
        let err = parse_records_str(r#"{"title": "x", "tags": "rust"}"#, RecordFormat::Json)
            .unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
        let message = err.to_string();
        assert!(message.contains("tags"), "{message}");
        assert!(message.contains("line 1"), "{message}");
        assert!(!message.contains("untagged"), "{message}");

        let err = parse_records_str(r#"[{"title": "a"}, {"tags": "rust"}]"#, RecordFormat::Json)
            .unwrap_err();
        assert!(err.to_string().contains("tags"), "{err}");

        let err = parse_records_str("title: x\ntags: rust\n", RecordFormat::Yaml).unwrap_err();
        assert!(matches!(err, ParseError::YamlError(_)));
        assert!(err.to_string().contains("tags"), "{err}");
        assert!(!err.to_string().contains("untagged"), "{err}");

        let err = parse_records_str("- title: a\n- tags: rust\n", RecordFormat::Yaml).unwrap_err();
        assert!(err.to_string().contains("tags"), "{err}");
    }

    #[test]
    fn test_yaml_comment_only_is_default() {
        let records = parse_records_str("# draft\n", RecordFormat::Yaml).unwrap();
        assert_eq!(records, vec![ContentRecord::default()]);
    }

    #[test]
    fn test_invalid_front_matter_yaml_is_error() {
        let result = parse_records_str("---\ntags: [unclosed\n---\nbody", RecordFormat::Markdown);
        assert!(matches!(result, Err(ParseError::YamlError(_))));
    }
}
