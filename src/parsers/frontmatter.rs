//! YAML front matter splitting for Markdown posts.

use super::ParseError;

const DELIMITER: &str = "---";

/// A Markdown document split into its front matter and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// YAML between the delimiter lines
    pub yaml: &'a str,
    /// Everything after the closing delimiter
    pub body: &'a str,
}

/// Split `---` delimited front matter off the top of a document.
///
/// Returns `Ok(None)` when the document does not open with a delimiter
/// line, and an error when it opens one but never closes it.
pub fn split_front_matter(content: &str) -> Result<Option<FrontMatter<'_>>, ParseError> {
    let text = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = text.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(None);
    };
    if first.trim_end() != DELIMITER {
        return Ok(None);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Ok(Some(FrontMatter {
                yaml: &text[yaml_start..offset],
                body: &text[offset + line.len()..],
            }));
        }
        offset += line.len();
    }

    Err(ParseError::FrontMatter(
        "opening '---' has no closing delimiter".to_string(),
    ))
}
