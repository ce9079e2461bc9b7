//! Content record model.
//!
//! A [`ContentRecord`] carries the fields of a post that the scorer looks
//! at. Records usually come from a form payload or a file on disk, so every
//! field defaults to empty and missing keys deserialize cleanly.

use regex::Regex;
use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Runs of anything that is not a lowercase ASCII letter or digit
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// The fields of a piece of content that are evaluated for SEO readiness
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentRecord {
    /// Page title
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Meta description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Body text
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Primary search term the author is targeting (may be empty)
    #[serde(deserialize_with = "null_as_default")]
    pub focus_keyword: String,
    /// Tags in author order
    #[serde(deserialize_with = "tag_list")]
    pub tags: Vec<String>,
    /// URL slug, if the author set one explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ContentRecord {
    /// Create an empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for a record
    pub fn builder() -> ContentRecordBuilder {
        ContentRecordBuilder::default()
    }

    /// Number of whitespace-delimited words in the body
    #[must_use]
    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    /// The focus keyword with surrounding whitespace removed, or `None` if unset
    #[must_use]
    pub fn focus_keyword(&self) -> Option<&str> {
        let keyword = self.focus_keyword.trim();
        (!keyword.is_empty()).then_some(keyword)
    }

    /// Explicit slug if set, otherwise one derived from the title
    #[must_use]
    pub fn effective_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => slugify(&self.title),
        }
    }
}

/// Fluent builder for [`ContentRecord`]
#[derive(Debug, Default)]
#[must_use]
pub struct ContentRecordBuilder {
    record: ContentRecord,
}

impl ContentRecordBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.record.content = content.into();
        self
    }

    pub fn focus_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.record.focus_keyword = keyword.into();
        self
    }

    /// Append a single tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.record.tags.push(tag.into());
        self
    }

    /// Replace the tag list
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.record.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ContentRecord {
        self.record
    }
}

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tags as a list of strings, with `null` as the empty list.
///
/// A scalar in place of the list is a common authoring slip (`tags: rust`),
/// so the error names the field.
fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(TagListVisitor)
}

struct TagListVisitor;

impl<'de> Visitor<'de> for TagListVisitor {
    type Value = Vec<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`tags` as a list of strings")
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_seq(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tags = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(tag) = seq.next_element::<String>()? {
            tags.push(tag);
        }
        Ok(tags)
    }
}

/// Count whitespace-delimited words.
///
/// Punctuation-only tokens count as words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive substring test with no word-boundary requirement
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Derive a URL slug from free text.
///
/// Lowercases, collapses every run of non-alphanumeric ASCII characters into
/// a single `-`, and trims dashes from both ends.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}
