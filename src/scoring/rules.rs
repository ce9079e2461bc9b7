//! The five scoring rules.
//!
//! Each rule reads the record alone and yields exactly one [`Check`].
//! Thresholds and point values are fixed constants.

use crate::model::{ContentRecord, contains_ignore_case, word_count};

use super::scorer::{Check, CheckCategory};

/// Inclusive character-count window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthWindow {
    pub min: usize,
    pub max: usize,
}

impl LengthWindow {
    #[must_use]
    pub const fn contains(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

/// Recommended title length in characters
pub const TITLE_LENGTH: LengthWindow = LengthWindow { min: 30, max: 60 };
/// Recommended meta description length in characters
pub const DESCRIPTION_LENGTH: LengthWindow = LengthWindow { min: 120, max: 160 };

/// Points when both length and keyword conditions hold
const WINDOW_FULL_POINTS: u32 = 25;
/// Points when only the length condition holds
const WINDOW_LENGTH_POINTS: u32 = 15;
/// Floor for title and description
const WINDOW_MIN_POINTS: u32 = 5;

/// Minimum word count for the content check to pass
pub const MIN_CONTENT_WORDS: usize = 300;
/// (minimum words, points), highest first
const CONTENT_TIERS: [(usize, u32); 3] = [(1000, 25), (500, 20), (MIN_CONTENT_WORDS, 15)];
const CONTENT_MIN_POINTS: u32 = 5;

const KEYWORD_POINTS: u32 = 15;

/// Minimum tag count for the tag coverage check to pass
pub const MIN_TAGS: usize = 3;
/// (minimum tags, points), highest first
const TAG_TIERS: [(usize, u32); 3] = [(5, 10), (MIN_TAGS, 8), (1, 5)];

/// Pick the points of the first tier whose threshold `value` reaches
fn tiered_points(value: usize, tiers: &[(usize, u32)], floor: u32) -> u32 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(floor, |&(_, points)| points)
}

/// Shared length-window plus keyword-presence logic for title and description
fn window_points(length_ok: bool, keyword_ok: bool) -> u32 {
    match (length_ok, keyword_ok) {
        (true, true) => WINDOW_FULL_POINTS,
        (true, false) => WINDOW_LENGTH_POINTS,
        (false, _) => WINDOW_MIN_POINTS,
    }
}

fn keyword_in(text: &str, record: &ContentRecord) -> bool {
    record
        .focus_keyword()
        .is_some_and(|keyword| contains_ignore_case(text, keyword))
}

pub(super) fn title_check(record: &ContentRecord) -> Check {
    let len = record.title.chars().count();
    let length_ok = TITLE_LENGTH.contains(len);
    let keyword_ok = keyword_in(&record.title, record);

    let message = if len < TITLE_LENGTH.min {
        format!(
            "Title is too short ({len} characters, aim for {}-{})",
            TITLE_LENGTH.min, TITLE_LENGTH.max
        )
    } else if len > TITLE_LENGTH.max {
        format!(
            "Title is too long ({len} characters, aim for {}-{})",
            TITLE_LENGTH.min, TITLE_LENGTH.max
        )
    } else if record.focus_keyword().is_none() {
        "Title length is good, but no focus keyword is set".to_string()
    } else if !keyword_ok {
        "Title is missing the focus keyword".to_string()
    } else {
        format!("Title is optimized ({len} characters, includes focus keyword)")
    };

    Check {
        category: CheckCategory::Title,
        passed: length_ok && keyword_ok,
        message,
        points: window_points(length_ok, keyword_ok),
    }
}

pub(super) fn description_check(record: &ContentRecord) -> Check {
    let len = record.description.chars().count();
    let length_ok = DESCRIPTION_LENGTH.contains(len);
    let keyword_ok = keyword_in(&record.description, record);

    let message = if record.description.trim().is_empty() {
        "Meta description is missing".to_string()
    } else if len < DESCRIPTION_LENGTH.min {
        format!(
            "Meta description is too short ({len} characters, aim for {}-{})",
            DESCRIPTION_LENGTH.min, DESCRIPTION_LENGTH.max
        )
    } else if len > DESCRIPTION_LENGTH.max {
        format!(
            "Meta description is too long ({len} characters, aim for {}-{})",
            DESCRIPTION_LENGTH.min, DESCRIPTION_LENGTH.max
        )
    } else if record.focus_keyword().is_none() {
        "Meta description length is good, but no focus keyword is set".to_string()
    } else if !keyword_ok {
        "Meta description is missing the focus keyword".to_string()
    } else {
        format!("Meta description is optimized ({len} characters, includes focus keyword)")
    };

    Check {
        category: CheckCategory::MetaDescription,
        passed: length_ok && keyword_ok,
        message,
        points: window_points(length_ok, keyword_ok),
    }
}

pub(super) fn content_check(record: &ContentRecord) -> Check {
    let words = word_count(&record.content);
    let passed = words >= MIN_CONTENT_WORDS;

    let message = if passed {
        format!("Content length is good ({words} words)")
    } else {
        format!("Content is too short ({words} words, minimum {MIN_CONTENT_WORDS})")
    };

    Check {
        category: CheckCategory::Content,
        passed,
        message,
        points: tiered_points(words, &CONTENT_TIERS, CONTENT_MIN_POINTS),
    }
}

pub(super) fn keyword_check(record: &ContentRecord) -> Check {
    let (passed, message) = match record.focus_keyword() {
        None => (false, "No focus keyword set".to_string()),
        Some(keyword) if contains_ignore_case(&record.content, keyword) => (
            true,
            format!("Focus keyword \"{keyword}\" is used in the content"),
        ),
        Some(keyword) => (
            false,
            format!("Focus keyword \"{keyword}\" is not used in the content"),
        ),
    };

    Check {
        category: CheckCategory::Keywords,
        passed,
        message,
        points: if passed { KEYWORD_POINTS } else { 0 },
    }
}

pub(super) fn tag_check(record: &ContentRecord) -> Check {
    let count = record.tags.len();
    let passed = count >= MIN_TAGS;

    let message = if passed {
        format!("Good tag coverage ({count} tags)")
    } else {
        let missing = MIN_TAGS - count;
        format!("Only {count} tags, add {missing} more tags (minimum {MIN_TAGS})")
    };

    Check {
        category: CheckCategory::Readability,
        passed,
        message,
        points: tiered_points(count, &TAG_TIERS, 0),
    }
}
