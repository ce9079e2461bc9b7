//! Content record model.
//!
//! Defines [`ContentRecord`], the typed boundary between loosely shaped
//! form payloads or files and the scorer, plus the text helpers the
//! scoring rules share.

mod record;

pub use record::{
    ContentRecord, ContentRecordBuilder, contains_ignore_case, slugify, word_count,
};
