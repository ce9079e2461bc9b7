//! Property-based tests for content record parsers.
//!
//! Ensures parsers don't panic on arbitrary input, including random strings,
//! JSON-like fragments, and front-matter-like documents.

use proptest::prelude::*;
use seo_tools::parsers::{RecordFormat, parse_record_str, parse_records_str, split_front_matter};

proptest! {
    // Parser tests only assert no-panic since random input mostly fails to parse
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_record_str_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = parse_record_str(&s);
    }

    #[test]
    fn detect_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = RecordFormat::detect(&s);
    }

    #[test]
    fn every_format_doesnt_panic(s in "\\PC{0,500}") {
        for format in [RecordFormat::Json, RecordFormat::Yaml, RecordFormat::Markdown] {
            let _ = parse_records_str(&s, format);
        }
    }

    #[test]
    fn json_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"\{[^\}]{0,500}\}"#).unwrap()
    ) {
        let _ = parse_records_str(&s, RecordFormat::Json);
    }

    #[test]
    fn front_matter_like_doesnt_panic(
        yaml in "\\PC{0,200}",
        body in "\\PC{0,200}",
        closed in any::<bool>(),
    ) {
        let input = if closed {
            format!("---\n{yaml}\n---\n{body}")
        } else {
            format!("---\n{yaml}\n{body}")
        };
        let _ = split_front_matter(&input);
        let _ = parse_records_str(&input, RecordFormat::Markdown);
    }

    #[test]
    fn empty_and_whitespace_doesnt_panic(s in "\\s{0,100}") {
        let _ = parse_record_str(&s);
        let _ = RecordFormat::detect(&s);
    }

    #[test]
    fn markdown_without_front_matter_keeps_body(
        body in "[a-zA-Z][a-zA-Z ]{0,200}"
    ) {
        let records = parse_records_str(&body, RecordFormat::Markdown).unwrap();
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].content.as_str(), body.trim());
    }

    #[test]
    fn json_title_survives(title in "[a-zA-Z0-9 ]{0,80}") {
        let input = serde_json::json!({ "title": title }).to_string();
        let record = parse_record_str(&input).unwrap();
        prop_assert_eq!(record.title, title);
    }
}
