//! Scoring engine tests through the public API.
//!
//! Covers the reference scenarios, window boundaries, and keyword matching
//! policy of the five rules.

use seo_tools::scoring::{CheckCategory, DESCRIPTION_LENGTH, MAX_SCORE, TITLE_LENGTH};
use seo_tools::{ContentRecord, ScoreTier, SeoScorer, evaluate};

fn text_of_len(len: usize, prefix: &str) -> String {
    let mut s = prefix.to_string();
    while s.chars().count() < len {
        s.push('x');
    }
    s
}

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

fn points(record: &ContentRecord, category: CheckCategory) -> u32 {
    evaluate(record).check(category).expect("every category is checked").points
}

// ============================================================================
// Reference Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn optimized_title_with_keyword() {
        let record = ContentRecord::builder()
            .title("A Complete Guide to Container Orchestration Patterns")
            .focus_keyword("orchestration")
            .build();
        let report = evaluate(&record);
        let check = report.check(CheckCategory::Title).unwrap();
        assert!(check.passed);
        assert_eq!(check.points, 25);
    }

    #[test]
    fn empty_description() {
        let record = ContentRecord::builder().description("").build();
        let report = evaluate(&record);
        let check = report.check(CheckCategory::MetaDescription).unwrap();
        assert!(!check.passed);
        assert_eq!(check.points, 5);
        assert!(check.message.contains("missing"));
    }

    #[test]
    fn long_content_with_keyword() {
        let mut body = words(1199);
        body.push_str(" Kubernetes");
        let record = ContentRecord::builder()
            .content(body)
            .focus_keyword("kubernetes")
            .build();
        assert_eq!(points(&record, CheckCategory::Content), 25);
        assert_eq!(points(&record, CheckCategory::Keywords), 15);
    }

    #[test]
    fn two_tags() {
        let record = ContentRecord::builder().tags(["a", "b"]).build();
        let report = evaluate(&record);
        let check = report.check(CheckCategory::Readability).unwrap();
        assert_eq!(check.points, 5);
        assert!(check.message.contains("add 1 more tags"), "{}", check.message);
    }

    #[test]
    fn empty_record() {
        let report = evaluate(&ContentRecord::default());
        assert_eq!(report.score, 15);
        assert_eq!(report.tier(), ScoreTier::NeedsWork);
    }

    #[test]
    fn six_tags_cap_at_ten() {
        let record = ContentRecord::builder()
            .tags(["a", "b", "c", "d", "e", "f"])
            .build();
        assert_eq!(points(&record, CheckCategory::Readability), 10);
    }
}

// ============================================================================
// Length Windows
// ============================================================================

mod windows {
    use super::*;

    #[test]
    fn title_bounds_are_inclusive() {
        for len in [TITLE_LENGTH.min, TITLE_LENGTH.max] {
            let record = ContentRecord::builder()
                .title(text_of_len(len, "seo "))
                .focus_keyword("seo")
                .build();
            assert_eq!(points(&record, CheckCategory::Title), 25, "len {len}");
        }
        for len in [TITLE_LENGTH.min - 1, TITLE_LENGTH.max + 1] {
            let record = ContentRecord::builder()
                .title(text_of_len(len, "seo "))
                .focus_keyword("seo")
                .build();
            assert_eq!(points(&record, CheckCategory::Title), 5, "len {len}");
        }
    }

    #[test]
    fn description_bounds_are_inclusive() {
        for len in [DESCRIPTION_LENGTH.min, DESCRIPTION_LENGTH.max] {
            let record = ContentRecord::builder()
                .description(text_of_len(len, ""))
                .build();
            assert_eq!(points(&record, CheckCategory::MetaDescription), 15, "len {len}");
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 30 two-byte characters
        let record = ContentRecord::builder().title("ü".repeat(30)).build();
        assert_eq!(points(&record, CheckCategory::Title), 15);
    }

    #[test]
    fn content_tiers() {
        let cases = [(0, 5), (299, 5), (300, 15), (499, 15), (500, 20), (999, 20), (1000, 25)];
        for (count, expected) in cases {
            let record = ContentRecord::builder().content(words(count)).build();
            assert_eq!(points(&record, CheckCategory::Content), expected, "{count} words");
        }
    }

    #[test]
    fn punctuation_counts_as_words() {
        let record = ContentRecord::builder().content("-- ... !!").build();
        assert_eq!(record.word_count(), 3);
    }
}

// ============================================================================
// Keyword Policy
// ============================================================================

mod keywords {
    use super::*;

    #[test]
    fn substring_match_is_case_insensitive() {
        let record = ContentRecord::builder()
            .content("Unrustled jimmies")
            .focus_keyword("RUST")
            .build();
        assert_eq!(points(&record, CheckCategory::Keywords), 15);
    }

    #[test]
    fn empty_keyword_scores_zero_even_with_content() {
        let record = ContentRecord::builder()
            .content(words(1200))
            .focus_keyword("   ")
            .build();
        let report = evaluate(&record);
        let check = report.check(CheckCategory::Keywords).unwrap();
        assert_eq!(check.points, 0);
        assert!(check.message.contains("No focus keyword"));
    }

    #[test]
    fn keyword_missing_from_content() {
        let record = ContentRecord::builder()
            .content(words(10))
            .focus_keyword("tokio")
            .build();
        let report = evaluate(&record);
        let check = report.check(CheckCategory::Keywords).unwrap();
        assert_eq!(check.points, 0);
        assert!(check.message.contains("not used"));
    }

    #[test]
    fn keyword_only_title_scores_lowest_tier() {
        let record = ContentRecord::builder()
            .title("Rust")
            .focus_keyword("rust")
            .build();
        assert_eq!(points(&record, CheckCategory::Title), 5);
    }
}

// ============================================================================
// Report Shape
// ============================================================================

#[test]
fn report_score_is_sum_of_checks() {
    let record = ContentRecord::builder()
        .title("Getting Started with Async Rust and Tokio Runtimes")
        .content(words(520))
        .focus_keyword("word")
        .tags(["rust", "async", "tokio"])
        .build();
    let report = SeoScorer::new().evaluate(&record);
    let sum: u32 = report.checks.iter().map(|c| c.points).sum();
    assert_eq!(report.score, sum);
    assert!(report.score <= MAX_SCORE);
    // 15 + 5 + 20 + 15 + 8
    assert_eq!(report.score, 63);
    assert_eq!(report.tier(), ScoreTier::Good);
}

#[test]
fn evaluation_is_deterministic() {
    let record = ContentRecord::builder()
        .title("Deterministic")
        .content(words(42))
        .build();
    assert_eq!(evaluate(&record), evaluate(&record));
}

#[test]
fn scorer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SeoScorer>();
}
