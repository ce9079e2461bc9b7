//! Property-based tests for the scoring engine.

use proptest::prelude::*;
use seo_tools::scoring::{CheckCategory, MAX_SCORE};
use seo_tools::{ContentRecord, evaluate};

fn record_strategy() -> impl Strategy<Value = ContentRecord> {
    (
        "\\PC{0,80}",
        "\\PC{0,200}",
        prop::collection::vec("[a-z]{1,12}", 0..1500),
        "[a-zA-Z ]{0,15}",
        prop::collection::vec("[a-z]{1,10}", 0..10),
    )
        .prop_map(|(title, description, words, keyword, tags)| {
            ContentRecord::builder()
                .title(title)
                .description(description)
                .content(words.join(" "))
                .focus_keyword(keyword)
                .tags(tags)
                .build()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn score_is_bounded(record in record_strategy()) {
        let report = evaluate(&record);
        prop_assert!(report.score <= MAX_SCORE);
    }

    #[test]
    fn score_is_sum_of_points(record in record_strategy()) {
        let report = evaluate(&record);
        let sum: u32 = report.checks.iter().map(|c| c.points).sum();
        prop_assert_eq!(report.score, sum);
    }

    #[test]
    fn one_check_per_category_in_order(record in record_strategy()) {
        let report = evaluate(&record);
        let categories: Vec<CheckCategory> = report.checks.iter().map(|c| c.category).collect();
        prop_assert_eq!(categories, CheckCategory::ALL.to_vec());
    }

    #[test]
    fn points_stay_within_category_range(record in record_strategy()) {
        for check in evaluate(&record).checks {
            prop_assert!(check.points >= check.category.min_points());
            prop_assert!(check.points <= check.category.max_points());
        }
    }

    #[test]
    fn blank_keyword_never_earns_keyword_points(
        record in record_strategy(),
        blank in "\\s{0,5}",
    ) {
        let record = ContentRecord { focus_keyword: blank, ..record };
        let report = evaluate(&record);
        let check = report.check(CheckCategory::Keywords).unwrap();
        prop_assert_eq!(check.points, 0);
        prop_assert!(!check.passed);
    }

    #[test]
    fn more_tags_never_lower_tag_points(
        record in record_strategy(),
        extra in "[a-z]{1,10}",
    ) {
        let before = evaluate(&record);
        let mut more = record.clone();
        more.tags.push(extra);
        let after = evaluate(&more);
        let points = |r: &seo_tools::ScoreReport| {
            r.check(CheckCategory::Readability).map_or(0, |c| c.points)
        };
        prop_assert!(points(&after) >= points(&before));
    }

    #[test]
    fn evaluation_is_deterministic(record in record_strategy()) {
        prop_assert_eq!(evaluate(&record), evaluate(&record));
    }
}
