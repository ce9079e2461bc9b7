#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the single-record entry point and score whatever parses.
///
/// Runs format detection, the matching parser, and all five scoring rules.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(record) = seo_tools::parsers::parse_record_str(s) {
            let report = seo_tools::evaluate(&record);
            assert!(report.score <= seo_tools::scoring::MAX_SCORE);
        }
    }
});
