#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz front matter splitting, which slices the input by line offsets.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(Some(fm)) = seo_tools::parsers::split_front_matter(s) {
            assert!(fm.yaml.len() + fm.body.len() <= s.len());
        }
    }
});
