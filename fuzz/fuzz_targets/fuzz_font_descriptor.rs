//! Fuzz target for font descriptor parsing.
//!
//! Tests that FontDescriptor parsing handles arbitrary strings without
//! panicking, and that anything it accepts survives a display round trip.

#![no_main]

use gabby::settings::FontDescriptor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(font) = data.parse::<FontDescriptor>() {
        let shown = font.to_string();
        let reparsed: FontDescriptor = shown.parse().expect("displayed descriptor parses");
        assert_eq!(reparsed, font);
    }
});
