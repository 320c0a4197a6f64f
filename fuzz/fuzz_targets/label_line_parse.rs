//! Fuzz target for label first-line parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 lines to the class index parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use yolo2cls::annotation::fuzz_parse_class_index;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_parse_class_index(line);
});
