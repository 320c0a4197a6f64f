//! Fuzz target for data.yaml class table parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;
use yolo2cls::ClassTable;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(yaml) = std::str::from_utf8(data) else {
        return;
    };

    let _ = ClassTable::from_yaml_str(yaml, Path::new("<fuzz>"));
});
