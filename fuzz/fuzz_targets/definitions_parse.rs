#![no_main]
use libfuzzer_sys::fuzz_target;
use filetype_interrogator::definitions::{delimited, json};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = delimited::parse(text);
        let _ = json::parse(text);
    }
});
