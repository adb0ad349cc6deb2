#![no_main]
use libfuzzer_sys::fuzz_target;
use filetype_interrogator::Interrogator;

fuzz_target!(|data: &[u8]| {
    if let Ok(interrogator) = Interrogator::builtin() {
        let _ = interrogator.detect_type(data);
        let _ = interrogator.is_type(data, "docx");
        let _ = interrogator.is_type(data, "txt");
    }
});
