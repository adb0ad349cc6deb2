//! Plain-text fallback through the built-in interrogator.

use crate::common::builtin;

fn detect_name(data: &[u8]) -> Option<String> {
    builtin().detect_type(data).unwrap().map(|info| info.name.clone())
}

#[test]
fn test_ascii() {
    assert_eq!(detect_name(b"Hello, world!\n").as_deref(), Some("ASCII Text"));
}

#[test]
fn test_utf8_without_bom() {
    let info = builtin().detect_type("café".as_bytes()).unwrap().unwrap();
    assert!(info.name.starts_with("UTF-8"));
    assert!(!info.name.contains("BOM"));
    assert_eq!(info.extension, "txt");
    assert_eq!(info.mime_type, "text/plain");
}

#[test]
fn test_utf8_with_bom() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice("café".as_bytes());
    let info = builtin().detect_type(&data).unwrap().unwrap();
    assert!(info.name.contains("BOM"));
}

#[test]
fn test_invalid_continuation_byte() {
    assert_eq!(detect_name(b"caf\xC3\x28"), None);
}

#[test]
fn test_signature_wins_over_text() {
    // "<?xml" is ASCII, but the XML signature comes first.
    let info = builtin()
        .detect_type(b"<?xml version=\"1.0\"?><root/>")
        .unwrap()
        .unwrap();
    assert_eq!(info.extension, "xml");
}

#[test]
fn test_byte_input_is_decoded_strictly() {
    // A cut multi-byte sequence is only tolerated for sampled streams.
    let data = "café".as_bytes();
    assert_eq!(detect_name(&data[..data.len() - 1]), None);
}
