//! Formats sharing a container header, told apart by secondary markers.

use crate::common::{
    builtin, compound_document_with, utf16le, zip_with_entry, zip_with_entry_and_body,
};

fn detect_extension(data: &[u8]) -> Option<String> {
    builtin()
        .detect_type(data)
        .unwrap()
        .map(|info| info.extension.clone())
}

#[test]
fn test_plain_zip() {
    let data = zip_with_entry("readme.md");
    assert_eq!(detect_extension(&data).as_deref(), Some("zip"));
}

#[test]
fn test_office_open_xml() {
    let cases = [
        ("xl/workbook.xml", "xlsx"),
        ("word/document.xml", "docx"),
        ("ppt/presentation.xml", "pptx"),
    ];
    for (entry, expected) in cases {
        let data = zip_with_entry(entry);
        assert_eq!(detect_extension(&data).as_deref(), Some(expected), "{}", entry);
    }
}

#[test]
fn test_marker_deep_in_sample() {
    // [Content_Types].xml first, the part name appears much later.
    let mut data = zip_with_entry_and_body("[Content_Types].xml", &[0x20; 1500]);
    data.extend_from_slice(&zip_with_entry("word/document.xml"));
    assert_eq!(detect_extension(&data).as_deref(), Some("docx"));
}

#[test]
fn test_opendocument() {
    let cases = [
        ("application/vnd.oasis.opendocument.text", "odt"),
        ("application/vnd.oasis.opendocument.spreadsheet", "ods"),
        ("application/vnd.oasis.opendocument.presentation", "odp"),
    ];
    for (mime, expected) in cases {
        let data = zip_with_entry_and_body("mimetype", mime.as_bytes());
        assert_eq!(detect_extension(&data).as_deref(), Some(expected), "{}", mime);
    }
}

#[test]
fn test_epub() {
    let data = zip_with_entry_and_body("mimetype", b"application/epub+zip");
    assert_eq!(detect_extension(&data).as_deref(), Some("epub"));

    // A different first entry makes it a plain archive.
    let data = zip_with_entry_and_body("mimetypes", b"application/epub+zip");
    assert_eq!(detect_extension(&data).as_deref(), Some("zip"));
}

#[test]
fn test_legacy_office_by_stream_name() {
    let cases = [
        (utf16le("WordDocument"), "doc"),
        (utf16le("Workbook"), "xls"),
        (utf16le("PowerPoint Document"), "ppt"),
    ];
    for (marker, expected) in cases {
        let data = compound_document_with(&marker);
        assert_eq!(detect_extension(&data).as_deref(), Some(expected));
    }
}

#[test]
fn test_legacy_office_by_offset_512() {
    let mut word = compound_document_with(b"");
    word[512..516].copy_from_slice(&[0xEC, 0xA5, 0xC1, 0x00]);
    assert_eq!(detect_extension(&word).as_deref(), Some("doc"));

    let mut excel = compound_document_with(b"");
    excel[512..520].copy_from_slice(&[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00]);
    assert_eq!(detect_extension(&excel).as_deref(), Some("xls"));
}

#[test]
fn test_unknown_compound_document() {
    let data = compound_document_with(&utf16le("SummaryInformation"));
    assert_eq!(detect_extension(&data), None);
}
