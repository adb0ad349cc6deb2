//! Detection over the built-in catalog.

use filetype_interrogator::{Catalog, Interrogator, InterrogatorError, SignatureDefinition};

use crate::common::{builtin, synthesize_sample};

fn detect_extension(data: &[u8]) -> Option<String> {
    builtin()
        .detect_type(data)
        .unwrap()
        .map(|info| info.extension.clone())
}

#[test]
fn test_every_builtin_entry_detects_from_its_own_sample() {
    for definition in builtin().available_types() {
        let sample = synthesize_sample(definition);
        let info = builtin()
            .detect_type(&sample)
            .unwrap()
            .unwrap_or_else(|| panic!("{} not detected", definition.info.name));
        assert!(
            info.matches_token(&definition.info.extension),
            "{} sample detected as {}",
            definition.info.name,
            info
        );
    }
}

#[test]
fn test_builtin_catalog_has_no_shadowed_entries() {
    let catalog = builtin().catalog();
    let shadowed = catalog.shadowed();
    assert!(
        shadowed.is_empty(),
        "unreachable entries: {:?}",
        shadowed
            .iter()
            .map(|pair| &catalog.entries()[pair.later].info.name)
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_canonical_headers() {
    let cases: &[(&[u8], &str)] = &[
        (b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR", "png"),
        (b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n", "pdf"),
        (b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00", "jpg"),
        (b"GIF87a\x01\x00\x01\x00", "gif"),
        (b"GIF89a\x01\x00\x01\x00", "gif"),
        (b"\x7FELF\x02\x01\x01\x00", "elf"),
        (b"MZ\x90\x00\x03\x00\x00\x00", "exe"),
        (b"\x1F\x8B\x08\x00\x00\x00\x00\x00", "gz"),
        (b"7z\xBC\xAF\x27\x1C\x00\x04", "7z"),
        (b"Rar!\x1A\x07\x01\x00", "rar"),
        (b"SQLite format 3\x00\x10\x00", "sqlite"),
        (b"\x00asm\x01\x00\x00\x00", "wasm"),
        (b"RIFF\x24\x08\x00\x00WAVEfmt ", "wav"),
        (b"RIFF\x24\x08\x00\x00WEBPVP8 ", "webp"),
        (b"RIFF\x24\x08\x00\x00AVI LIST", "avi"),
        (b"\x00\x00\x00\x20ftypisom\x00\x00\x02\x00", "mp4"),
        (b"\x00\x00\x00\x20ftypM4A \x00\x00\x00\x00", "m4a"),
        (b"ID3\x04\x00\x00\x00\x00\x00\x00", "mp3"),
        (b"OggS\x00\x02\x00\x00", "ogg"),
        (b"fLaC\x00\x00\x00\x22", "flac"),
        (b"wOF2\x00\x01\x00\x00", "woff2"),
        (b"{\\rtf1\\ansi", "rtf"),
        (b"PK\x05\x06\x00\x00\x00\x00", "zip"),
    ];

    for (data, expected) in cases {
        assert_eq!(
            detect_extension(data).as_deref(),
            Some(*expected),
            "input {:02X?}",
            &data[..data.len().min(8)]
        );
    }
}

#[test]
fn test_tar_magic_at_offset_257() {
    let mut data = vec![0u8; 512];
    data[..8].copy_from_slice(b"file.txt");
    data[257..263].copy_from_slice(b"ustar\x00");
    assert_eq!(detect_extension(&data).as_deref(), Some("tar"));

    // Same bytes at the start of a short buffer are not a tar archive.
    assert_ne!(detect_extension(b"ustar\x00\x00\x00").as_deref(), Some("tar"));
}

#[test]
fn test_gif_wildcard_accepts_every_byte() {
    for value in 0..=u8::MAX {
        let data = [b'G', b'I', b'F', b'8', value, b'a', 0x01, 0x00];
        assert_eq!(
            detect_extension(&data).as_deref(),
            Some("gif"),
            "byte {:#04x}",
            value
        );
    }
}

#[test]
fn test_header_longer_than_buffer_never_matches() {
    // First seven bytes of the PNG signature.
    let data = b"\x89PNG\r\n\x1a";
    assert_ne!(detect_extension(data).as_deref(), Some("png"));
}

#[test]
fn test_empty_input() {
    assert!(matches!(
        builtin().detect_type(b""),
        Err(InterrogatorError::EmptyInput)
    ));
}

#[test]
fn test_unrecognised_binary_is_none() {
    let data = [0xF0, 0x9F, 0x00, 0xC3, 0x28, 0xFE, 0xFE, 0x01];
    assert!(builtin().detect_type(&data).unwrap().is_none());
}

#[test]
fn test_detection_is_idempotent() {
    let data = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
    let first = builtin().detect_type(data).unwrap();
    let second = builtin().detect_type(data).unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first.unwrap(), second.unwrap()));
}

#[test]
fn test_overlapping_definitions_first_wins() {
    let png = builtin()
        .available_types()
        .iter()
        .find(|d| d.info.extension == "png")
        .cloned()
        .unwrap();
    let mut renamed: SignatureDefinition = png.clone();
    renamed.info.name = "Shadow PNG".to_string();
    renamed.info.extension = "spng".to_string();

    let sample = synthesize_sample(&png);

    let interrogator = Interrogator::new(Catalog::new(vec![png.clone(), renamed.clone()]));
    assert_eq!(interrogator.detect_type(&sample).unwrap().unwrap().extension, "png");

    let interrogator = Interrogator::new(Catalog::new(vec![renamed, png]));
    assert_eq!(interrogator.detect_type(&sample).unwrap().unwrap().extension, "spng");
}

#[test]
fn test_detect_many_matches_sequential_detection() {
    let samples: Vec<Vec<u8>> = builtin()
        .available_types()
        .iter()
        .map(synthesize_sample)
        .collect();

    let parallel = builtin().detect_many(&samples);
    for (sample, result) in samples.iter().zip(parallel) {
        assert_eq!(result.unwrap(), builtin().detect_type(sample).unwrap());
    }
}

#[test]
fn test_available_sets() {
    let extensions = builtin().available_extensions();
    for ext in ["pdf", "png", "zip", "docx", "xlsx", "pptx", "doc", "tar", "epub"] {
        assert!(extensions.contains(ext), "missing {}", ext);
    }
    // The text placeholder is not byte-matchable.
    assert!(!extensions.contains("txt"));

    let mimes = builtin().available_mime_types();
    assert!(mimes.contains("application/pdf"));
    assert!(!mimes.contains("text/plain"));
}
