//! Plain-text fallback for buffers no signature recognises.
//!
//! A buffer is ASCII text when every byte is at most 0x7F. Otherwise it is
//! UTF-8 text when it decodes strictly as UTF-8, with or without a leading
//! byte-order mark. Anything else is left unclassified.

use crate::core::file_type::FileTypeInfo;
use crate::interrogate::config::TextConfig;
use encoding_rs::{DecoderResult, UTF_8};
use serde::{Deserialize, Serialize};
use std::fmt;

/// UTF-8 byte-order mark.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Kind of text a buffer was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextKind {
    Ascii,
    Utf8,
    Utf8Bom,
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextKind::Ascii => write!(f, "Ascii"),
            TextKind::Utf8 => write!(f, "Utf8"),
            TextKind::Utf8Bom => write!(f, "Utf8Bom"),
        }
    }
}

/// Classifies unmatched buffers as text and owns the type descriptions
/// returned for each kind.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    config: TextConfig,
    ascii: FileTypeInfo,
    utf8: FileTypeInfo,
    utf8_bom: FileTypeInfo,
}

impl Default for TextClassifier {
    fn default() -> Self {
        Self::new(TextConfig::default())
    }
}

impl TextClassifier {
    pub fn new(config: TextConfig) -> Self {
        Self {
            config,
            ascii: FileTypeInfo::new(
                "ASCII Text",
                "txt",
                "text/plain",
                vec!["text".into(), "ascii".into()],
            ),
            utf8: FileTypeInfo::new(
                "UTF-8 Text",
                "txt",
                "text/plain",
                vec!["text".into(), "utf8".into(), "utf-8".into()],
            ),
            utf8_bom: FileTypeInfo::new(
                "UTF-8 Text with BOM",
                "txt",
                "text/plain",
                vec!["text".into(), "utf8bom".into()],
            ),
        }
    }

    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Type description for `kind`.
    pub fn info(&self, kind: TextKind) -> &FileTypeInfo {
        match kind {
            TextKind::Ascii => &self.ascii,
            TextKind::Utf8 => &self.utf8,
            TextKind::Utf8Bom => &self.utf8_bom,
        }
    }

    /// Whether `token` names any of the text kinds.
    pub fn is_text_token(&self, token: &str) -> bool {
        [&self.ascii, &self.utf8, &self.utf8_bom]
            .into_iter()
            .any(|info| info.matches_token(token))
    }

    /// Classify `buffer`.
    ///
    /// `truncated` tells whether the buffer was cut from longer input; with
    /// `allow_truncated_tail` set, a multi-byte sequence left incomplete at the
    /// very end is then not treated as malformed.
    pub fn classify(&self, buffer: &[u8], truncated: bool) -> Option<TextKind> {
        if !self.config.enabled || buffer.is_empty() {
            return None;
        }

        if buffer.is_ascii() {
            return Some(TextKind::Ascii);
        }

        let tolerate_tail = truncated && self.config.allow_truncated_tail;
        match buffer.strip_prefix(&UTF8_BOM) {
            Some(rest) if is_utf8(rest, tolerate_tail) => Some(TextKind::Utf8Bom),
            Some(_) => None,
            None if is_utf8(buffer, tolerate_tail) => Some(TextKind::Utf8),
            None => None,
        }
    }
}

/// Strict UTF-8 validation: no replacement, overlong forms and surrogates are
/// malformed. With `tolerate_tail` an incomplete trailing sequence passes.
fn is_utf8(bytes: &[u8], tolerate_tail: bool) -> bool {
    let mut decoder = UTF_8.new_decoder_without_bom_handling();
    let capacity = match decoder.max_utf8_buffer_length_without_replacement(bytes.len()) {
        Some(capacity) => capacity,
        None => return false,
    };
    let mut out = String::with_capacity(capacity);
    let (result, _read) =
        decoder.decode_to_string_without_replacement(bytes, &mut out, !tolerate_tail);
    matches!(result, DecoderResult::InputEmpty)
}
