//! File type descriptions and signature definitions.

use crate::core::pattern::BytePattern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description of a detected file type returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileTypeInfo {
    /// Display label, e.g. "JPEG Image".
    pub name: String,
    /// Canonical extension without a leading dot, e.g. "jpg".
    pub extension: String,
    /// Canonical MIME type.
    pub mime_type: String,
    /// Alternate extensions or type names that also identify this type.
    pub aliases: Vec<String>,
}

impl FileTypeInfo {
    pub fn new(
        name: impl Into<String>,
        extension: impl Into<String>,
        mime_type: impl Into<String>,
        aliases: Vec<String>,
    ) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(aliases.len());
        for alias in aliases {
            if !deduped.iter().any(|a| a.eq_ignore_ascii_case(&alias)) {
                deduped.push(alias);
            }
        }
        Self {
            name: name.into(),
            extension: extension.into(),
            mime_type: mime_type.into(),
            aliases: deduped,
        }
    }

    /// Whether `token` names this type as extension, MIME type or alias.
    ///
    /// The comparison is case-insensitive; surrounding whitespace and a single
    /// leading dot are ignored.
    pub fn matches_token(&self, token: &str) -> bool {
        let token = normalize_token(token);
        if token.is_empty() {
            return false;
        }
        self.extension.eq_ignore_ascii_case(token)
            || self.mime_type.eq_ignore_ascii_case(token)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for FileTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (.{}, {})", self.name, self.extension, self.mime_type)
    }
}

pub(crate) fn normalize_token(token: &str) -> &str {
    let token = token.trim();
    token.strip_prefix('.').unwrap_or(token)
}

/// One signature variant of a file type.
///
/// Several definitions may share the same [`FileTypeInfo`] values, e.g. the
/// little- and big-endian TIFF headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureDefinition {
    pub info: FileTypeInfo,
    /// Free-form category from the definition source. Not used for matching.
    pub category: Option<String>,
    pub header: BytePattern,
    /// Position in the buffer where `header` must begin.
    pub offset: usize,
    /// Secondary marker that must also appear somewhere in the buffer.
    pub sub_header: Option<BytePattern>,
}

impl SignatureDefinition {
    pub fn new(info: FileTypeInfo, header: BytePattern, offset: usize) -> Self {
        Self {
            info,
            category: None,
            header,
            offset,
            sub_header: None,
        }
    }

    /// Require `sub_header` to be found anywhere in the buffer. An empty
    /// pattern clears the requirement.
    pub fn with_sub_header(mut self, sub_header: BytePattern) -> Self {
        self.sub_header = if sub_header.is_empty() {
            None
        } else {
            Some(sub_header)
        };
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    /// Placeholders carry type information but no header and are never
    /// byte-matched.
    pub fn is_placeholder(&self) -> bool {
        self.header.is_empty()
    }

    /// Smallest buffer length the header can match in.
    pub fn required_len(&self) -> usize {
        self.offset.saturating_add(self.header.len())
    }
}
