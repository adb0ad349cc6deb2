//! Extension hints and content/extension conflict detection.
//!
//! Uses `mime_guess` for the type a file name claims, and compares it with
//! what the content was detected as.

use crate::core::catalog::Catalog;
use crate::core::file_type::FileTypeInfo;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// MIME type `mime_guess` reports when it knows nothing useful.
const OPAQUE_MIME: &str = "application/octet-stream";

/// Type a file name claims through its extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionHint {
    /// Extension without the dot, as written in the path.
    pub extension: String,
    /// MIME types `mime_guess` associates with the extension, most likely first.
    pub mime_types: Vec<String>,
}

/// Sniffer for extension-based file type hints using `mime_guess`.
pub struct ExtensionSniffer;

impl ExtensionSniffer {
    /// Hint from the extension of `path`, if it has a UTF-8 extension.
    pub fn sniff_path(path: &Path) -> Option<ExtensionHint> {
        let extension = path.extension()?.to_str()?;
        if extension.is_empty() {
            return None;
        }

        let mime_types: Vec<String> = mime_guess::from_ext(extension)
            .iter()
            .map(|mime| mime.to_string())
            .filter(|mime| mime != OPAQUE_MIME)
            .collect();

        debug!(extension, ?mime_types, "Extension hint");
        Some(ExtensionHint {
            extension: extension.to_string(),
            mime_types,
        })
    }

    /// Whether the detected content contradicts the extension hint.
    ///
    /// No conflict when the detected type carries the extension or one of the
    /// guessed MIME types. Text content only conflicts with extensions the
    /// catalog knows as a binary format, since many textual formats have
    /// their own extension. Other content conflicts with any extension that
    /// `mime_guess` or the catalog recognises.
    pub fn conflicts(detected: &FileTypeInfo, hint: &ExtensionHint, catalog: &Catalog) -> bool {
        if detected.matches_token(&hint.extension)
            || hint.mime_types.iter().any(|m| detected.matches_token(m))
        {
            return false;
        }

        let claimed_by_catalog = catalog.filter_token(&hint.extension).next().is_some();
        if is_text(detected) {
            return claimed_by_catalog;
        }
        claimed_by_catalog || !hint.mime_types.is_empty()
    }
}

fn is_text(info: &FileTypeInfo) -> bool {
    info.mime_type.starts_with("text/")
}

/// Detection result for a file together with what its name claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathReport {
    pub path: PathBuf,
    /// Type detected from content, if any.
    pub detected: Option<FileTypeInfo>,
    /// Type claimed by the file extension, if any.
    pub claimed: Option<ExtensionHint>,
    /// Content and extension disagree, e.g. an executable named `.pdf`.
    pub extension_conflict: bool,
}

impl PathReport {
    pub fn new(path: &Path, detected: Option<FileTypeInfo>, catalog: &Catalog) -> Self {
        let claimed = ExtensionSniffer::sniff_path(path);
        let extension_conflict = match (&detected, &claimed) {
            (Some(detected), Some(hint)) => ExtensionSniffer::conflicts(detected, hint, catalog),
            _ => false,
        };

        if extension_conflict {
            info!(
                path = %path.display(),
                detected = detected.as_ref().map(|d| d.name.as_str()),
                extension = claimed.as_ref().map(|c| c.extension.as_str()),
                "Content does not match file extension"
            );
        }

        Self {
            path: path.to_path_buf(),
            detected,
            claimed,
            extension_conflict,
        }
    }
}
