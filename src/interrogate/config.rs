//! Configuration for the interrogator.
//!
//! Provides centralized configuration for sampling, the text fallback and
//! catalog validation with sensible defaults.

use serde::{Deserialize, Serialize};

/// Master configuration for an [`Interrogator`](crate::interrogate::api::Interrogator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterrogatorConfig {
    /// Sampling of streams and files.
    pub sample: SampleConfig,
    /// Plain-text fallback classification.
    pub text: TextConfig,
    /// Catalog build checks.
    pub catalog: CatalogConfig,
}

impl InterrogatorConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Sampling configuration for stream and file input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Maximum number of leading bytes examined (default: 4096).
    pub max_sample_size: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            max_sample_size: crate::interrogate::io::MAX_SAMPLE_SIZE,
        }
    }
}

/// Text fallback configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Classify unmatched buffers as ASCII / UTF-8 text (default: true).
    pub enabled: bool,
    /// Accept an incomplete UTF-8 sequence at the end of a sample that was
    /// cut from longer input (default: true).
    pub allow_truncated_tail: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_truncated_tail: true,
        }
    }
}

/// Catalog validation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Refuse to build a catalog in which an entry is unreachable because an
    /// earlier entry matches everything it matches (default: false, such
    /// entries are only logged).
    pub reject_shadowed: bool,
}
