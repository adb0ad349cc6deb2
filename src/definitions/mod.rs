//! Signature definition sources.
//!
//! A [`DefinitionSource`] turns some external description of file types into
//! [`SignatureDefinition`] values in catalog order. Two text formats are
//! supported: comma-delimited records ([`delimited`]) and JSON documents keyed
//! by extension ([`json`]). The built-in definition set ships as delimited
//! records compiled into the crate.

pub mod delimited;
pub mod error;
pub mod json;

pub use delimited::DelimitedDefinitions;
pub use error::DefinitionError;
pub use json::JsonDefinitions;

use crate::core::file_type::SignatureDefinition;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Built-in definitions as delimited records.
pub const BUILTIN_DEFINITIONS: &str = include_str!("builtin.csv");

/// Anything that can produce signature definitions.
pub trait DefinitionSource {
    /// Produce all definitions in catalog order.
    fn load(&self) -> error::Result<Vec<SignatureDefinition>>;
}

impl DefinitionSource for Vec<SignatureDefinition> {
    fn load(&self) -> error::Result<Vec<SignatureDefinition>> {
        Ok(self.clone())
    }
}

/// The built-in definition set.
pub fn builtin() -> DelimitedDefinitions<'static> {
    DelimitedDefinitions::new(BUILTIN_DEFINITIONS)
}

/// Text format of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Delimited,
    Json,
}

impl DefinitionFormat {
    /// Choose a format from a file name: `.json` is JSON, anything else is
    /// delimited records.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DefinitionFormat::Json,
            _ => DefinitionFormat::Delimited,
        }
    }

    /// Parse `text` in this format.
    pub fn parse(self, text: &str) -> error::Result<Vec<SignatureDefinition>> {
        match self {
            DefinitionFormat::Delimited => delimited::parse(text),
            DefinitionFormat::Json => json::parse(text),
        }
    }
}

/// Read and parse definitions from `reader`.
pub fn load_from_reader<R: Read>(
    mut reader: R,
    format: DefinitionFormat,
) -> error::Result<Vec<SignatureDefinition>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| DefinitionError::Read(e.to_string()))?;
    format.parse(&text)
}

/// Read and parse a definition file, choosing the format from its name.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> error::Result<Vec<SignatureDefinition>> {
    let path = path.as_ref();
    let format = DefinitionFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading definitions");
    let text = std::fs::read_to_string(path)
        .map_err(|e| DefinitionError::Read(format!("{}: {}", path.display(), e)))?;
    format.parse(&text)
}
