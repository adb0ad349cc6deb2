//! JSON definition files keyed by extension.
//!
//! ```json
//! {
//!   "jpg": {
//!     "name": "JPEG Image",
//!     "mime": "image/jpeg",
//!     "alias": ["jpeg", "jpe"],
//!     "signs": ["0,FFD8FF"]
//!   }
//! }
//! ```
//!
//! Each `signs` entry is `offset,header[,sub_header]` and yields one
//! definition. Key order is kept, so it is also the catalog order.

use crate::core::file_type::{FileTypeInfo, SignatureDefinition};
use crate::core::pattern::BytePattern;
use crate::definitions::delimited::{parse_offset, parse_pattern};
use crate::definitions::error::{DefinitionError, Result};
use crate::definitions::DefinitionSource;
use serde::Deserialize;
use std::borrow::Cow;
use tracing::trace;

#[derive(Debug, Deserialize)]
struct JsonEntry {
    name: String,
    mime: String,
    #[serde(default)]
    alias: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    signs: Vec<String>,
}

/// Definitions held as JSON text.
#[derive(Debug, Clone)]
pub struct JsonDefinitions<'a> {
    text: Cow<'a, str>,
}

impl<'a> JsonDefinitions<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self { text: text.into() }
    }
}

impl DefinitionSource for JsonDefinitions<'_> {
    fn load(&self) -> Result<Vec<SignatureDefinition>> {
        parse(&self.text)
    }
}

/// Parse a JSON definition document.
pub fn parse(text: &str) -> Result<Vec<SignatureDefinition>> {
    let root: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(text).map_err(|e| DefinitionError::Json(e.to_string()))?;

    let mut definitions = Vec::new();
    for (extension, value) in root {
        let entry: JsonEntry = serde_json::from_value(value)
            .map_err(|e| DefinitionError::Json(format!("`{}`: {}", extension, e)))?;
        let info = FileTypeInfo::new(
            entry.name.as_str(),
            extension.as_str(),
            entry.mime.as_str(),
            entry.alias.clone(),
        );
        let category = entry.category.clone().unwrap_or_default();

        if entry.signs.is_empty() {
            definitions.push(
                SignatureDefinition::new(info, BytePattern::default(), 0).with_category(category),
            );
            continue;
        }

        for (index, sign) in entry.signs.iter().enumerate() {
            let record = format!("`{}` signature {}", extension, index + 1);
            let (offset, header, sub_header) = parse_sign(sign, &record)?;
            definitions.push(
                SignatureDefinition::new(info.clone(), header, offset)
                    .with_sub_header(sub_header)
                    .with_category(category.as_str()),
            );
        }
    }
    trace!(count = definitions.len(), "Parsed JSON definitions");
    Ok(definitions)
}

fn parse_sign(sign: &str, record: &str) -> Result<(usize, BytePattern, BytePattern)> {
    let parts: Vec<&str> = sign.split(',').map(str::trim).collect();
    let (offset, header, sub_header) = match parts.as_slice() {
        [offset, header] => (*offset, *header, ""),
        [offset, header, sub_header] => (*offset, *header, *sub_header),
        _ => {
            return Err(DefinitionError::InvalidSign {
                record: record.to_string(),
                value: sign.to_string(),
            })
        }
    };
    Ok((
        parse_offset(offset, record)?,
        parse_pattern(header, "header", record)?,
        parse_pattern(sub_header, "sub_header", record)?,
    ))
}
