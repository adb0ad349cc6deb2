//! Comma-delimited definition records.
//!
//! One record per line:
//!
//! ```text
//! offset,category,header,sub_header,name,extension,mime[,aliases]
//! ```
//!
//! `header` and `sub_header` are hex strings (`??` for a wildcard byte),
//! `aliases` is a `|`-separated list. Blank lines and lines starting with `#`
//! are skipped. An empty `header` produces a placeholder definition.

use crate::core::file_type::{FileTypeInfo, SignatureDefinition};
use crate::core::pattern::BytePattern;
use crate::definitions::error::{DefinitionError, Result};
use crate::definitions::DefinitionSource;
use std::borrow::Cow;
use tracing::trace;

const MIN_FIELDS: usize = 7;
const MAX_FIELDS: usize = 8;

/// Definitions held as delimited text.
#[derive(Debug, Clone)]
pub struct DelimitedDefinitions<'a> {
    text: Cow<'a, str>,
}

impl<'a> DelimitedDefinitions<'a> {
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self { text: text.into() }
    }
}

impl DefinitionSource for DelimitedDefinitions<'_> {
    fn load(&self) -> Result<Vec<SignatureDefinition>> {
        parse(&self.text)
    }
}

/// Parse every record in `text`.
pub fn parse(text: &str) -> Result<Vec<SignatureDefinition>> {
    let mut definitions = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let record = format!("line {}", index + 1);
        definitions.push(parse_record(line, &record)?);
    }
    trace!(count = definitions.len(), "Parsed delimited definitions");
    Ok(definitions)
}

fn parse_record(line: &str, record: &str) -> Result<SignatureDefinition> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if !(MIN_FIELDS..=MAX_FIELDS).contains(&fields.len()) {
        return Err(DefinitionError::FieldCount {
            record: record.to_string(),
            found: fields.len(),
        });
    }

    let offset = parse_offset(fields[0], record)?;
    let category = fields[1];
    let header = parse_pattern(fields[2], "header", record)?;
    let sub_header = parse_pattern(fields[3], "sub_header", record)?;
    let name = required(fields[4], "name", record)?;
    let extension = required(fields[5], "extension", record)?;
    let mime = required(fields[6], "mime", record)?;
    let aliases = fields
        .get(7)
        .map(|field| split_aliases(field))
        .unwrap_or_default();

    Ok(SignatureDefinition::new(
        FileTypeInfo::new(name, extension, mime, aliases),
        header,
        offset,
    )
    .with_sub_header(sub_header)
    .with_category(category))
}

pub(crate) fn parse_offset(value: &str, record: &str) -> Result<usize> {
    if value.is_empty() {
        return Err(DefinitionError::MissingField {
            record: record.to_string(),
            field: "offset",
        });
    }
    value.parse().map_err(|_| DefinitionError::InvalidOffset {
        record: record.to_string(),
        value: value.to_string(),
    })
}

pub(crate) fn parse_pattern(value: &str, field: &'static str, record: &str) -> Result<BytePattern> {
    BytePattern::from_hex(value).map_err(|source| DefinitionError::InvalidHex {
        record: record.to_string(),
        field,
        source,
    })
}

fn required<'f>(value: &'f str, field: &'static str, record: &str) -> Result<&'f str> {
    if value.is_empty() {
        Err(DefinitionError::MissingField {
            record: record.to_string(),
            field,
        })
    } else {
        Ok(value)
    }
}

fn split_aliases(field: &str) -> Vec<String> {
    field
        .split('|')
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(String::from)
        .collect()
}
