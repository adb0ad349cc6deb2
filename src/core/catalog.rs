//! The ordered, immutable signature catalog.
//!
//! Detection walks the catalog front to back and stops at the first match, so
//! entry order decides which of two overlapping signatures wins. The catalog
//! checks at build time that no entry is made unreachable by an earlier one.

use crate::core::file_type::SignatureDefinition;
use crate::definitions::{DefinitionError, DefinitionSource};
use crate::interrogate::config::CatalogConfig;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Pair of catalog indices where `earlier` matches every buffer `later` can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadowing {
    pub earlier: usize,
    pub later: usize,
}

/// Ordered signature catalog plus the placeholder entries that carry type
/// information without a header.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<SignatureDefinition>,
    placeholders: Vec<SignatureDefinition>,
}

impl Catalog {
    /// Build a catalog, keeping definition order. Definitions with an empty
    /// header are set aside as placeholders.
    pub fn new(definitions: Vec<SignatureDefinition>) -> Self {
        let (placeholders, entries): (Vec<_>, Vec<_>) = definitions
            .into_iter()
            .partition(SignatureDefinition::is_placeholder);
        Self {
            entries,
            placeholders,
        }
    }

    /// Build a catalog and apply the ordering checks from `config`.
    pub fn build(
        definitions: Vec<SignatureDefinition>,
        config: &CatalogConfig,
    ) -> Result<Self, DefinitionError> {
        let catalog = Self::new(definitions);

        for pair in catalog.shadowed() {
            let earlier = &catalog.entries[pair.earlier];
            let later = &catalog.entries[pair.later];
            warn!(
                earlier = %earlier.info.name,
                earlier_header = %earlier.header,
                later = %later.info.name,
                later_header = %later.header,
                "Catalog entry is unreachable"
            );
            if config.reject_shadowed {
                return Err(DefinitionError::Shadowed {
                    earlier: earlier.info.name.clone(),
                    later: later.info.name.clone(),
                });
            }
        }

        info!(
            entries = catalog.entries.len(),
            placeholders = catalog.placeholders.len(),
            "Signature catalog built"
        );
        Ok(catalog)
    }

    /// Load all definitions from `source` and build a catalog.
    pub fn from_source(
        source: &dyn DefinitionSource,
        config: &CatalogConfig,
    ) -> Result<Self, DefinitionError> {
        Self::build(source.load()?, config)
    }

    /// Byte-matchable entries in priority order.
    pub fn entries(&self) -> &[SignatureDefinition] {
        &self.entries
    }

    /// Entries without a header, e.g. generic text.
    pub fn placeholders(&self) -> &[SignatureDefinition] {
        &self.placeholders
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SignatureDefinition> {
        self.entries.iter()
    }

    /// Deduplicated extensions of the byte-matchable entries.
    pub fn extensions(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|d| d.info.extension.as_str())
            .collect()
    }

    /// Deduplicated MIME types of the byte-matchable entries.
    pub fn mime_types(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|d| d.info.mime_type.as_str())
            .collect()
    }

    /// Entries carrying `token` as extension, MIME type or alias.
    pub fn filter_token<'a>(
        &'a self,
        token: &'a str,
    ) -> impl Iterator<Item = &'a SignatureDefinition> + 'a {
        self.entries
            .iter()
            .filter(move |d| d.info.matches_token(token))
    }

    /// Whether `token` names one of the placeholder types.
    pub fn is_placeholder_token(&self, token: &str) -> bool {
        self.placeholders.iter().any(|d| d.info.matches_token(token))
    }

    /// Every pair of entries where the earlier one makes the later one
    /// unreachable.
    pub fn shadowed(&self) -> Vec<Shadowing> {
        let mut pairs = Vec::new();
        for (later, b) in self.entries.iter().enumerate() {
            for (earlier, a) in self.entries[..later].iter().enumerate() {
                if shadows(a, b) {
                    pairs.push(Shadowing { earlier, later });
                }
            }
        }
        pairs
    }
}

/// Whether every buffer matched by `b` is also matched by `a`.
///
/// `a` must have no secondary marker, its header window must sit inside `b`'s
/// window, and at each position `a` must accept at least what `b` accepts.
fn shadows(a: &SignatureDefinition, b: &SignatureDefinition) -> bool {
    if a.sub_header.is_some() || a.header.is_empty() {
        return false;
    }
    if a.offset < b.offset || a.required_len() > b.required_len() {
        return false;
    }
    let shift = a.offset - b.offset;
    a.header
        .iter()
        .zip(b.header.iter().skip(shift))
        .all(|(x, y)| x.covers(y))
}
