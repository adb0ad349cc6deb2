//! Signature matching against a sampled buffer.

use crate::core::file_type::SignatureDefinition;
use crate::interrogate::disambiguator::AnchorIndex;
use tracing::trace;

/// Whether `definition` matches `buffer`.
///
/// The header must fit entirely at `definition.offset`; wildcard positions
/// accept any byte. A definition with a sub-header additionally needs the
/// marker somewhere in the buffer.
pub fn matches(buffer: &[u8], definition: &SignatureDefinition) -> bool {
    matches_indexed(&mut AnchorIndex::new(buffer), definition)
}

/// Same as [`matches`], reusing anchor positions already computed for this
/// buffer by earlier definitions.
pub fn matches_indexed(index: &mut AnchorIndex<'_>, definition: &SignatureDefinition) -> bool {
    if definition.header.is_empty() {
        return false;
    }

    let buffer = index.buffer();
    if buffer.len() < definition.required_len() {
        trace!(
            name = %definition.info.name,
            needed = definition.required_len(),
            available = buffer.len(),
            "Buffer too short for signature"
        );
        return false;
    }

    if !definition.header.matches_at(buffer, definition.offset) {
        return false;
    }

    match &definition.sub_header {
        None => true,
        Some(sub_header) => {
            let found = index.find_secondary_match(sub_header);
            trace!(
                name = %definition.info.name,
                marker = %sub_header,
                found,
                "Header matched, checked secondary marker"
            );
            found
        }
    }
}
