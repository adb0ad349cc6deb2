//! Secondary marker search for signatures that share a header.
//!
//! ZIP-based Office documents, OpenDocument files and plain ZIP archives all
//! start with the same local-file-header magic; so do the legacy compound
//! document formats. Those definitions carry a sub-header (e.g. the bytes of
//! `workbook.xml`) that must also appear somewhere in the sampled buffer.

use crate::core::pattern::{BytePattern, HeaderByte};
use memchr::memchr_iter;

/// Candidate anchor positions per byte value, computed lazily for one buffer
/// and shared by every definition checked against it.
#[derive(Debug)]
pub struct AnchorIndex<'a> {
    buffer: &'a [u8],
    positions: Vec<(u8, Vec<usize>)>,
}

impl<'a> AnchorIndex<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            positions: Vec::new(),
        }
    }

    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Every position in the buffer holding `byte`, in ascending order.
    pub fn positions_of(&mut self, byte: u8) -> &[usize] {
        let slot = match self.positions.iter().position(|(b, _)| *b == byte) {
            Some(slot) => slot,
            None => {
                self.positions
                    .push((byte, memchr_iter(byte, self.buffer).collect()));
                self.positions.len() - 1
            }
        };
        &self.positions[slot].1
    }

    /// Whether `sub_header` occurs anywhere in the buffer.
    ///
    /// Each position holding the first marker byte is tried as an anchor; a
    /// wildcard first byte makes every position an anchor. The first anchor
    /// with a full match wins.
    pub fn find_secondary_match(&mut self, sub_header: &BytePattern) -> bool {
        let buffer = self.buffer;
        match sub_header.first() {
            None => false,
            Some(HeaderByte::Any) => {
                (0..buffer.len()).any(|offset| sub_header.matches_at(buffer, offset))
            }
            Some(HeaderByte::Exact(anchor)) => self
                .positions_of(anchor)
                .iter()
                .any(|&offset| sub_header.matches_at(buffer, offset)),
        }
    }
}

/// Whether `sub_header` occurs anywhere in `buffer`.
pub fn find_secondary_match(buffer: &[u8], sub_header: &BytePattern) -> bool {
    AnchorIndex::new(buffer).find_secondary_match(sub_header)
}
