//! Byte patterns with wildcard positions.
//!
//! A signature header is a sequence of [`HeaderByte`] values: either an exact
//! byte or a wildcard that compares equal to anything. Patterns are written in
//! definition files as hex strings where `??` marks a wildcard.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single position in a signature pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderByte {
    /// Matches only this byte value.
    Exact(u8),
    /// Matches any byte value.
    Any,
}

impl HeaderByte {
    /// Whether `byte` satisfies this position.
    #[inline]
    pub fn matches(self, byte: u8) -> bool {
        match self {
            HeaderByte::Exact(expected) => expected == byte,
            HeaderByte::Any => true,
        }
    }

    /// Whether every byte accepted by `other` is also accepted by `self`.
    #[inline]
    pub fn covers(self, other: HeaderByte) -> bool {
        match (self, other) {
            (HeaderByte::Any, _) => true,
            (HeaderByte::Exact(a), HeaderByte::Exact(b)) => a == b,
            (HeaderByte::Exact(_), HeaderByte::Any) => false,
        }
    }
}

impl From<u8> for HeaderByte {
    fn from(byte: u8) -> Self {
        HeaderByte::Exact(byte)
    }
}

/// Errors raised while decoding a hex pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("hex string has odd length {0}")]
    OddLength(usize),

    #[error("invalid hex byte `{0}`")]
    InvalidByte(String),
}

/// Ordered sequence of [`HeaderByte`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BytePattern(Vec<HeaderByte>);

impl BytePattern {
    pub fn new(bytes: Vec<HeaderByte>) -> Self {
        Self(bytes)
    }

    /// Pattern made only of exact bytes.
    pub fn exact(bytes: &[u8]) -> Self {
        Self(bytes.iter().copied().map(HeaderByte::Exact).collect())
    }

    /// Decode a hex string. Two characters per byte, case-insensitive, `??`
    /// for a wildcard. Whitespace is ignored.
    pub fn from_hex(text: &str) -> Result<Self, HexError> {
        let digits: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();

        if digits.len() % 2 != 0 {
            return Err(HexError::OddLength(digits.len()));
        }

        let mut bytes = Vec::with_capacity(digits.len() / 2);
        for chunk in digits.chunks_exact(2) {
            if chunk == b"??" {
                bytes.push(HeaderByte::Any);
                continue;
            }
            let mut out = [0u8; 1];
            hex::decode_to_slice(chunk, &mut out).map_err(|_| {
                HexError::InvalidByte(String::from_utf8_lossy(chunk).into_owned())
            })?;
            bytes.push(HeaderByte::Exact(out[0]));
        }
        Ok(Self(bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<HeaderByte> {
        self.0.first().copied()
    }

    pub fn as_slice(&self) -> &[HeaderByte] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = HeaderByte> + '_ {
        self.0.iter().copied()
    }

    /// Compare the pattern against `buffer` starting at `offset`.
    ///
    /// Fails when the pattern does not fit entirely inside the buffer.
    pub fn matches_at(&self, buffer: &[u8], offset: usize) -> bool {
        let end = match offset.checked_add(self.0.len()) {
            Some(end) if end <= buffer.len() => end,
            _ => return false,
        };
        self.0
            .iter()
            .zip(&buffer[offset..end])
            .all(|(expected, &actual)| expected.matches(actual))
    }
}

impl fmt::Display for BytePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            match byte {
                HeaderByte::Exact(b) => write!(f, "{:02X}", b)?,
                HeaderByte::Any => f.write_str("??")?,
            }
        }
        Ok(())
    }
}

impl FromIterator<HeaderByte> for BytePattern {
    fn from_iter<I: IntoIterator<Item = HeaderByte>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
