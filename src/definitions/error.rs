//! Custom error types for definition loading.

use crate::core::pattern::HexError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("{record}: field `{field}` is not a valid hex pattern")]
    InvalidHex {
        record: String,
        field: &'static str,
        #[source]
        source: HexError,
    },

    #[error("{record}: missing required field `{field}`")]
    MissingField { record: String, field: &'static str },

    #[error("{record}: invalid offset `{value}`")]
    InvalidOffset { record: String, value: String },

    #[error("{record}: expected 7 or 8 fields, found {found}")]
    FieldCount { record: String, found: usize },

    #[error("{record}: malformed signature `{value}`, expected `offset,header[,sub_header]`")]
    InvalidSign { record: String, value: String },

    #[error("Malformed JSON definitions: {0}")]
    Json(String),

    #[error("Definition `{later}` is unreachable, `{earlier}` earlier in the catalog matches everything it matches")]
    Shadowed { earlier: String, later: String },

    #[error("Failed to read definitions: {0}")]
    Read(String),
}

pub type Result<T> = std::result::Result<T, DefinitionError>;
