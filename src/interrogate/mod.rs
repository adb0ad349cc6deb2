//! File type interrogation.
//!
//! Matching runs in three layers: the byte matcher compares headers at fixed
//! offsets, the disambiguator searches secondary markers for formats sharing
//! a header, and the text classifier handles whatever is left.

pub mod api;
pub mod config;
pub mod disambiguator;
pub mod io;
pub mod matcher;
pub mod sniffers;
pub mod text;

pub use api::Interrogator;
pub use config::{CatalogConfig, InterrogatorConfig, SampleConfig, TextConfig};
pub use disambiguator::find_secondary_match;
pub use matcher::matches;
pub use sniffers::{ExtensionHint, PathReport};
pub use text::{TextClassifier, TextKind};
