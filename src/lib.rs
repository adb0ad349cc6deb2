//! File type detection from magic-number signatures.
//!
//! An [`Interrogator`] walks an ordered catalog of byte signatures and
//! returns the first entry whose header matches the leading bytes of the
//! input, falling back to ASCII / UTF-8 text classification.
//!
//! ```no_run
//! use filetype_interrogator::Interrogator;
//!
//! let interrogator = Interrogator::builtin()?;
//! if let Some(info) = interrogator.detect_type(b"%PDF-1.7\n")? {
//!     println!("{}", info);
//! }
//! # Ok::<(), filetype_interrogator::InterrogatorError>(())
//! ```

/// Core data types module
pub mod core;
/// Definition sources and parsers
pub mod definitions;
pub mod error;
pub mod interrogate;
pub mod logging;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use crate::core::catalog::Catalog;
pub use crate::core::file_type::{FileTypeInfo, SignatureDefinition};
pub use crate::core::pattern::{BytePattern, HeaderByte};
pub use crate::definitions::{DefinitionError, DefinitionFormat, DefinitionSource};
pub use crate::error::{InterrogatorError, Result};
pub use crate::interrogate::{Interrogator, InterrogatorConfig, PathReport, TextKind};

#[cfg(feature = "python-ext")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pymodule]
fn filetype_interrogator(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python_bindings::register_python_bindings(m.py(), m)
}
