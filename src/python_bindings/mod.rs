//! Python bindings over the built-in interrogator.
//!
//! Python can pass `None` where Rust cannot express a null buffer; those
//! calls raise `ValueError`.

use crate::error::InterrogatorError;
use crate::interrogate::Interrogator;
use pyo3::prelude::*;

/// `(name, extension, mime_type, aliases)`
type FileTypeTuple = (String, String, String, Vec<String>);

/// Register all Python bindings with the module.
pub fn register_python_bindings(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(detect_type_py, m)?)?;
    m.add_function(wrap_pyfunction!(is_type_py, m)?)?;
    m.add_function(wrap_pyfunction!(available_extensions_py, m)?)?;
    m.add_function(wrap_pyfunction!(available_mime_types_py, m)?)?;
    m.add_function(wrap_pyfunction!(crate::logging::init_logging, m)?)?;
    Ok(())
}

fn require_data(data: Option<Vec<u8>>) -> Result<Vec<u8>, InterrogatorError> {
    data.ok_or_else(|| InterrogatorError::InvalidArgument("data must not be None".to_string()))
}

/// Detect the type of a bytes object.
#[pyfunction]
#[pyo3(name = "detect_type")]
#[pyo3(signature = (data))]
fn detect_type_py(data: Option<Vec<u8>>) -> PyResult<Option<FileTypeTuple>> {
    let data = require_data(data)?;
    let info = Interrogator::builtin()?.detect_type(&data)?;
    Ok(info.map(|info| {
        (
            info.name.clone(),
            info.extension.clone(),
            info.mime_type.clone(),
            info.aliases.clone(),
        )
    }))
}

/// Check a bytes object against an extension, MIME type or alias.
#[pyfunction]
#[pyo3(name = "is_type")]
#[pyo3(signature = (data, token))]
fn is_type_py(data: Option<Vec<u8>>, token: &str) -> PyResult<bool> {
    let data = require_data(data)?;
    Ok(Interrogator::builtin()?.is_type(&data, token))
}

#[pyfunction]
#[pyo3(name = "available_extensions")]
fn available_extensions_py() -> PyResult<Vec<String>> {
    Ok(Interrogator::builtin()?
        .available_extensions()
        .into_iter()
        .map(str::to_string)
        .collect())
}

#[pyfunction]
#[pyo3(name = "available_mime_types")]
fn available_mime_types_py() -> PyResult<Vec<String>> {
    Ok(Interrogator::builtin()?
        .available_mime_types()
        .into_iter()
        .map(str::to_string)
        .collect())
}
