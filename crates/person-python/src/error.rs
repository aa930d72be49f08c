//! Mapping from [`PersonError`] to Python exceptions.

use person_record::PersonError;
use pyo3::exceptions::{PyAttributeError, PyImportError, PyRuntimeError, PyTypeError};
use pyo3::PyErr;

/// Convert a core error into the Python exception a caller would expect
/// from an equivalent pure-Python class.
pub(crate) fn into_py_err(err: PersonError) -> PyErr {
    let message = err.to_string();
    match err {
        PersonError::Arity { .. }
        | PersonError::UnknownKeyword { .. }
        | PersonError::DuplicateArgument { .. }
        | PersonError::TypeMismatch { .. } => PyTypeError::new_err(message),
        PersonError::MissingField { .. } => PyAttributeError::new_err(message),
        PersonError::Initialization(_) => PyRuntimeError::new_err(message),
        PersonError::VersionMismatch { .. } => PyImportError::new_err(message),
    }
}
