//! Python-facing Person wrapper.
//!
//! [`PyPerson`] is a `#[pyclass]` that wraps the Rust [`Person`] record.
//! Construction arguments are converted to [`FieldValue`]s and bound by
//! [`bind_arguments`], so Python sees the same arity, keyword, and type
//! errors as the Rust API.

use person_record::args::{bind_arguments, FieldValue, PARAMETERS};
use person_record::person::Person;
use pyo3::exceptions::{PyAttributeError, PyTypeError};
use pyo3::intern;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyInt, PyString, PyTuple, PyType};

use crate::error::into_py_err;

/// Person object
///
/// Usage from Python:
/// ```python
/// from mymodule import Person
/// p = Person("Ada", number=7)
/// p.last_name = "Lovelace"
/// assert p.name() == "Ada Lovelace"
/// ```
#[pyclass(name = "Person", module = "mymodule", subclass)]
pub struct PyPerson {
    inner: Person,
}

#[pymethods]
impl PyPerson {
    /// Create a new person.
    ///
    /// Args:
    ///     first_name: First name (default "John").
    ///     last_name: Last name (default "Doe").
    ///     number: An integer (default 42).
    ///
    /// A subclass that defines its own `__init__` owns its call signature:
    /// the instance starts from the defaults and the arguments are left for
    /// that `__init__`.
    #[new]
    #[classmethod]
    #[pyo3(signature = (*args, **kwargs), text_signature = "(first_name='John', last_name='Doe', number=42)")]
    fn new(
        cls: &Bound<'_, PyType>,
        args: &Bound<'_, PyTuple>,
        kwargs: Option<&Bound<'_, PyDict>>,
    ) -> PyResult<Self> {
        if overrides_init(cls)? {
            return Ok(Self {
                inner: Person::new(),
            });
        }

        let positional = args
            .iter()
            .map(|value| field_value(&value))
            .collect::<PyResult<Vec<_>>>()?;

        let mut keywords = Vec::new();
        if let Some(kwargs) = kwargs {
            for (key, value) in kwargs.iter() {
                let key: String = key.extract()?;
                keywords.push((key, field_value(&value)?));
            }
        }

        let config = bind_arguments(positional, keywords).map_err(into_py_err)?;
        Ok(Self {
            inner: Person::from_config(config),
        })
    }

    /// First name of the person
    #[getter]
    fn first_name(&self) -> PyResult<String> {
        let value = self.inner.first_name().map_err(into_py_err)?;
        Ok(value.to_string())
    }

    #[setter]
    fn set_first_name(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let text = field_value(value)?
            .into_text(PARAMETERS[0])
            .map_err(into_py_err)?;
        self.inner.set_first_name(text);
        Ok(())
    }

    /// Last name of the person
    #[getter]
    fn last_name(&self) -> PyResult<String> {
        let value = self.inner.last_name().map_err(into_py_err)?;
        Ok(value.to_string())
    }

    #[setter]
    fn set_last_name(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let text = field_value(value)?
            .into_text(PARAMETERS[1])
            .map_err(into_py_err)?;
        self.inner.set_last_name(text);
        Ok(())
    }

    /// Number of the person
    #[getter]
    fn number(&self) -> i64 {
        self.inner.number()
    }

    #[setter]
    fn set_number(&mut self, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let number = field_value(value)?
            .into_int(PARAMETERS[2])
            .map_err(into_py_err)?;
        self.inner.set_number(number);
        Ok(())
    }

    /// `del p.first_name` / `del p.last_name` clear the field; `number`
    /// cannot be deleted. Other names use the default deletion.
    fn __delattr__(slf: &Bound<'_, Self>, name: &str) -> PyResult<()> {
        match name {
            "first_name" => {
                slf.borrow_mut().inner.clear_first_name();
            }
            "last_name" => {
                slf.borrow_mut().inner.clear_last_name();
            }
            "number" => {
                return Err(PyTypeError::new_err("can't delete numeric/char attribute"));
            }
            other => delete_other_attribute(slf, other)?,
        }
        Ok(())
    }

    /// Return the name of a person combining first and last names
    fn name(&self) -> PyResult<String> {
        self.inner.name().map_err(into_py_err)
    }

    fn __str__(&self) -> PyResult<String> {
        self.inner.describe().map_err(into_py_err)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Default deletion for names that are not record fields: a descriptor on
/// the type with `__delete__` (e.g. a subclass property), otherwise the
/// instance `__dict__` a Python subclass carries.
fn delete_other_attribute(slf: &Bound<'_, PyPerson>, name: &str) -> PyResult<()> {
    let py = slf.py();
    if let Ok(descriptor) = slf.get_type().getattr(name) {
        if descriptor.hasattr(intern!(py, "__delete__"))? {
            descriptor.call_method1(intern!(py, "__delete__"), (slf,))?;
            return Ok(());
        }
    }
    if let Ok(dict) = slf.getattr(intern!(py, "__dict__")) {
        if dict.downcast_into::<PyDict>()?.del_item(name).is_ok() {
            return Ok(());
        }
    }
    Err(PyAttributeError::new_err(format!(
        "'{}' object has no attribute '{name}'",
        slf.get_type().name()?
    )))
}

/// True when `cls` is a subclass with its own `__init__`.
fn overrides_init(cls: &Bound<'_, PyType>) -> PyResult<bool> {
    let py = cls.py();
    let init = intern!(py, "__init__");
    let inherited = py.get_type::<PyPerson>().getattr(init)?;
    Ok(!cls.getattr(init)?.is(&inherited))
}

/// Classify a Python object for the argument binder.
///
/// `str` becomes [`FieldValue::Text`]. `int` (including `bool`) and any
/// object implementing `__index__` become [`FieldValue::Int`]; a value
/// outside the `i64` range raises `OverflowError` here rather than being
/// reported as a type mismatch.
fn field_value(value: &Bound<'_, PyAny>) -> PyResult<FieldValue> {
    let py = value.py();
    if value.is_instance_of::<PyString>() {
        return Ok(FieldValue::Text(value.extract::<String>()?));
    }
    if value.is_instance_of::<PyInt>() {
        return Ok(FieldValue::Int(value.extract::<i64>()?));
    }
    if value.hasattr(intern!(py, "__index__"))? {
        let index = value.call_method0(intern!(py, "__index__"))?;
        return Ok(FieldValue::Int(index.extract::<i64>()?));
    }
    Ok(FieldValue::Other {
        type_name: value.get_type().name()?.to_string(),
    })
}
