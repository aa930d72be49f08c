//! PyO3 Python bindings for the Person record.
//!
//! Exposes [`person_record::person::Person`] to Python as `mymodule.Person`.
//! Module initialization refuses to load under an interpreter whose major
//! version differs from the one the extension was built for.
//!
//! ```python
//! >>> import mymodule
//! >>> p = mymodule.Person(first_name="Isaac", last_name="Newton", number=42)
//! >>> print(p)
//! Person(first_name=Isaac, last_name=Newton, number=42)
//! >>> p.name()
//! 'Isaac Newton'
//! ```

#![deny(unsafe_code)]

use person_record::version::{check_compatibility, HostVersion};
use pyo3::prelude::*;

mod error;
mod person;

/// Interpreter version recorded by the build script.
const BUILT_PYTHON_VERSION: &str = env!("MYMODULE_BUILT_PYTHON_VERSION");

/// Example module that creates a Person type.
#[pymodule]
fn mymodule(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let built: HostVersion = BUILT_PYTHON_VERSION.parse().map_err(error::into_py_err)?;
    let info = m.py().version_info();
    let running = HostVersion::new(info.major, info.minor);
    check_compatibility(built, running).map_err(error::into_py_err)?;

    m.add_class::<person::PyPerson>()?;
    tracing::debug!(%built, %running, "mymodule initialized");
    Ok(())
}
