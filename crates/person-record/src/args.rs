//! Positional and keyword argument binding.
//!
//! The Python constructor accepts `Person(first_name, last_name, number)`
//! with every parameter optional and passable by position or by name. This
//! module binds such a call onto a [`PersonConfig`] without touching any
//! record, so a failed call never leaves a half-built `Person` behind.

use crate::config::PersonConfig;
use crate::{PersonError, Result};

/// Constructor parameters in positional order.
pub const PARAMETERS: [&str; 3] = ["first_name", "last_name", "number"];

/// A host value as seen by the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A text value.
    Text(String),
    /// An integer value.
    Int(i64),
    /// Anything else, identified by its host type name.
    Other {
        /// Host type name used in error messages (e.g. `"float"`).
        type_name: String,
    },
}

impl FieldValue {
    /// Host type name of the value.
    pub fn type_name(&self) -> &str {
        match self {
            FieldValue::Text(_) => "str",
            FieldValue::Int(_) => "int",
            FieldValue::Other { type_name } => type_name,
        }
    }

    /// Take the text out of this value, or report a mismatch for `field`.
    pub fn into_text(self, field: &'static str) -> Result<String> {
        match self {
            FieldValue::Text(text) => Ok(text),
            other => Err(PersonError::TypeMismatch {
                field,
                expected: "str",
                found: other.type_name().to_owned(),
            }),
        }
    }

    /// Take the integer out of this value, or report a mismatch for `field`.
    pub fn into_int(self, field: &'static str) -> Result<i64> {
        match self {
            FieldValue::Int(n) => Ok(n),
            other => Err(PersonError::TypeMismatch {
                field,
                expected: "int",
                found: other.type_name().to_owned(),
            }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

/// Bind positional and keyword values onto a [`PersonConfig`].
///
/// Positional values fill [`PARAMETERS`] in order; keywords may then supply
/// any parameter not already filled.
///
/// # Errors
///
/// - [`PersonError::Arity`] for more than three positional values.
/// - [`PersonError::UnknownKeyword`] for a keyword that names no parameter.
/// - [`PersonError::DuplicateArgument`] if a parameter is given twice.
/// - [`PersonError::TypeMismatch`] if a value has the wrong kind.
pub fn bind_arguments<K>(
    positional: Vec<FieldValue>,
    keywords: impl IntoIterator<Item = (K, FieldValue)>,
) -> Result<PersonConfig>
where
    K: AsRef<str>,
{
    if positional.len() > PARAMETERS.len() {
        return Err(PersonError::Arity {
            given: positional.len(),
            max: PARAMETERS.len(),
        });
    }

    let positional_count = positional.len();
    let mut slots: [Option<FieldValue>; 3] = [None, None, None];
    for (slot, value) in slots.iter_mut().zip(positional) {
        *slot = Some(value);
    }

    for (keyword, value) in keywords {
        let keyword = keyword.as_ref();
        let index = PARAMETERS
            .iter()
            .position(|p| *p == keyword)
            .ok_or_else(|| PersonError::UnknownKeyword {
                keyword: keyword.to_owned(),
            })?;
        if index < positional_count {
            return Err(PersonError::DuplicateArgument {
                field: PARAMETERS[index],
                position: index + 1,
            });
        }
        slots[index] = Some(value);
    }

    let [first_name, last_name, number] = slots;
    Ok(PersonConfig {
        first_name: first_name
            .map(|v| v.into_text(PARAMETERS[0]))
            .transpose()?,
        last_name: last_name.map(|v| v.into_text(PARAMETERS[1])).transpose()?,
        number: number.map(|v| v.into_int(PARAMETERS[2])).transpose()?,
    })
}
