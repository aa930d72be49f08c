//! The [`Person`] record.
//!
//! A `Person` carries two shared text fields and one integer. The text
//! fields are [`Arc<str>`] so that a Rust caller cloning a name takes a
//! claim on the same storage instead of copying it. The Python binding
//! copies into a fresh `str` on every read. Replacing a field stores the
//! new value first and then releases the record's claim on the old one,
//! which is returned to the caller.
//!
//! The name fields can be cleared. Every reader that needs them checks for
//! absence and reports [`PersonError::MissingField`] instead of producing a
//! malformed value.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::PersonConfig;
use crate::{PersonError, Result};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// First name used when none is supplied.
pub const DEFAULT_FIRST_NAME: &str = "John";

/// Last name used when none is supplied.
pub const DEFAULT_LAST_NAME: &str = "Doe";

/// Number used when none is supplied.
pub const DEFAULT_NUMBER: i64 = 42;

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A person with a first name, a last name, and a number.
///
/// All three fields are independently mutable. There is no cross-field
/// consistency rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    first_name: Option<Arc<str>>,
    last_name: Option<Arc<str>>,
    number: i64,
}

impl Default for Person {
    /// `John Doe`, number 42.
    fn default() -> Self {
        Self {
            first_name: Some(Arc::from(DEFAULT_FIRST_NAME)),
            last_name: Some(Arc::from(DEFAULT_LAST_NAME)),
            number: DEFAULT_NUMBER,
        }
    }
}

impl Person {
    /// Create a record with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from a set of overrides.
    ///
    /// Fields the config leaves unset keep their defaults.
    pub fn from_config(config: PersonConfig) -> Self {
        let mut person = Self::default();
        if let Some(first_name) = config.first_name {
            person.set_first_name(first_name);
        }
        if let Some(last_name) = config.last_name {
            person.set_last_name(last_name);
        }
        if let Some(number) = config.number {
            person.set_number(number);
        }
        tracing::debug!(
            first_name = ?person.first_name,
            last_name = ?person.last_name,
            number = person.number,
            "constructed Person"
        );
        person
    }

    // -- readers ------------------------------------------------------------

    /// The first name.
    ///
    /// # Errors
    ///
    /// [`PersonError::MissingField`] if the field was cleared.
    pub fn first_name(&self) -> Result<&Arc<str>> {
        self.first_name.as_ref().ok_or(PersonError::MissingField {
            field: "first_name",
        })
    }

    /// The last name.
    ///
    /// # Errors
    ///
    /// [`PersonError::MissingField`] if the field was cleared.
    pub fn last_name(&self) -> Result<&Arc<str>> {
        self.last_name.as_ref().ok_or(PersonError::MissingField {
            field: "last_name",
        })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    // -- writers ------------------------------------------------------------

    /// Replace the first name, returning the previous value (if any).
    pub fn set_first_name(&mut self, value: impl Into<Arc<str>>) -> Option<Arc<str>> {
        let previous = self.first_name.replace(value.into());
        tracing::debug!(field = "first_name", "replaced text field");
        previous
    }

    /// Replace the last name, returning the previous value (if any).
    pub fn set_last_name(&mut self, value: impl Into<Arc<str>>) -> Option<Arc<str>> {
        let previous = self.last_name.replace(value.into());
        tracing::debug!(field = "last_name", "replaced text field");
        previous
    }

    /// Replace the number, returning the previous value.
    pub fn set_number(&mut self, value: i64) -> i64 {
        std::mem::replace(&mut self.number, value)
    }

    /// Remove the first name. Subsequent reads fail until it is set again.
    pub fn clear_first_name(&mut self) -> Option<Arc<str>> {
        self.first_name.take()
    }

    /// Remove the last name. Subsequent reads fail until it is set again.
    pub fn clear_last_name(&mut self) -> Option<Arc<str>> {
        self.last_name.take()
    }

    // -- derived ------------------------------------------------------------

    /// `"<first_name> <last_name>"`.
    ///
    /// # Errors
    ///
    /// [`PersonError::MissingField`] naming the first absent field, checking
    /// `first_name` before `last_name`.
    pub fn name(&self) -> Result<String> {
        let (first_name, last_name) = self.names()?;
        Ok(format!("{first_name} {last_name}"))
    }

    /// `Person(first_name=<first>, last_name=<last>, number=<number>)`.
    ///
    /// # Errors
    ///
    /// [`PersonError::MissingField`] if either name field was cleared.
    pub fn describe(&self) -> Result<String> {
        let (first_name, last_name) = self.names()?;
        Ok(format!(
            "Person(first_name={first_name}, last_name={last_name}, number={})",
            self.number
        ))
    }

    fn names(&self) -> Result<(&str, &str)> {
        let first_name = self.first_name();
        let names = match first_name {
            Ok(first) => self.last_name().map(|last| (&**first, &**last)),
            Err(e) => Err(e),
        };
        if let Err(e) = &names {
            tracing::warn!(error = %e, "Person read with a cleared name field");
        }
        names
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
