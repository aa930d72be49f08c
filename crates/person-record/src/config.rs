//! Construction configuration for [`Person`](crate::person::Person).
//!
//! A [`PersonConfig`] is the set of optional overrides a caller may supply.
//! Anything left as `None` keeps the record's default. Configs can be built
//! with the `with_*` helpers, bound from call arguments via
//! [`bind_arguments`](crate::args::bind_arguments), or loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::{PersonError, Result};

/// Optional field overrides applied when constructing a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersonConfig {
    /// Overrides the default first name (`"John"`).
    pub first_name: Option<String>,
    /// Overrides the default last name (`"Doe"`).
    pub last_name: Option<String>,
    /// Overrides the default number (`42`).
    pub number: Option<i64>,
}

impl PersonConfig {
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_number(mut self, number: i64) -> Self {
        self.number = Some(number);
        self
    }

    /// Parse a config from a JSON object such as `{"number": 7}`.
    ///
    /// Missing keys stay unset. Unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// [`PersonError::Initialization`] if the text is not a valid config.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| PersonError::Initialization(format!("invalid Person config JSON: {e}")))
    }

    /// True when no field is overridden.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.number.is_none()
    }
}
