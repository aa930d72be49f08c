//! Person Record -- a small mutable record with defaulted construction.
//!
//! This crate holds the host-independent half of the `mymodule` extension:
//! the [`Person`](person::Person) record, the configuration used to build it,
//! the positional/keyword argument binder that mirrors the Python call
//! signature, and the interpreter-version compatibility rules checked at
//! module load.
//!
//! # Quick Start
//!
//! ```
//! use person_record::prelude::*;
//!
//! let config = PersonConfig::default()
//!     .with_first_name("Isaac")
//!     .with_last_name("Newton");
//! let person = Person::from_config(config);
//!
//! assert_eq!(person.name().unwrap(), "Isaac Newton");
//! assert_eq!(
//!     person.describe().unwrap(),
//!     "Person(first_name=Isaac, last_name=Newton, number=42)"
//! );
//! ```
//!
//! # Modules
//!
//! - [`person`]: the record itself, its defaults, accessors, and formatting.
//! - [`config`]: [`PersonConfig`](config::PersonConfig), the set of optional
//!   overrides applied on construction.
//! - [`args`]: binds positional and keyword values onto a config.
//! - [`version`]: built-for vs. running interpreter version checks.

#![deny(unsafe_code)]

pub mod args;
pub mod config;
pub mod person;
pub mod version;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by record construction, access, and module setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonError {
    /// More positional arguments were supplied than the record has fields.
    #[error("Person() takes at most {max} positional arguments ({given} given)")]
    Arity {
        /// Number of positional arguments received.
        given: usize,
        /// Number of positional parameters accepted.
        max: usize,
    },

    /// A keyword argument names no field of the record.
    #[error("'{keyword}' is an invalid keyword argument for Person()")]
    UnknownKeyword {
        /// The offending keyword.
        keyword: String,
    },

    /// A field was supplied both by position and by keyword.
    #[error("argument for Person() given by name ('{field}') and position ({position})")]
    DuplicateArgument {
        /// The field supplied twice.
        field: &'static str,
        /// 1-based position at which it was also supplied.
        position: usize,
    },

    /// A supplied value has the wrong kind for its field.
    #[error("'{field}' must be {expected}, not {found}")]
    TypeMismatch {
        /// The field being assigned.
        field: &'static str,
        /// Human-readable expected kind (`"str"`, `"int"`).
        expected: &'static str,
        /// Type name of the value actually received.
        found: String,
    },

    /// A name field is absent. Only reachable after the field was cleared.
    #[error("{field}")]
    MissingField {
        /// The absent field.
        field: &'static str,
    },

    /// Setup failed before the record or module became usable.
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// The running interpreter's major version differs from the one the
    /// extension was built for.
    #[error(
        "mymodule was built for major version {built} but is being run by major version {running}"
    )]
    VersionMismatch {
        /// Major version the extension was compiled against.
        built: u8,
        /// Major version of the running interpreter.
        running: u8,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PersonError>;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::args::{bind_arguments, FieldValue, PARAMETERS};
    pub use crate::config::PersonConfig;
    pub use crate::person::{Person, DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME, DEFAULT_NUMBER};
    pub use crate::version::{check_compatibility, Compatibility, HostVersion};
    pub use crate::PersonError;
}
