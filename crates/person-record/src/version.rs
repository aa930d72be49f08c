//! Interpreter version compatibility.
//!
//! The extension is compiled against one interpreter version and may be
//! loaded by another. A different major version cannot work and aborts
//! module initialization. A different minor version is tolerated with a
//! warning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PersonError, Result};

/// A `major.minor` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HostVersion {
    pub major: u8,
    pub minor: u8,
}

impl HostVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for HostVersion {
    type Err = PersonError;

    /// Parses `"3.11"`. A trailing patch component (`"3.11.4"`) is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split('.');
        let mut component = |what: &str| -> Result<u8> {
            parts
                .next()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| {
                    PersonError::Initialization(format!("version '{s}' has no {what} component"))
                })?
                .parse::<u8>()
                .map_err(|e| {
                    PersonError::Initialization(format!(
                        "version '{s}' has an invalid {what} component: {e}"
                    ))
                })
        };
        let major = component("major")?;
        let minor = component("minor")?;
        Ok(Self { major, minor })
    }
}

/// Outcome of a successful compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Built for exactly the running version.
    Exact,
    /// Same major version, different minor version.
    MinorMismatch {
        built: HostVersion,
        running: HostVersion,
    },
}

/// Compare the version the extension was built for with the running one.
///
/// # Errors
///
/// [`PersonError::VersionMismatch`] when the major versions differ.
pub fn check_compatibility(built: HostVersion, running: HostVersion) -> Result<Compatibility> {
    if built.major != running.major {
        tracing::error!(%built, %running, "interpreter major version mismatch");
        return Err(PersonError::VersionMismatch {
            built: built.major,
            running: running.major,
        });
    }
    if built.minor != running.minor {
        tracing::warn!(
            %built,
            %running,
            "mymodule was built for a different interpreter minor version; continuing"
        );
        return Ok(Compatibility::MinorMismatch { built, running });
    }
    Ok(Compatibility::Exact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_major_minor() {
        assert_eq!("3.11".parse::<HostVersion>().unwrap(), HostVersion::new(3, 11));
        assert_eq!(" 3.8.10 ".parse::<HostVersion>().unwrap(), HostVersion::new(3, 8));
    }

    #[test]
    fn rejects_malformed_versions() {
        for bad in ["", "3", "3.", "three.eleven", "3.300"] {
            let err = bad.parse::<HostVersion>().unwrap_err();
            assert!(
                matches!(err, PersonError::Initialization(_)),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        let v = HostVersion::new(3, 12);
        assert_eq!(v.to_string().parse::<HostVersion>().unwrap(), v);
    }

    #[test]
    fn same_version_is_exact() {
        let v = HostVersion::new(3, 11);
        assert_eq!(check_compatibility(v, v).unwrap(), Compatibility::Exact);
    }

    #[test]
    fn minor_mismatch_is_tolerated() {
        let built = HostVersion::new(3, 8);
        let running = HostVersion::new(3, 6);
        assert_eq!(
            check_compatibility(built, running).unwrap(),
            Compatibility::MinorMismatch { built, running }
        );
    }

    #[test]
    fn major_mismatch_is_fatal() {
        let err = check_compatibility(HostVersion::new(3, 11), HostVersion::new(2, 7)).unwrap_err();
        assert_eq!(
            err,
            PersonError::VersionMismatch {
                built: 3,
                running: 2
            }
        );
    }
}
