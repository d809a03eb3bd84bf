//! Module coordinates: the `(group, name, version)` identity of one external
//! library, as understood by the dependency resolver.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// The immutable identity of a dependency module.
///
/// Equality and hashing cover all three fields. Construction is the only way
/// to obtain a value, and it enforces that no field is empty. Beyond that the
/// version is passed through untouched: exact versions and resolver-specific
/// range syntax are both legal, and validating range grammar is the
/// resolver's business, not ours.
///
/// `Serialize` only: deserialization would bypass the constructor invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleCoordinate {
    group: String,
    name: String,
    version: String,
}

impl ModuleCoordinate {
    /// Create a coordinate, rejecting empty fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] naming the first empty field.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let group = group.into();
        let name = name.into();
        let version = version.into();

        let empty_field = if group.is_empty() {
            Some("group")
        } else if name.is_empty() {
            Some("name")
        } else if version.is_empty() {
            Some("version")
        } else {
            None
        };

        if let Some(field) = empty_field {
            return Err(Error::InvalidCoordinate {
                field,
                coordinate: format!("{group}:{name}:{version}"),
            });
        }

        Ok(Self {
            group,
            name,
            version,
        })
    }

    /// The organisation or group the module belongs to (e.g. `org.apache.ant`).
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The module name within its group (e.g. `ant-launcher`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The revision requested from the resolver.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_coordinate() {
        let coordinate = ModuleCoordinate::new("org.apache.ant", "ant", "1.8.1").unwrap();

        assert_eq!(coordinate.group(), "org.apache.ant");
        assert_eq!(coordinate.name(), "ant");
        assert_eq!(coordinate.version(), "1.8.1");
    }

    #[test]
    fn test_new_rejects_empty_group() {
        let error = ModuleCoordinate::new("", "x", "1.0").unwrap_err();

        match error {
            Error::InvalidCoordinate { field, .. } => assert_eq!(field, "group"),
            other => panic!("Expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let error = ModuleCoordinate::new("g", "", "1.0").unwrap_err();

        match error {
            Error::InvalidCoordinate { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_empty_version() {
        let error = ModuleCoordinate::new("g", "n", "").unwrap_err();

        match error {
            Error::InvalidCoordinate { field, .. } => assert_eq!(field, "version"),
            other => panic!("Expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_range_versions_pass_through() {
        // Resolver-specific range syntax is not validated here
        let coordinate = ModuleCoordinate::new("g", "n", "[1.0,2.0)").unwrap();
        assert_eq!(coordinate.version(), "[1.0,2.0)");
    }

    #[test]
    fn test_identity_equality() {
        let a = ModuleCoordinate::new("g", "n", "1.0").unwrap();
        let b = ModuleCoordinate::new("g", "n", "1.0").unwrap();
        let c = ModuleCoordinate::new("g", "n", "2.0").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let coordinate = ModuleCoordinate::new("org.slf4j", "slf4j-api", "1.6.1").unwrap();
        assert_eq!(coordinate.to_string(), "org.slf4j:slf4j-api:1.6.1");
    }

    #[test]
    fn test_serialization() {
        let coordinate = ModuleCoordinate::new("junit", "junit", "4.8.1").unwrap();

        let json = serde_json::to_string(&coordinate).unwrap();
        assert!(json.contains("\"group\":\"junit\""));
        assert!(json.contains("\"version\":\"4.8.1\""));
    }
}
