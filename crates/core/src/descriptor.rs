//! Dependency descriptors: a coordinate bound to a resolution scope plus the
//! exclusion and inheritance metadata a resolver needs.

use crate::coordinate::ModuleCoordinate;
use serde::Serialize;
use std::collections::BTreeSet;

/// A single dependency as submitted to a scope registry.
///
/// A descriptor is built fresh for every registration and never mutated after
/// it has been handed over; corrections are modelled by registering a new
/// descriptor, not by editing an old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyDescriptor {
    /// The module this descriptor resolves.
    pub coordinate: ModuleCoordinate,
    /// The resolution scope the descriptor belongs to.
    pub scope: String,
    /// Whether downstream consumers of this manifest inherit the dependency.
    /// Always true for descriptors produced by the core manifest.
    pub inherited: bool,
    /// Whether the resolver should walk the module's transitive closure.
    pub transitive: bool,
    /// Whether this revision overrides conflict resolution.
    pub force: bool,
    /// Transitive module *names* (not full coordinates) stripped from the
    /// module's closure.
    pub excluded_modules: BTreeSet<String>,
}

impl DependencyDescriptor {
    /// Create a descriptor for `coordinate` in `scope` with the defaults the
    /// core manifest uses: inherited, transitive, not forced, no exclusions.
    #[must_use]
    pub fn new(coordinate: ModuleCoordinate, scope: impl Into<String>) -> Self {
        Self {
            coordinate,
            scope: scope.into(),
            inherited: true,
            transitive: true,
            force: false,
            excluded_modules: BTreeSet::new(),
        }
    }

    /// Exclude a transitive module by name.
    ///
    /// Applied while the descriptor is being assembled, before it reaches a
    /// registry. Adding the same name twice is harmless.
    pub fn exclude(&mut self, module_name: impl Into<String>) {
        self.excluded_modules.insert(module_name.into());
    }

    /// Whether `module_name` is stripped from this descriptor's closure.
    #[must_use]
    pub fn excludes(&self, module_name: &str) -> bool {
        self.excluded_modules.contains(module_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(group: &str, name: &str, version: &str) -> ModuleCoordinate {
        ModuleCoordinate::new(group, name, version).unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let descriptor =
            DependencyDescriptor::new(coordinate("org.apache.ant", "ant", "1.8.1"), "build");

        assert_eq!(descriptor.scope, "build");
        assert!(descriptor.inherited);
        assert!(descriptor.transitive);
        assert!(!descriptor.force);
        assert!(descriptor.excluded_modules.is_empty());
    }

    #[test]
    fn test_exclude_adds_module_names() {
        let mut descriptor = DependencyDescriptor::new(
            coordinate("net.sf.ehcache", "ehcache-core", "2.3.1"),
            "runtime",
        );

        descriptor.exclude("jms");
        descriptor.exclude("commons-logging");
        descriptor.exclude("servlet-api");

        assert_eq!(descriptor.excluded_modules.len(), 3);
        assert!(descriptor.excludes("jms"));
        assert!(descriptor.excludes("servlet-api"));
        assert!(!descriptor.excludes("mail"));
    }

    #[test]
    fn test_exclude_is_idempotent() {
        let mut descriptor =
            DependencyDescriptor::new(coordinate("g", "n", "1.0"), "compile");

        descriptor.exclude("jline");
        descriptor.exclude("jline");

        assert_eq!(descriptor.excluded_modules.len(), 1);
    }

    #[test]
    fn test_serialization() {
        let mut descriptor =
            DependencyDescriptor::new(coordinate("log4j", "log4j", "1.2.16"), "runtime");
        descriptor.exclude("mail");

        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"scope\":\"runtime\""));
        assert!(json.contains("\"inherited\":true"));
        assert!(json.contains("\"excluded_modules\":[\"mail\"]"));
    }
}
