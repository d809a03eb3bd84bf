//! Property-based tests for the group registrar contract:
//! one registration per coordinate, input order preserved, and the call's
//! exclusion set applied uniformly.

use ballast_core::ModuleCoordinate;
use ballast_manifest::{InMemoryScopeRegistry, register_group};
use proptest::prelude::*;

/// Generate a non-empty coordinate field.
fn field_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.-]{0,15}".prop_map(String::from)
}

/// Generate a list of valid coordinates.
fn coordinates_strategy(max: usize) -> impl Strategy<Value = Vec<ModuleCoordinate>> {
    proptest::collection::vec(
        (field_strategy(), field_strategy(), field_strategy()),
        0..=max,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|(g, n, v)| {
                ModuleCoordinate::new(g, n, v).unwrap_or_else(|e| panic!("valid by construction: {e}"))
            })
            .collect()
    })
}

/// Generate an exclusion list (possibly empty).
fn exclusions_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z][a-z-]{0,10}".prop_map(String::from), 0..4)
}

proptest! {
    #[test]
    fn registers_once_per_coordinate_in_order(
        coordinates in coordinates_strategy(16),
        exclusions in exclusions_strategy(),
    ) {
        let mut registry = InMemoryScopeRegistry::new();
        let excluded: Vec<&str> = exclusions.iter().map(String::as_str).collect();

        register_group(&mut registry, "compile", &coordinates, &excluded).unwrap();

        prop_assert_eq!(registry.registered().len(), coordinates.len());
        for (input, (scope, descriptor)) in coordinates.iter().zip(registry.registered()) {
            prop_assert_eq!(scope.as_str(), "compile");
            prop_assert_eq!(&descriptor.coordinate, input);
        }
    }

    #[test]
    fn exclusion_set_is_uniform_across_the_call(
        coordinates in coordinates_strategy(8),
        exclusions in exclusions_strategy(),
    ) {
        let mut registry = InMemoryScopeRegistry::new();
        let excluded: Vec<&str> = exclusions.iter().map(String::as_str).collect();

        register_group(&mut registry, "runtime", &coordinates, &excluded).unwrap();

        for (_, descriptor) in registry.registered() {
            for name in &exclusions {
                prop_assert!(descriptor.excludes(name));
            }
            // Nothing beyond the requested names (duplicates collapse)
            let unique: std::collections::BTreeSet<&str> =
                exclusions.iter().map(String::as_str).collect();
            prop_assert_eq!(descriptor.excluded_modules.len(), unique.len());
        }
    }

    #[test]
    fn descriptors_are_inherited_and_transitive(
        coordinates in coordinates_strategy(8),
    ) {
        let mut registry = InMemoryScopeRegistry::new();

        register_group(&mut registry, "build", &coordinates, &[]).unwrap();

        for (_, descriptor) in registry.registered() {
            prop_assert!(descriptor.inherited);
            prop_assert!(descriptor.transitive);
            prop_assert!(!descriptor.force);
        }
    }
}
