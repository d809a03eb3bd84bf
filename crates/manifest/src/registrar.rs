//! Group registration: turning an ordered list of coordinates into scoped,
//! exclusion-filtered descriptors submitted to a [`ScopeRegistry`].

use crate::registry::ScopeRegistry;
use ballast_core::{DependencyDescriptor, ModuleCoordinate, Result};

/// Register one group of coordinates under `scope`.
///
/// Builds a fresh descriptor per coordinate (inherited, transitive, not
/// forced), applies every name in `excluded_modules` to each of them, and
/// submits them in slice order. Registration order is an observable contract:
/// later entries for the same logical name may override earlier resolution
/// preferences in the external resolver.
///
/// An empty `coordinates` slice is a no-op, not an error.
///
/// # Errors
///
/// A registry rejection propagates unmodified and aborts the remaining
/// entries of the group; nothing is swallowed or retried.
pub fn register_group<R>(
    registry: &mut R,
    scope: &str,
    coordinates: &[ModuleCoordinate],
    excluded_modules: &[&str],
) -> Result<()>
where
    R: ScopeRegistry + ?Sized,
{
    tracing::debug!(
        scope,
        modules = coordinates.len(),
        excluded = excluded_modules.len(),
        "registering dependency group"
    );

    for coordinate in coordinates {
        let mut descriptor = DependencyDescriptor::new(coordinate.clone(), scope);
        for module_name in excluded_modules {
            descriptor.exclude(*module_name);
        }

        tracing::trace!(scope, coordinate = %coordinate, "registering descriptor");
        registry.register_dependency(scope, descriptor)?;
    }

    Ok(())
}
