//! The manifest build pass: repositories first, then every dependency group,
//! submitted to the external registry in a fixed order.

use crate::groups::{DEPENDENCY_GROUPS, ModuleSpec, ScopeBinding, VersionSpec};
use crate::policy::{resolve_scope, scope};
use crate::registrar::register_group;
use crate::registry::{RepositoryConfigurer, ScopeRegistry};
use ballast_core::{ModuleCoordinate, Result};

/// The core dependencies of the framework, parameterised by the framework
/// core version that the version-tracking coordinates resolve to.
///
/// One value drives one complete, synchronous build pass; nothing is shared
/// between passes, so independent registries can be built in parallel with no
/// coordination.
#[derive(Debug, Clone)]
pub struct CoreDependencies {
    core_version: String,
}

impl CoreDependencies {
    /// A manifest for the given framework core version.
    #[must_use]
    pub fn new(core_version: impl Into<String>) -> Self {
        Self {
            core_version: core_version.into(),
        }
    }

    /// The framework core version this manifest registers.
    #[must_use]
    pub fn core_version(&self) -> &str {
        &self.core_version
    }

    /// Run the full build pass against `registry` and `repositories`.
    ///
    /// Repositories are declared before any dependency is registered, since
    /// the resolver may need repository context to validate coordinates
    /// eagerly. The first registry rejection aborts the rest of the pass: a
    /// partially registered manifest would mean a silently incomplete
    /// classpath, which is worse than a hard failure.
    ///
    /// # Errors
    ///
    /// Surfaces the first coordinate-construction or registry error verbatim.
    pub fn build<R, P>(&self, registry: &mut R, repositories: &mut P) -> Result<()>
    where
        R: ScopeRegistry + ?Sized,
        P: RepositoryConfigurer + ?Sized,
    {
        tracing::debug!(core_version = %self.core_version, "building core dependency manifest");

        registry.set_log_level("warn");
        Self::build_repositories(repositories);
        self.build_dependencies(registry)
    }

    /// Declare the two fixed repository sources, in order.
    fn build_repositories<P>(repositories: &mut P)
    where
        P: RepositoryConfigurer + ?Sized,
    {
        repositories.add_plugin_repository();
        repositories.add_distribution_repository();
    }

    /// Register every dependency group.
    ///
    /// The provided-mode flag is read once and held for the whole pass, so a
    /// registry whose flag flips mid-build still yields a consistent manifest.
    fn build_dependencies<R>(&self, registry: &mut R) -> Result<()>
    where
        R: ScopeRegistry + ?Sized,
    {
        let provided_mode = registry.default_dependencies_provided();
        let compile_scope = resolve_scope(scope::COMPILE, provided_mode);
        let runtime_scope = resolve_scope(scope::RUNTIME, provided_mode);

        for group in DEPENDENCY_GROUPS {
            let group_scope = match group.scope {
                ScopeBinding::Fixed(name) => name,
                ScopeBinding::CompileDefault => compile_scope,
                ScopeBinding::RuntimeDefault => runtime_scope,
            };

            let coordinates = self.materialize(group.modules)?;
            register_group(registry, group_scope, &coordinates, group.excluded_modules)?;
        }

        Ok(())
    }

    /// Turn a group's module specs into validated coordinates, substituting
    /// the core version for version-tracking entries.
    fn materialize(&self, modules: &[ModuleSpec]) -> Result<Vec<ModuleCoordinate>> {
        modules
            .iter()
            .map(|spec| {
                let version = match spec.version {
                    VersionSpec::Pinned(version) => version,
                    VersionSpec::Core => self.core_version.as_str(),
                };
                ModuleCoordinate::new(spec.group, spec.name, version)
            })
            .collect()
    }
}
