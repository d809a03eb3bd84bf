//! The registry boundary: the traits an external dependency resolver
//! implements to receive the manifest, plus an in-memory implementation for
//! dry runs and tests.
//!
//! The two traits are deliberately narrow. A manifest build runs in two
//! phases (repository declaration, then dependency registration) and each
//! phase receives only the context type for its own capabilities, so a
//! dependency-phase bug cannot reach into repository configuration (and vice
//! versa).

use ballast_core::{DependencyDescriptor, Error, Result};
use std::collections::BTreeSet;

/// Accumulates dependency descriptors per scope name.
///
/// Implemented by the external resolver. The manifest core only ever calls
/// into this contract; it never resolves, downloads, or caches artifacts
/// itself. The `&mut` receiver encodes the at-most-one-writer assumption:
/// registration is in-memory bookkeeping with no internal synchronization.
pub trait ScopeRegistry {
    /// Register one descriptor under `scope`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownScope`] if the registry does not recognise the scope,
    /// or [`Error::RegistryRejection`] for any other resolver-side validation
    /// failure. Either aborts the manifest build.
    fn register_dependency(&mut self, scope: &str, descriptor: DependencyDescriptor)
    -> Result<()>;

    /// Whether compile/runtime dependencies should be redirected into the
    /// `provided` scope (supplied by the host environment, not bundled).
    fn default_dependencies_provided(&self) -> bool;

    /// Pass-through log-verbosity hint for the resolver.
    fn set_log_level(&mut self, level: &str);
}

/// Declares the repository sources the resolver may fetch from.
///
/// Repositories must be declared before any dependency is registered, since
/// resolvers may need repository context to validate coordinates eagerly.
pub trait RepositoryConfigurer {
    /// Declare the plugin repository.
    fn add_plugin_repository(&mut self);

    /// Declare the local distribution repository.
    fn add_distribution_repository(&mut self);
}

/// A recording [`ScopeRegistry`] that keeps descriptors in registration order.
///
/// Useful for dry runs (inspect what a build pass would register without a
/// live resolver) and as the test double for the manifest build. By default
/// every scope is accepted; restrict with [`accept_scopes`] to exercise the
/// unknown-scope path.
///
/// [`accept_scopes`]: InMemoryScopeRegistry::accept_scopes
#[derive(Debug, Default)]
pub struct InMemoryScopeRegistry {
    registered: Vec<(String, DependencyDescriptor)>,
    accepted_scopes: Option<BTreeSet<String>>,
    default_dependencies_provided: bool,
    log_level: Option<String>,
}

impl InMemoryScopeRegistry {
    /// An empty registry accepting every scope, provided mode off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn provided mode on or off.
    #[must_use]
    pub fn with_default_dependencies_provided(mut self, provided: bool) -> Self {
        self.default_dependencies_provided = provided;
        self
    }

    /// Restrict the registry to a fixed scope vocabulary; registration
    /// against any other scope fails with [`Error::UnknownScope`].
    #[must_use]
    pub fn accept_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Everything registered so far, in registration order.
    #[must_use]
    pub fn registered(&self) -> &[(String, DependencyDescriptor)] {
        &self.registered
    }

    /// The descriptors registered under one scope, in registration order.
    pub fn in_scope<'a>(&'a self, scope: &'a str) -> impl Iterator<Item = &'a DependencyDescriptor> {
        self.registered
            .iter()
            .filter(move |(s, _)| s == scope)
            .map(|(_, d)| d)
    }

    /// The most recent log-verbosity hint, if any was set.
    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

impl ScopeRegistry for InMemoryScopeRegistry {
    fn register_dependency(
        &mut self,
        scope: &str,
        descriptor: DependencyDescriptor,
    ) -> Result<()> {
        if let Some(accepted) = &self.accepted_scopes {
            if !accepted.contains(scope) {
                return Err(Error::UnknownScope {
                    scope: scope.to_string(),
                    coordinate: descriptor.coordinate.to_string(),
                });
            }
        }

        self.registered.push((scope.to_string(), descriptor));
        Ok(())
    }

    fn default_dependencies_provided(&self) -> bool {
        self.default_dependencies_provided
    }

    fn set_log_level(&mut self, level: &str) {
        self.log_level = Some(level.to_string());
    }
}
