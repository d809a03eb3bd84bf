//! Scope-mode policy: mapping logical dependency roles onto concrete scope
//! names under the provided-mode toggle.

/// Scope names used by the core manifest. The registry defines which scopes
/// actually exist; these constants are just the vocabulary this crate emits.
pub mod scope {
    /// Dependencies of the build system itself.
    pub const BUILD: &str = "build";
    /// Dependencies needed when generating documentation.
    pub const DOCS: &str = "docs";
    /// Supplied by the host environment, never bundled.
    pub const PROVIDED: &str = "provided";
    /// Needed at compile time.
    pub const COMPILE: &str = "compile";
    /// Needed at run time only.
    pub const RUNTIME: &str = "runtime";
    /// Needed when running tests.
    pub const TEST: &str = "test";
}

/// Resolve a logical role to a concrete scope name.
///
/// When `provided_mode` is on, the `compile` and `runtime` roles are
/// redirected into `provided`: the deployment wants those dependencies
/// marked "supplied by the host environment" without duplicating every group
/// declaration. Every other role maps to itself.
#[must_use]
pub fn resolve_scope(role: &str, provided_mode: bool) -> &str {
    match role {
        scope::COMPILE | scope::RUNTIME if provided_mode => scope::PROVIDED,
        other => other,
    }
}
