//! Error types for manifest construction and registration.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or registering a dependency manifest.
///
/// There is no recoverable tier: a manifest feeds a build-time dependency
/// graph, so any failure must stop the build rather than leave a silently
/// incomplete classpath behind.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A module coordinate field was empty at construction time.
    #[error("Invalid module coordinate '{coordinate}': {field} must not be empty")]
    #[diagnostic(
        code(ballast::core::invalid_coordinate),
        help("A coordinate needs a non-empty group, name, and version, e.g. 'org.apache.ant:ant:1.8.1'")
    )]
    InvalidCoordinate {
        /// Which of the three coordinate fields was empty.
        field: &'static str,
        /// The offending coordinate, rendered as `group:name:version`.
        coordinate: String,
    },

    /// The registry does not recognise the scope a descriptor was submitted to.
    #[error("Unknown scope '{scope}' while registering '{coordinate}'")]
    #[diagnostic(
        code(ballast::core::unknown_scope),
        help("Check that the scope is declared in the resolver configuration before dependencies are registered against it")
    )]
    UnknownScope {
        /// The scope name the registry rejected.
        scope: String,
        /// The coordinate of the descriptor being registered.
        coordinate: String,
    },

    /// The registry rejected a descriptor for a resolver-side reason other
    /// than an unknown scope.
    #[error("Registry rejected '{coordinate}' in scope '{scope}': {message}")]
    #[diagnostic(
        code(ballast::core::registry_rejection),
        help("Resolver-side rejections are fatal and are not retried; fix the descriptor or the resolver configuration")
    )]
    RegistryRejection {
        /// The scope the descriptor was submitted to.
        scope: String,
        /// The coordinate of the rejected descriptor.
        coordinate: String,
        /// The resolver's description of the rejection.
        message: String,
    },
}
