//! Scoped dependency-group registration and the core manifest build pass.
//!
//! This crate compiles a fixed catalogue of module coordinates into scoped,
//! exclusion-filtered dependency descriptors and submits them to an external
//! dependency resolver. It never resolves, downloads, or caches artifacts;
//! the resolver behind the [`ScopeRegistry`] and [`RepositoryConfigurer`]
//! traits owns all of that.
//!
//! # Architecture
//!
//! - [`registry`] - the two narrow context traits the resolver implements,
//!   plus [`InMemoryScopeRegistry`] for dry runs and tests
//! - [`policy`] - the provided-mode scope policy ([`resolve_scope`])
//! - [`registrar`] - [`register_group`], one descriptor per coordinate in
//!   input order
//! - [`groups`] - the literal dependency-group tables (configuration data)
//! - [`builder`] - [`CoreDependencies`], the one-shot build pass:
//!   log-level hint, repositories, then every group in table order
//!
//! # Example
//!
//! ```rust
//! use ballast_manifest::{CoreDependencies, InMemoryScopeRegistry, RepositoryConfigurer};
//!
//! struct NoRepositories;
//!
//! impl RepositoryConfigurer for NoRepositories {
//!     fn add_plugin_repository(&mut self) {}
//!     fn add_distribution_repository(&mut self) {}
//! }
//!
//! let mut registry = InMemoryScopeRegistry::new();
//! let manifest = CoreDependencies::new("1.4.0");
//! manifest.build(&mut registry, &mut NoRepositories)?;
//!
//! assert!(registry.in_scope("compile").count() > 0);
//! # Ok::<(), ballast_core::Error>(())
//! ```

pub mod builder;
pub mod groups;
pub mod policy;
pub mod registrar;
pub mod registry;

// Re-export the core value types alongside this crate's API
pub use ballast_core::{DependencyDescriptor, Error, ModuleCoordinate, Result};

pub use builder::CoreDependencies;
pub use groups::{DEPENDENCY_GROUPS, DependencyGroup, ModuleSpec, ScopeBinding, VersionSpec};
pub use policy::{resolve_scope, scope};
pub use registrar::register_group;
pub use registry::{InMemoryScopeRegistry, RepositoryConfigurer, ScopeRegistry};
