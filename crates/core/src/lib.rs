//! Core dependency-manifest types and error handling for the ballast ecosystem.
//!
//! This crate holds the value types shared across the manifest tooling:
//!
//! - [`ModuleCoordinate`] - the `(group, name, version)` identity of a module
//! - [`DependencyDescriptor`] - a coordinate bound to a scope plus exclusion
//!   and inheritance metadata
//! - [`Error`] / [`Result`] - the fatal error tier for manifest construction
//!
//! All values are constructed during one manifest-build pass and handed to an
//! external resolver; nothing here persists state or performs I/O.

pub mod coordinate;
pub mod descriptor;
pub mod error;

pub use coordinate::ModuleCoordinate;
pub use descriptor::DependencyDescriptor;
pub use error::{Error, Result};
