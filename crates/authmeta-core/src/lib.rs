//! authmeta core: authentication metadata primitives and error types.
//!
//! This crate defines the data model shared by the registry, the metadata
//! provider, and documentation tooling: strategy specs, metadata records,
//! skip markers, derived security requirements, and the target/scope keys
//! records are stored under. It carries no runtime dependencies so the types
//! can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `AuthMetaError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metadata;

/// Shared result type.
pub use error::{AuthMetaError, ErrorCode, Result};
pub use metadata::{
    AuthenticationSpec, MetadataRecord, Scope, SecurityRequirement, SpecInput, Target,
};
