//! Metadata registrar.
//!
//! Side-table from `(target, scope)` to the authentication metadata declared
//! for it. Populated by explicit registration calls at startup (directly, via
//! `AuthMetadata` impls, or from configuration) and read at dispatch time.

pub mod store;

pub use store::{AuthMetadata, MetadataRegistry};
