//! Top-level facade crate for authmeta.
//!
//! Re-exports core types and the registry library so users can depend on a single crate.

pub mod core {
    pub use authmeta_core::*;
}

pub mod registry {
    pub use authmeta_registry::*;
}
