//! Authentication metadata model.
//!
//! - `spec`: one named strategy plus its options, and the shorthand inputs
//!   accepted by annotation calls.
//! - `record`: the ordered list of specs (or the skip marker) attached to a
//!   class or a method.
//! - `security`: OpenAPI-style security requirements derived from specs.
//! - `target`: the `(target, scope)` keys records are stored under.

pub mod record;
pub mod security;
pub mod spec;
pub mod target;

pub use record::MetadataRecord;
pub use security::SecurityRequirement;
pub use spec::{AuthenticationSpec, SpecInput, StrategyOptions};
pub use target::{Scope, Target};
