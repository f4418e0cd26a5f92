//! Metadata provider used at dispatch time.
//!
//! Wraps the registry lookup with component defaults and the skip flag so
//! callers get either the specs to run or "no authentication".

pub mod metadata;

pub use metadata::AuthMetadataProvider;
