use std::sync::Arc;

use authmeta_core::metadata::{AuthenticationSpec, Target};

use crate::registry::MetadataRegistry;

/// Resolved view over the registry for one component.
#[derive(Clone)]
pub struct AuthMetadataProvider {
    registry: Arc<MetadataRegistry>,
    default_metadata: Option<Arc<[AuthenticationSpec]>>,
}

impl AuthMetadataProvider {
    pub fn new(registry: Arc<MetadataRegistry>) -> Self {
        Self {
            registry,
            default_metadata: None,
        }
    }

    /// Specs applied to operations with no metadata at all. Empty => none.
    pub fn with_defaults(mut self, specs: Vec<AuthenticationSpec>) -> Self {
        self.default_metadata = if specs.is_empty() {
            None
        } else {
            Some(specs.into())
        };
        self
    }

    pub fn registry(&self) -> &Arc<MetadataRegistry> {
        &self.registry
    }

    /// Specs to run for `target::method`, or `None` when authentication does
    /// not apply (skipped, or nothing declared and no defaults).
    pub fn resolve(&self, target: &Target, method: &str) -> Option<Vec<AuthenticationSpec>> {
        match self.registry.lookup(target, method) {
            Some(record) if record.is_skip() => None,
            Some(record) => Some(record.specs().to_vec()),
            None => self.default_metadata.as_ref().map(|d| d.to_vec()),
        }
    }
}
