//! Security requirement documents for OpenAPI generation.
//!
//! An operation carries `"security"` whenever metadata applies to it: the
//! derived requirements, or `[]` when authentication is skipped (which in
//! OpenAPI clears any inherited requirement). Operations with no metadata
//! omit the key.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use authmeta_core::error::{AuthMetaError, Result};
use authmeta_core::metadata::{Scope, SecurityRequirement, Target};

use crate::app_state::AppState;
use crate::config;
use crate::registry::MetadataRegistry;
use crate::strategy::StrategyRegistry;

#[derive(Debug, Default, Serialize)]
struct TargetDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    security: Option<Vec<SecurityRequirement>>,
    operations: BTreeMap<String, OperationDoc>,
}

#[derive(Debug, Serialize)]
struct OperationDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    security: Option<Vec<SecurityRequirement>>,
}

fn operation_doc(registry: &MetadataRegistry, target: &Target, method: &str) -> OperationDoc {
    let security = registry
        .lookup(target, method)
        .map(|_| registry.operation_security(target, method));
    OperationDoc { security }
}

fn to_json<T: Serialize>(doc: &T) -> Result<Value> {
    serde_json::to_value(doc)
        .map_err(|e| AuthMetaError::Internal(format!("security document encode failed: {e}")))
}

/// `{"security": [...]}` for one operation.
pub fn operation_security_json(
    registry: &MetadataRegistry,
    target: &Target,
    method: &str,
) -> Result<Value> {
    to_json(&operation_doc(registry, target, method))
}

/// Security document for every annotated target plus the given operations.
///
/// Shape: `{ "<target>": { "security": [...], "operations": { "<method>": {...} } } }`,
/// keys sorted.
pub fn security_document<I>(registry: &MetadataRegistry, operations: I) -> Result<Value>
where
    I: IntoIterator<Item = (Target, String)>,
{
    let mut methods: BTreeMap<Target, Vec<String>> = BTreeMap::new();
    for target in registry.targets() {
        let annotated = registry.annotated_methods(&target);
        methods.entry(target).or_default().extend(annotated);
    }
    for (target, method) in operations {
        methods.entry(target).or_default().push(method);
    }

    let mut doc: BTreeMap<String, TargetDoc> = BTreeMap::new();
    for (target, names) in methods {
        let entry = doc.entry(target.name().to_string()).or_default();
        entry.security = registry.record_at(&target, &Scope::Class).map(|_| {
            registry
                .security_requirements(&target, &Scope::Class)
                .map(|s| s.to_vec())
                .unwrap_or_default()
        });
        for name in names {
            let op = operation_doc(registry, &target, &name);
            entry.operations.insert(name, op);
        }
    }

    to_json(&doc)
}

/// Load an annotation config file and render its security document as
/// pretty-printed JSON.
pub fn render_config_document(path: &str) -> Result<String> {
    let cfg = config::load_from_file(path)?;
    let state = AppState::new(cfg, Arc::new(StrategyRegistry::new()))?;
    let doc = security_document(&state.registry(), state.operations())?;
    serde_json::to_string_pretty(&doc)
        .map_err(|e| AuthMetaError::Internal(format!("security document encode failed: {e}")))
}
