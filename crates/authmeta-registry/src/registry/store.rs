use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use authmeta_core::error::{AuthMetaError, Result};
use authmeta_core::metadata::{
    AuthenticationSpec, MetadataRecord, Scope, SecurityRequirement, SpecInput, Target,
};

type Key = (Target, Scope);

/// Types that declare their own authentication metadata.
///
/// Stands in for class/method annotations: implementors register records for
/// `target` (their own identity) when `MetadataRegistry::register` is called.
pub trait AuthMetadata: 'static {
    fn register(registry: &MetadataRegistry, target: &Target) -> Result<()>;
}

/// Write-once store of metadata records and derived security requirements.
/// Construct once at startup, then share via Arc.
#[derive(Default)]
pub struct MetadataRegistry {
    records: DashMap<Key, Arc<MetadataRecord>>,
    // derived eagerly at registration, same key as `records`
    security: DashMap<Key, Arc<[SecurityRequirement]>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            security: DashMap::new(),
        }
    }

    /// Run `T`'s own declarations against this registry.
    pub fn register<T: AuthMetadata>(&self) -> Result<()> {
        T::register(self, &Target::of::<T>())
    }

    /// Attach strategy specs to `scope` on `target`, in the given order.
    ///
    /// Bare names are normalized to `{strategy: name}`. Strategy names are not
    /// checked here; unknown names surface when the strategies are resolved.
    pub fn annotate<I, S>(&self, target: &Target, scope: Scope, specs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<SpecInput>,
    {
        let specs: Vec<AuthenticationSpec> =
            specs.into_iter().map(|s| s.into().into_spec()).collect();
        self.insert(target, scope, MetadataRecord::Strategies(specs))
    }

    /// Mark `scope` on `target` as exempt from authentication.
    ///
    /// A scope that already carries specs is rejected with `AlreadyAnnotated`
    /// rather than overridden.
    pub fn annotate_skip(&self, target: &Target, scope: Scope) -> Result<()> {
        self.insert(target, scope, MetadataRecord::Skip)
    }

    /// Attach a prepared record. A scope can be annotated once.
    pub fn insert(&self, target: &Target, scope: Scope, record: MetadataRecord) -> Result<()> {
        if let MetadataRecord::Strategies(specs) = &record {
            if specs.is_empty() {
                return Err(AuthMetaError::EmptyAnnotation {
                    target: target.to_string(),
                    scope: scope.to_string(),
                });
            }
        }

        let key = (target.clone(), scope);
        match self.records.entry(key.clone()) {
            Entry::Occupied(_) => Err(AuthMetaError::AlreadyAnnotated {
                target: key.0.to_string(),
                scope: key.1.to_string(),
            }),
            Entry::Vacant(slot) => {
                if !record.is_skip() {
                    self.security
                        .insert(key.clone(), record.security_requirements().into());
                }
                tracing::debug!(
                    controller = %key.0,
                    scope = %key.1,
                    skip = record.is_skip(),
                    strategies = ?record.strategy_names().collect::<Vec<_>>(),
                    "authentication metadata registered"
                );
                slot.insert(Arc::new(record));
                Ok(())
            }
        }
    }

    /// Effective metadata for `method`: the method's own record if it has one,
    /// else the class record, else `None`. Records are never merged.
    pub fn lookup(&self, target: &Target, method: &str) -> Option<Arc<MetadataRecord>> {
        if let Some(r) = self.records.get(&(target.clone(), Scope::method(method))) {
            return Some(Arc::clone(r.value()));
        }
        self.record_at(target, &Scope::Class)
    }

    /// Record stored at exactly this scope (no fallback).
    pub fn record_at(&self, target: &Target, scope: &Scope) -> Option<Arc<MetadataRecord>> {
        self.records
            .get(&(target.clone(), scope.clone()))
            .map(|r| Arc::clone(r.value()))
    }

    /// Security requirements derived at exactly this scope (no fallback).
    /// `None` when the scope is unannotated or skipped.
    pub fn security_requirements(
        &self,
        target: &Target,
        scope: &Scope,
    ) -> Option<Arc<[SecurityRequirement]>> {
        self.security
            .get(&(target.clone(), scope.clone()))
            .map(|s| Arc::clone(s.value()))
    }

    /// Requirements that apply to `method`, with the same precedence as
    /// `lookup`: a method with its own record (a skip included) never
    /// inherits class-level requirements.
    pub fn operation_security(&self, target: &Target, method: &str) -> Vec<SecurityRequirement> {
        let method_scope = Scope::method(method);
        let scope = if self.records.contains_key(&(target.clone(), method_scope.clone())) {
            method_scope
        } else {
            Scope::Class
        };
        self.security_requirements(target, &scope)
            .map(|s| s.to_vec())
            .unwrap_or_default()
    }

    /// Annotated targets, sorted.
    pub fn targets(&self) -> Vec<Target> {
        let set: BTreeSet<Target> = self.records.iter().map(|e| e.key().0.clone()).collect();
        set.into_iter().collect()
    }

    /// Methods of `target` with their own record, sorted.
    pub fn annotated_methods(&self, target: &Target) -> Vec<String> {
        let set: BTreeSet<String> = self
            .records
            .iter()
            .filter(|e| &e.key().0 == target)
            .filter_map(|e| e.key().1.method_name().map(str::to_string))
            .collect();
        set.into_iter().collect()
    }

    /// Every strategy name referenced by a stored record.
    pub fn referenced_strategies(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|e| {
                e.value()
                    .strategy_names()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
