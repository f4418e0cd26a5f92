//! Shared application state for the authentication component.
//!
//! Applies the annotation config to a fresh registry, wires the metadata
//! provider and strategy registry, and makes startup errors explicit
//! (Result instead of panic).

use std::sync::Arc;

use authmeta_core::error::{AuthMetaError, Result};
use authmeta_core::metadata::{Scope, Target};

use crate::config::AuthMetaConfig;
use crate::provider::AuthMetadataProvider;
use crate::registry::MetadataRegistry;
use crate::strategy::{AuthenticateAction, StrategyRegistry};

const FAIL_FAST_ON_UNKNOWN_STRATEGY: bool = false; // if changed to true, boot fails.

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<MetadataRegistry>,
    strategies: Arc<StrategyRegistry>,
}

struct AppStateInner {
    cfg: AuthMetaConfig,
    provider: AuthMetadataProvider,
}

impl AppState {
    /// Build application state from config. `strategies` may still be
    /// populated afterwards; names are resolved per request.
    pub fn new(cfg: AuthMetaConfig, strategies: Arc<StrategyRegistry>) -> Result<Self> {
        Self::with_registry(cfg, Arc::new(MetadataRegistry::new()), strategies)
    }

    /// Like `new`, on a registry that may already hold code-declared metadata.
    pub fn with_registry(
        cfg: AuthMetaConfig,
        registry: Arc<MetadataRegistry>,
        strategies: Arc<StrategyRegistry>,
    ) -> Result<Self> {
        // 1) Apply declared metadata, all or nothing
        let mut pending = Vec::new();
        for c in &cfg.controllers {
            let target = c.target();
            if let Some(record) = c.record() {
                pending.push((
                    target.clone(),
                    Scope::Class,
                    record,
                    format!("controller {}", c.name),
                ));
            }
            for m in &c.methods {
                if let Some(record) = m.record() {
                    pending.push((
                        target.clone(),
                        Scope::method(m.name.clone()),
                        record,
                        format!("controller {} method {}", c.name, m.name),
                    ));
                }
            }
        }

        for (target, scope, _, at) in &pending {
            if registry.record_at(target, scope).is_some() {
                return Err(AuthMetaError::InvalidConfig(format!(
                    "{at}: {}",
                    AuthMetaError::AlreadyAnnotated {
                        target: target.to_string(),
                        scope: scope.to_string(),
                    }
                )));
            }
        }

        for (target, scope, record, at) in pending {
            registry
                .insert(&target, scope, record)
                .map_err(|e| AuthMetaError::InvalidConfig(format!("{at}: {e}")))?;
        }

        // 2) Provider with component defaults
        let mut provider = AuthMetadataProvider::new(Arc::clone(&registry));
        if let Some(defaults) = cfg.authentication.default_specs() {
            provider = provider.with_defaults(defaults);
        }

        // declared strategies <-> registered strategies sanity check
        {
            let registered = strategies.registered();
            let mut referenced = registry.referenced_strategies();
            if let Some(defaults) = cfg.authentication.default_specs() {
                referenced.extend(defaults.into_iter().map(|s| s.strategy));
            }

            for name in &referenced {
                if registered.contains(name) {
                    continue;
                }
                tracing::warn!(strategy = %name, "metadata refers to unregistered authentication strategy");
                if FAIL_FAST_ON_UNKNOWN_STRATEGY {
                    return Err(AuthMetaError::StrategyNotFound(name.clone()));
                }
            }
        }

        tracing::info!(
            records = registry.len(),
            strategies = strategies.registered().len(),
            "authentication metadata ready"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, provider }),
            registry,
            strategies,
        })
    }

    pub fn cfg(&self) -> &AuthMetaConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<MetadataRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn strategies(&self) -> Arc<StrategyRegistry> {
        Arc::clone(&self.strategies)
    }

    pub fn provider(&self) -> &AuthMetadataProvider {
        &self.inner.provider
    }

    /// Authenticate action honoring `authentication.fail_on_error`.
    pub fn authenticate_action(&self) -> AuthenticateAction {
        AuthenticateAction::new(self.inner.provider.clone(), self.strategies())
            .fail_on_error(self.inner.cfg.authentication.fail_on_error)
    }

    /// Every `(controller, method)` pair declared in config.
    pub fn operations(&self) -> Vec<(Target, String)> {
        self.inner
            .cfg
            .controllers
            .iter()
            .flat_map(|c| {
                let target = c.target();
                c.methods
                    .iter()
                    .map(move |m| (target.clone(), m.name.clone()))
            })
            .collect()
    }
}
