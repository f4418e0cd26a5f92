use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use authmeta_core::error::{AuthMetaError, Result};
use authmeta_core::metadata::{AuthenticationSpec, StrategyOptions};

use super::request::{AuthRequest, UserProfile};

/// A named authentication mechanism.
///
/// `Ok(None)` means the strategy does not apply to this request (e.g. its
/// credentials are absent) and the next declared strategy is tried.
#[async_trait]
pub trait AuthenticationStrategy: Send + Sync {
    fn name(&self) -> &str;
    async fn authenticate(
        &self,
        request: &AuthRequest,
        options: Option<&StrategyOptions>,
    ) -> Result<Option<UserProfile>>;
}

/// A declared spec bound to its implementation.
#[derive(Clone)]
pub struct ResolvedStrategy {
    pub strategy: Arc<dyn AuthenticationStrategy>,
    pub spec: AuthenticationSpec,
}

/// Strategy implementations by name.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: DashMap<String, Arc<dyn AuthenticationStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self {
            strategies: DashMap::new(),
        }
    }

    pub fn register(&self, strategy: Arc<dyn AuthenticationStrategy>) {
        let name = strategy.name().to_string();
        if self.strategies.insert(name.clone(), strategy).is_some() {
            tracing::warn!(strategy = %name, "authentication strategy replaced");
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AuthenticationStrategy>> {
        self.strategies.get(name).map(|s| Arc::clone(s.value()))
    }

    /// Registered names, sorted.
    pub fn registered(&self) -> Vec<String> {
        let mut names: Vec<String> = self.strategies.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Bind every spec to its implementation, keeping declaration order.
    pub fn resolve(&self, specs: &[AuthenticationSpec]) -> Result<Vec<ResolvedStrategy>> {
        specs
            .iter()
            .map(|spec| {
                let strategy = self
                    .get(&spec.strategy)
                    .ok_or_else(|| AuthMetaError::StrategyNotFound(spec.strategy.clone()))?;
                Ok(ResolvedStrategy {
                    strategy,
                    spec: spec.clone(),
                })
            })
            .collect()
    }
}
