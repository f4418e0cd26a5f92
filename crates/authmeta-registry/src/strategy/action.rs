use std::sync::Arc;

use authmeta_core::error::{AuthMetaError, Result};
use authmeta_core::metadata::Target;

use crate::provider::AuthMetadataProvider;

use super::registry::StrategyRegistry;
use super::request::{AuthRequest, UserProfile};

/// Runs the strategies declared for an operation.
#[derive(Clone)]
pub struct AuthenticateAction {
    provider: AuthMetadataProvider,
    strategies: Arc<StrategyRegistry>,
    fail_on_error: bool,
}

impl AuthenticateAction {
    pub fn new(provider: AuthMetadataProvider, strategies: Arc<StrategyRegistry>) -> Self {
        Self {
            provider,
            strategies,
            fail_on_error: false,
        }
    }

    pub fn fail_on_error(mut self, fail_on_error: bool) -> Self {
        self.fail_on_error = fail_on_error;
        self
    }

    /// Authenticate a request for `target::method`.
    ///
    /// - `Ok(None)`: authentication does not apply to the operation.
    /// - `Ok(Some(profile))`: the first strategy (in declared order) that
    ///   produced a profile.
    /// - `Err`: an unknown strategy name, a strategy error, or no strategy
    ///   produced a profile.
    pub async fn authenticate(
        &self,
        target: &Target,
        method: &str,
        request: &AuthRequest,
    ) -> Result<Option<UserProfile>> {
        let Some(specs) = self.provider.resolve(target, method) else {
            tracing::debug!(controller = %target, method, "authentication not required");
            return Ok(None);
        };

        let resolved = self.strategies.resolve(&specs)?;

        let mut first_err = None;
        for r in resolved {
            let name = r.spec.strategy.as_str();
            match r.strategy.authenticate(request, r.spec.options.as_ref()).await {
                Ok(Some(profile)) => {
                    tracing::debug!(controller = %target, method, strategy = name, user = %profile.id, "authenticated");
                    return Ok(Some(profile));
                }
                Ok(None) => {}
                Err(e) if self.fail_on_error => return Err(e),
                Err(e) => {
                    tracing::debug!(controller = %target, method, strategy = name, error = %e, "strategy failed, trying next");
                    first_err.get_or_insert(e);
                }
            }
        }

        Err(first_err.unwrap_or_else(|| {
            AuthMetaError::AuthFailed(
                "user profile not returned from strategy's authenticate function".into(),
            )
        }))
    }
}
