//! Strategy specs.
//!
//! Wire form is `{"strategy": "...", "options": {...}}`; `options` is
//! omitted when absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AuthMetaError, Result};

/// Free-form strategy configuration.
pub type StrategyOptions = Map<String, Value>;

/// One named authentication strategy and its configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthenticationSpec {
    /// Strategy name (e.g. "jwt", "basic"). Resolved at dispatch time.
    pub strategy: String,
    /// Optional strategy options, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<StrategyOptions>,
}

impl AuthenticationSpec {
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            options: None,
        }
    }

    pub fn with_options(strategy: impl Into<String>, options: StrategyOptions) -> Self {
        Self {
            strategy: strategy.into(),
            options: Some(options),
        }
    }

    /// Parse a spec from its JSON object form.
    pub fn from_json(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| AuthMetaError::InvalidConfig(format!("invalid authentication spec: {e}")))
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.as_ref().and_then(|o| o.get(key))
    }
}

/// Accepted annotation argument: a bare strategy name or a full spec.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SpecInput {
    Name(String),
    Spec(AuthenticationSpec),
}

impl SpecInput {
    /// Normalize into a spec (`"jwt"` => `{strategy: "jwt"}`).
    pub fn into_spec(self) -> AuthenticationSpec {
        match self {
            SpecInput::Name(name) => AuthenticationSpec::new(name),
            SpecInput::Spec(spec) => spec,
        }
    }
}

impl From<&str> for SpecInput {
    fn from(name: &str) -> Self {
        SpecInput::Name(name.to_string())
    }
}

impl From<String> for SpecInput {
    fn from(name: String) -> Self {
        SpecInput::Name(name)
    }
}

impl From<AuthenticationSpec> for SpecInput {
    fn from(spec: AuthenticationSpec) -> Self {
        SpecInput::Spec(spec)
    }
}

impl From<SpecInput> for AuthenticationSpec {
    fn from(input: SpecInput) -> Self {
        input.into_spec()
    }
}
