//! Security requirements derived for documentation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::spec::AuthenticationSpec;

/// OpenAPI security requirement object: `{ "<strategy>": [<scopes>] }`.
///
/// Derived requirements never carry scopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityRequirement(BTreeMap<String, Vec<String>>);

impl SecurityRequirement {
    pub fn for_strategy(strategy: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(strategy.into(), Vec::new());
        Self(map)
    }

    pub fn for_spec(spec: &AuthenticationSpec) -> Self {
        Self::for_strategy(spec.strategy.clone())
    }

    /// Scheme names referenced by this requirement.
    pub fn strategies(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn scopes(&self, strategy: &str) -> Option<&[String]> {
        self.0.get(strategy).map(Vec::as_slice)
    }
}
