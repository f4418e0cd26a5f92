use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Transport-agnostic view of an inbound request, as seen by strategies.
#[derive(Debug, Clone, Default)]
pub struct AuthRequest {
    // keys lowercased
    headers: HashMap<String, String>,
}

impl AuthRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Token from `Authorization: Bearer <token>`.
    pub fn bearer_token(&self) -> Option<&str> {
        let value = self.header("authorization")?;
        let (scheme, token) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        (!token.is_empty()).then_some(token)
    }
}

/// Identity produced by a successful strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    /// Name of the strategy that authenticated the request.
    pub strategy: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            strategy: strategy.into(),
            attributes: Map::new(),
        }
    }
}
