//! Annotation config loader (strict parsing).

pub mod schema;

use std::fs;

use authmeta_core::error::{AuthMetaError, Result};

pub use schema::{AuthMetaConfig, AuthenticationSection, ControllerConfig, MethodConfig};

pub fn load_from_file(path: &str) -> Result<AuthMetaConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AuthMetaError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AuthMetaConfig> {
    let cfg: AuthMetaConfig = serde_yaml::from_str(s)
        .map_err(|e| AuthMetaError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
