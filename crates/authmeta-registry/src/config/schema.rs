use std::collections::HashSet;

use serde::Deserialize;

use authmeta_core::error::{AuthMetaError, Result};
use authmeta_core::metadata::{AuthenticationSpec, MetadataRecord, SpecInput, Target};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthMetaConfig {
    pub version: u32,

    #[serde(default)]
    pub authentication: AuthenticationSection,

    #[serde(default)]
    pub controllers: Vec<ControllerConfig>,
}

impl AuthMetaConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AuthMetaError::UnsupportedVersion);
        }

        self.authentication.validate()?;

        let mut seen = HashSet::new();
        for c in &self.controllers {
            c.validate()?;
            if !seen.insert(c.name.as_str()) {
                return Err(AuthMetaError::InvalidConfig(format!(
                    "duplicate controller: {}",
                    c.name
                )));
            }
        }
        Ok(())
    }
}

/// Component-wide authentication options.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AuthenticationSection {
    /// Applied to operations that carry no metadata at all.
    #[serde(default)]
    pub default_metadata: Option<Vec<SpecInput>>,

    /// Abort on the first strategy error instead of trying the next strategy.
    #[serde(default)]
    pub fail_on_error: bool,
}

impl AuthenticationSection {
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.default_metadata, Some(d) if d.is_empty()) {
            return Err(AuthMetaError::InvalidConfig(
                "authentication.default_metadata must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn default_specs(&self) -> Option<Vec<AuthenticationSpec>> {
        self.default_metadata
            .as_ref()
            .map(|d| d.iter().cloned().map(SpecInput::into_spec).collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerConfig {
    pub name: String,

    #[serde(default)]
    pub authenticate: Option<Vec<SpecInput>>,

    #[serde(default)]
    pub skip: bool,

    #[serde(default)]
    pub methods: Vec<MethodConfig>,
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AuthMetaError::InvalidConfig(
                "controllers[].name must not be empty".into(),
            ));
        }
        check_scope(&self.authenticate, self.skip, &self.name)?;

        let mut seen = HashSet::new();
        for m in &self.methods {
            if m.name.trim().is_empty() {
                return Err(AuthMetaError::InvalidConfig(format!(
                    "{}: methods[].name must not be empty",
                    self.name
                )));
            }
            if !seen.insert(m.name.as_str()) {
                return Err(AuthMetaError::InvalidConfig(format!(
                    "{}: duplicate method: {}",
                    self.name, m.name
                )));
            }
            check_scope(&m.authenticate, m.skip, &format!("{}.{}", self.name, m.name))?;
        }
        Ok(())
    }

    pub fn target(&self) -> Target {
        Target::named(self.name.clone())
    }

    /// Class-level record, if the controller declares one.
    pub fn record(&self) -> Option<MetadataRecord> {
        scope_record(&self.authenticate, self.skip)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodConfig {
    pub name: String,

    #[serde(default)]
    pub authenticate: Option<Vec<SpecInput>>,

    #[serde(default)]
    pub skip: bool,
}

impl MethodConfig {
    /// Method-level record, if the method declares one.
    pub fn record(&self) -> Option<MetadataRecord> {
        scope_record(&self.authenticate, self.skip)
    }
}

fn check_scope(authenticate: &Option<Vec<SpecInput>>, skip: bool, at: &str) -> Result<()> {
    match authenticate {
        Some(_) if skip => Err(AuthMetaError::InvalidConfig(format!(
            "{at}: authenticate and skip are mutually exclusive"
        ))),
        Some(specs) if specs.is_empty() => Err(AuthMetaError::InvalidConfig(format!(
            "{at}: authenticate must not be empty"
        ))),
        _ => Ok(()),
    }
}

fn scope_record(authenticate: &Option<Vec<SpecInput>>, skip: bool) -> Option<MetadataRecord> {
    if skip {
        return Some(MetadataRecord::Skip);
    }
    authenticate.as_ref().map(|specs| {
        MetadataRecord::Strategies(specs.iter().cloned().map(SpecInput::into_spec).collect())
    })
}
