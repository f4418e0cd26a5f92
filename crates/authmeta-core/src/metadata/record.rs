//! Metadata records: what a class or method declares.
//!
//! JSON form is an array: the specs in declaration order, or a single
//! `{"skip": true}` element for the skip marker.

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{AuthMetaError, Result};

use super::security::SecurityRequirement;
use super::spec::AuthenticationSpec;

/// Record attached to one `(target, scope)`.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataRecord {
    /// Ordered strategy specs, tried in this order at dispatch.
    Strategies(Vec<AuthenticationSpec>),
    /// Authentication is bypassed for the scope.
    Skip,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SkipMarker {
    skip: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordEntry {
    Skip(SkipMarker),
    Spec(AuthenticationSpec),
}

impl MetadataRecord {
    pub fn is_skip(&self) -> bool {
        matches!(self, MetadataRecord::Skip)
    }

    /// Strategy specs; empty for the skip marker.
    pub fn specs(&self) -> &[AuthenticationSpec] {
        match self {
            MetadataRecord::Strategies(specs) => specs,
            MetadataRecord::Skip => &[],
        }
    }

    pub fn get(&self, index: usize) -> Option<&AuthenticationSpec> {
        self.specs().get(index)
    }

    pub fn strategy_names(&self) -> impl Iterator<Item = &str> {
        self.specs().iter().map(|s| s.strategy.as_str())
    }

    /// One `{strategy: []}` per spec, in order. The skip marker derives none.
    pub fn security_requirements(&self) -> Vec<SecurityRequirement> {
        self.specs().iter().map(SecurityRequirement::for_spec).collect()
    }

    /// JSON array form, as produced by `Serialize`.
    pub fn to_json(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| AuthMetaError::Internal(format!("metadata record encode failed: {e}")))
    }
}

impl Serialize for MetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MetadataRecord::Skip => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element(&SkipMarker { skip: true })?;
                seq.end()
            }
            MetadataRecord::Strategies(specs) => specs.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for MetadataRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<RecordEntry>::deserialize(deserializer)?;
        if entries.is_empty() {
            return Err(D::Error::custom("metadata record must not be empty"));
        }

        let mut specs = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                // skip wins over any spec at the same scope
                RecordEntry::Skip(SkipMarker { skip: true }) => return Ok(MetadataRecord::Skip),
                RecordEntry::Skip(SkipMarker { skip: false }) => {
                    return Err(D::Error::custom("skip marker must be `true`"));
                }
                RecordEntry::Spec(spec) => specs.push(spec),
            }
        }
        Ok(MetadataRecord::Strategies(specs))
    }
}
