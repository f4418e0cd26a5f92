//! JSON test vector loader shared by record tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub record: serde_json::Value,
    #[serde(default)]
    pub expect: Option<Expect>,
    #[serde(default)]
    pub expect_error: bool,
}

#[derive(Debug, Deserialize)]
pub struct Expect {
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub strategies: Vec<String>,
    #[serde(default)]
    pub security: Vec<serde_json::Value>,
}

pub fn load(name: &str) -> Vec<TestVector> {
    let path = format!("{}/tests/vectors/{name}", env!("CARGO_MANIFEST_DIR"));
    let s = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"));
    serde_json::from_str(&s).expect("invalid test vector file")
}
