#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use authmeta_registry::openapi;
use serde_json::json;

fn bundled_config() -> String {
    format!("{}/../../authmeta.yaml", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn renders_bundled_config() {
    let out = openapi::render_config_document(&bundled_config()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(
        doc,
        json!({
            "HealthController": {
                "security": [],
                "operations": { "ping": { "security": [] } }
            },
            "UserController": {
                "security": [{ "jwt": [] }, { "basic": [] }],
                "operations": {
                    "list": { "security": [{ "jwt": [] }, { "basic": [] }] },
                    "login": { "security": [{ "basic": [] }] },
                    "whoAmI": { "security": [] }
                }
            }
        })
    );
}

#[test]
fn missing_config_fails() {
    let err = openapi::render_config_document("/nonexistent/authmeta.yaml").unwrap_err();
    assert_eq!(err.code().as_str(), "INTERNAL");
}
