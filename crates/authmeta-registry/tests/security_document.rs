#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use authmeta_core::metadata::{Scope, Target};
use authmeta_registry::openapi;
use authmeta_registry::registry::MetadataRegistry;
use serde_json::json;

fn registry() -> MetadataRegistry {
    let reg = MetadataRegistry::new();
    let users = Target::named("UserController");
    reg.annotate(&users, Scope::Class, ["jwt"]).unwrap();
    reg.annotate(&users, Scope::method("login"), ["basic", "api-key"]).unwrap();
    reg.annotate_skip(&users, Scope::method("health")).unwrap();

    let public = Target::named("PublicController");
    reg.annotate_skip(&public, Scope::Class).unwrap();
    reg
}

#[test]
fn operation_security_follows_precedence() {
    let reg = registry();
    let users = Target::named("UserController");

    assert_eq!(
        openapi::operation_security_json(&reg, &users, "login").unwrap(),
        json!({ "security": [{ "basic": [] }, { "api-key": [] }] })
    );
    assert_eq!(
        openapi::operation_security_json(&reg, &users, "profile").unwrap(),
        json!({ "security": [{ "jwt": [] }] })
    );
    // skipped: explicit empty list clears inherited requirements
    assert_eq!(
        openapi::operation_security_json(&reg, &users, "health").unwrap(),
        json!({ "security": [] })
    );
    // no metadata anywhere
    assert_eq!(
        openapi::operation_security_json(&reg, &Target::named("Other"), "x").unwrap(),
        json!({})
    );
}

#[test]
fn document_lists_targets_and_operations() {
    let reg = registry();
    let doc = openapi::security_document(
        &reg,
        vec![
            (Target::named("UserController"), "profile".to_string()),
            (Target::named("PublicController"), "index".to_string()),
            (Target::named("BareController"), "ping".to_string()),
        ],
    )
    .unwrap();

    assert_eq!(
        doc,
        json!({
            "BareController": {
                "operations": { "ping": {} }
            },
            "PublicController": {
                "security": [],
                "operations": { "index": { "security": [] } }
            },
            "UserController": {
                "security": [{ "jwt": [] }],
                "operations": {
                    "health": { "security": [] },
                    "login": { "security": [{ "basic": [] }, { "api-key": [] }] },
                    "profile": { "security": [{ "jwt": [] }] }
                }
            }
        })
    );
}
