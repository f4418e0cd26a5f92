#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;

use authmeta_core::error::{ErrorCode, Result};
use authmeta_core::metadata::{Scope, StrategyOptions, Target};
use authmeta_registry::app_state::AppState;
use authmeta_registry::config;
use authmeta_registry::openapi;
use authmeta_registry::registry::MetadataRegistry;
use authmeta_registry::strategy::{AuthRequest, AuthenticationStrategy, StrategyRegistry, UserProfile};
use serde_json::json;

const CFG: &str = r#"
version: 1
authentication:
  default_metadata: ["jwt"]
controllers:
  - name: UserController
    authenticate:
      - jwt
      - { strategy: basic, options: { realm: users } }
    methods:
      - name: whoAmI
        skip: true
      - name: login
        authenticate: ["basic"]
      - name: list
  - name: HealthController
    skip: true
    methods:
      - name: ping
"#;

struct Fails;

#[async_trait]
impl AuthenticationStrategy for Fails {
    fn name(&self) -> &str {
        "jwt"
    }

    async fn authenticate(
        &self,
        _request: &AuthRequest,
        _options: Option<&StrategyOptions>,
    ) -> Result<Option<UserProfile>> {
        Err(authmeta_core::AuthMetaError::AuthFailed("expired".into()))
    }
}

#[test]
fn config_populates_registry() {
    let cfg = config::load_from_str(CFG).unwrap();
    let state = AppState::new(cfg, Arc::new(StrategyRegistry::new())).unwrap();
    let reg = state.registry();

    let users = Target::named("UserController");
    assert_eq!(
        reg.lookup(&users, "list").unwrap().to_json().unwrap(),
        json!([{ "strategy": "jwt" }, { "strategy": "basic", "options": { "realm": "users" } }])
    );
    assert!(reg.lookup(&users, "whoAmI").unwrap().is_skip());
    assert_eq!(reg.lookup(&users, "login").unwrap().to_json().unwrap(), json!([{ "strategy": "basic" }]));
    assert!(reg.lookup(&Target::named("HealthController"), "ping").unwrap().is_skip());

    assert_eq!(
        state.operations(),
        vec![
            (users.clone(), "whoAmI".to_string()),
            (users.clone(), "login".to_string()),
            (users, "list".to_string()),
            (Target::named("HealthController"), "ping".to_string()),
        ]
    );

    // defaults only reach undeclared controllers
    assert!(state.provider().resolve(&Target::named("HealthController"), "ping").is_none());
    assert_eq!(
        state.provider().resolve(&Target::named("Orders"), "list").unwrap()[0].strategy,
        "jwt"
    );
}

#[test]
fn config_document() {
    let cfg = config::load_from_str(CFG).unwrap();
    let state = AppState::new(cfg, Arc::new(StrategyRegistry::new())).unwrap();
    let doc = openapi::security_document(&state.registry(), state.operations()).unwrap();

    assert_eq!(doc["HealthController"]["operations"]["ping"], json!({ "security": [] }));
    assert_eq!(
        doc["UserController"]["security"],
        json!([{ "jwt": [] }, { "basic": [] }])
    );
    assert_eq!(
        doc["UserController"]["operations"]["login"]["security"],
        json!([{ "basic": [] }])
    );
}

#[test]
fn config_collides_with_code_declarations() {
    let reg = Arc::new(MetadataRegistry::new());
    reg.annotate(&Target::named("UserController"), Scope::method("login"), ["jwt"])
        .unwrap();

    let cfg = config::load_from_str(CFG).unwrap();
    let err = AppState::with_registry(cfg, reg, Arc::new(StrategyRegistry::new()))
        .err()
        .expect("must fail");
    assert_eq!(err.code(), ErrorCode::BadRequest);
    assert!(err.to_string().contains("login"), "{err}");
}

#[tokio::test]
async fn fail_on_error_from_config() {
    let cfg = config::load_from_str(
        r#"
version: 1
authentication:
  fail_on_error: true
controllers:
  - name: C
    authenticate: ["jwt"]
"#,
    )
    .unwrap();
    let strategies = Arc::new(StrategyRegistry::new());
    strategies.register(Arc::new(Fails));
    let state = AppState::new(cfg, strategies).unwrap();

    let err = state
        .authenticate_action()
        .authenticate(&Target::named("C"), "m", &AuthRequest::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "auth failed: expired");
}

#[test]
fn rejected_config_leaves_registry_untouched() {
    let reg = Arc::new(MetadataRegistry::new());
    let b = Target::named("B");
    reg.annotate(&b, Scope::method("m"), ["jwt"]).unwrap();

    let cfg = config::load_from_str(
        r#"
version: 1
controllers:
  - name: A
    authenticate: ["basic"]
  - name: B
    methods:
      - name: m
        skip: true
"#,
    )
    .unwrap();
    let err = AppState::with_registry(cfg, Arc::clone(&reg), Arc::new(StrategyRegistry::new()))
        .err()
        .expect("must fail");
    assert!(err.to_string().contains("controller B method m"), "{err}");

    // nothing from the rejected config was applied
    assert!(reg.lookup(&Target::named("A"), "x").is_none());
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.lookup(&b, "m").unwrap().get(0).unwrap().strategy, "jwt");
}
