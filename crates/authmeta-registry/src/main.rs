//! authmeta
//!
//! Loads an annotation config and prints the derived security document:
//! - `authmeta [path]` (default: authmeta.yaml)
//! - Log level via `RUST_LOG`

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use authmeta_registry::openapi;

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "authmeta.yaml".to_string());

    tracing::info!(%path, "authmeta loading config");
    match openapi::render_config_document(&path) {
        Ok(doc) => {
            println!("{doc}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "authmeta failed");
            ExitCode::FAILURE
        }
    }
}
