//! authmeta registry library entry.
//!
//! This crate wires the metadata registrar, annotation config, metadata
//! provider, strategy dispatch, and security documents into one component.
//! It is intended to be consumed by the binary (`main.rs`), by applications
//! embedding the registry, and by integration tests.

pub mod app_state;
pub mod config;
pub mod openapi;
pub mod provider;
pub mod registry;
pub mod strategy;
