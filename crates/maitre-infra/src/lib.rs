//! Infrastructure implementations for the maitre chat widget.
//!
//! Concrete backends for the capability traits defined in maitre-core:
//! the reqwest webhook sender, the OpenAI-compatible language-model
//! client, and the TOML config loader.

pub mod config;
pub mod language_model;
pub mod webhook;
