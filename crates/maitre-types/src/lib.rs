//! Shared domain types for the maitre chat widget.
//!
//! This crate contains the conversation types exchanged between the
//! controller, the webhook sender, and the UI layer, plus configuration
//! and error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, secrecy,
//! and thiserror.

pub mod chat;
pub mod config;
pub mod error;
