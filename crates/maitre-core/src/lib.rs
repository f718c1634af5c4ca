//! Business logic for the maitre chat widget.
//!
//! Two pieces, leaves first: [`normalize`] tolerantly extracts an answer
//! and follow-up suggestions from whatever JSON shape the workflow
//! webhook returned, and [`controller::ConversationController`] runs the
//! turn-taking state machine around it.
//!
//! This crate does no I/O. The webhook transport, the language-model
//! client, and the rendering frontend plug in through the capability
//! traits in [`sender`], [`formatter`], and [`ui`]; concrete
//! implementations live in maitre-infra and maitre-api.
//!
//! [`normalize`]: normalize::normalize

pub mod controller;
pub mod formatter;
pub mod normalize;
pub mod polish;
pub mod sender;
pub mod ui;
