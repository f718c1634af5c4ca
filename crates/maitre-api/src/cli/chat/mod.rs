//! Terminal chat frontend.
//!
//! Implements the render-callback interface from maitre-core on top of
//! a styled terminal: turns via console, quick replies as a numbered
//! list, the busy flag as an indicatif spinner.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod terminal_ui;

pub use loop_runner::run_chat_loop;
