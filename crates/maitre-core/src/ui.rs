//! Render callbacks the controller drives.

use std::sync::Arc;

use maitre_types::chat::TurnRole;

/// Presentation seam for the conversation controller.
///
/// The controller never touches presentation directly; any frontend
/// (terminal, web, test harness) implements these three callbacks.
pub trait ChatUi {
    /// Display one conversation turn.
    fn render_turn(&self, content: &str, role: TurnRole);

    /// Replace the current quick-reply set with `options`.
    fn render_quick_replies(&self, options: &[String]);

    /// Toggle the loading indicator.
    fn set_busy(&self, busy: bool);
}

// A frontend usually needs to keep a handle to its own UI (e.g. to map
// a typed number back to a quick-reply option) while the controller
// owns another, so Arc-wrapped UIs implement the trait too.
impl<T: ChatUi + ?Sized> ChatUi for Arc<T> {
    fn render_turn(&self, content: &str, role: TurnRole) {
        (**self).render_turn(content, role);
    }

    fn render_quick_replies(&self, options: &[String]) {
        (**self).render_quick_replies(options);
    }

    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy);
    }
}
