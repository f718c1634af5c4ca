//! Conversation controller: the turn-taking state machine.
//!
//! Owns the session state, invokes the [`MessageSender`] capability for
//! each turn, optionally post-processes the answer through a
//! [`ResponseFormatter`], and drives the [`ChatUi`] render callbacks.
//! Single-threaded and cooperative: the only suspension points are the
//! network calls, and the busy latch enforces at most one outstanding
//! submit.

use tracing::{debug, info, warn};

use maitre_types::chat::{ConversationTurn, SessionState, TurnRole};
use maitre_types::error::SendError;

use crate::formatter::{NoFormatter, ResponseFormatter};
use crate::normalize::normalize;
use crate::sender::MessageSender;
use crate::ui::ChatUi;

/// Quick-reply options shown when the webhook suggests no followups.
pub const DEFAULT_OPTIONS: [&str; 4] = [
    "Menu & Products",
    "Hours & Location",
    "Catering Services",
    "Contact Information",
];

/// The default quick-reply set as owned strings.
pub fn default_options() -> Vec<String> {
    DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect()
}

/// Turn-taking state machine for one chat session.
///
/// Generic over the sender, UI, and formatter capabilities so the core
/// stays free of I/O (the same clean-architecture split the rest of the
/// workspace follows: maitre-core never depends on maitre-infra).
pub struct ConversationController<S, U, F = NoFormatter> {
    sender: S,
    ui: U,
    formatter: Option<F>,
    state: SessionState,
}

impl<S: MessageSender, U: ChatUi> ConversationController<S, U> {
    /// Create a controller with no answer formatter.
    pub fn new(sender: S, ui: U) -> Self {
        Self {
            sender,
            ui,
            formatter: None,
            state: SessionState::default(),
        }
    }
}

impl<S: MessageSender, U: ChatUi, F: ResponseFormatter> ConversationController<S, U, F> {
    /// Attach the optional answer formatter. `None` keeps the raw
    /// webhook answers.
    pub fn with_formatter<F2: ResponseFormatter>(
        self,
        formatter: Option<F2>,
    ) -> ConversationController<S, U, F2> {
        ConversationController {
            sender: self.sender,
            ui: self.ui,
            formatter,
            state: self.state,
        }
    }

    /// Conversation turns so far, in chronological order.
    pub fn history(&self) -> &[ConversationTurn] {
        &self.state.history
    }

    /// Whether a submit is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.state.is_busy
    }

    /// Show the default quick-reply options, at most once per session.
    pub fn start_session(&mut self) {
        if self.state.default_options_shown {
            return;
        }
        self.ui.render_quick_replies(&default_options());
        self.state.default_options_shown = true;
    }

    /// Run one full turn: forward `text` to the webhook, normalize the
    /// reply, optionally format it, and drive the render callbacks.
    ///
    /// A submit while a turn is already in flight is a no-op. All
    /// failures are absorbed here: an error message is rendered in the
    /// chat and the session settles back to idle, ready for the next
    /// input.
    pub async fn submit(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if self.state.is_busy {
            debug!("submit refused: a turn is already in flight");
            return;
        }

        self.state.is_busy = true;
        self.state.history.push(ConversationTurn::user(text));
        self.ui.render_turn(text, TurnRole::User);
        self.ui.set_busy(true);

        match self.sender.send(text).await {
            Ok(raw) => {
                let reply = normalize(&raw);
                let answer = self.format_answer(&reply.answer, text).await;

                self.state
                    .history
                    .push(ConversationTurn::assistant(answer.clone()));
                self.ui.render_turn(&answer, TurnRole::Assistant);

                // Followups replace the previous quick-reply set; an
                // empty set falls back to the four defaults.
                if reply.followups.is_empty() {
                    self.ui.render_quick_replies(&default_options());
                } else {
                    self.ui.render_quick_replies(&reply.followups);
                }
                info!(followups = reply.followups.len(), "turn completed");
            }
            Err(err) => {
                warn!(error = %err, "webhook call failed");
                // Displayed only: error turns are not part of the
                // history, and the prior quick replies stay as they are.
                self.ui
                    .render_turn(&user_facing_message(&err), TurnRole::Assistant);
            }
        }

        self.state.is_busy = false;
        self.ui.set_busy(false);
    }

    async fn format_answer(&self, answer: &str, context: &str) -> String {
        let Some(formatter) = &self.formatter else {
            return answer.to_string();
        };
        match formatter.format(answer, context).await {
            Ok(formatted) => formatted,
            Err(err) => {
                debug!(error = %err, "formatter unavailable, using raw answer");
                answer.to_string()
            }
        }
    }
}

/// Map a send failure to the message shown in the chat.
pub fn user_facing_message(err: &SendError) -> String {
    match err {
        SendError::Transport(_) => {
            "Network error. Please check your internet connection and try again.".to_string()
        }
        SendError::UpstreamStatus { status: 500, .. } => {
            "Our chat service is experiencing technical difficulties. Please try again in a moment."
                .to_string()
        }
        SendError::UpstreamStatus { status: 404, .. } => {
            "Chat service endpoint not found. Please contact support.".to_string()
        }
        SendError::UpstreamStatus { status: 503, .. } => {
            "Chat service is temporarily unavailable. Please try again later.".to_string()
        }
        SendError::UpstreamStatus { status, .. } => {
            format!("Unable to connect to chat service ({status}). Please try again.")
        }
    }
}
