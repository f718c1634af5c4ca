//! Conversation types for the chat widget.
//!
//! A session is an ordered sequence of turns plus two flags: the busy
//! latch (at most one in-flight submit) and the one-shot marker for the
//! default quick-reply options.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// A single turn in the conversation.
///
/// Turns are appended in strict chronological order and never mutated
/// or removed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// The answer and suggested follow-up questions extracted from one
/// webhook reply.
///
/// Produced fresh per webhook call; never persisted. `followups` holds
/// at most two non-blank entries, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedReply {
    pub answer: String,
    pub followups: Vec<String>,
}

impl NormalizedReply {
    /// A reply carrying only an answer, no follow-up suggestions.
    pub fn answer_only(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            followups: Vec::new(),
        }
    }
}

/// Mutable state of a single chat session.
///
/// One instance per session, owned and mutated only by the conversation
/// controller. `is_busy` is true only between submit-start and
/// submit-settle; a second submit while busy is refused.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub history: Vec<ConversationTurn>,
    pub is_busy: bool,
    pub default_options_shown: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_roundtrip() {
        for role in [TurnRole::User, TurnRole::Assistant] {
            let s = role.to_string();
            let parsed: TurnRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_turn_role_serde() {
        let json = serde_json::to_string(&TurnRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: TurnRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TurnRole::Assistant);
    }

    #[test]
    fn test_turn_role_parse_invalid() {
        assert!("bot".parse::<TurnRole>().is_err());
    }

    #[test]
    fn test_turn_constructors() {
        let turn = ConversationTurn::user("hello");
        assert_eq!(turn.role, TurnRole::User);
        assert_eq!(turn.content, "hello");

        let turn = ConversationTurn::assistant("hi there");
        assert_eq!(turn.role, TurnRole::Assistant);
    }

    #[test]
    fn test_answer_only_reply() {
        let reply = NormalizedReply::answer_only("our hours are 8-6");
        assert_eq!(reply.answer, "our hours are 8-6");
        assert!(reply.followups.is_empty());
    }

    #[test]
    fn test_session_state_default() {
        let state = SessionState::default();
        assert!(state.history.is_empty());
        assert!(!state.is_busy);
        assert!(!state.default_options_shown);
    }
}
