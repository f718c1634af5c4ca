use thiserror::Error;

/// Errors from the webhook message sender.
///
/// These never escape the conversation controller: each variant is
/// mapped to a user-facing message and rendered as an assistant-style
/// turn, after which the session returns to idle.
#[derive(Debug, Error)]
pub enum SendError {
    /// Network unreachable, connection refused, or request timeout.
    #[error("network error: {0}")]
    Transport(String),

    /// The webhook answered with a non-2xx status.
    #[error("webhook returned status {status}")]
    UpstreamStatus {
        status: u16,
        /// Body text or its JSON `message` field, when present.
        message: Option<String>,
    },
}

/// Errors from the optional language-model services (formatter and
/// follow-up generator).
///
/// Always absorbed silently: the raw answer is displayed unmodified and
/// no error reaches the user.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("no language model credential configured")]
    NotConfigured,

    #[error("provider error: {0}")]
    Provider(String),

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_error_display() {
        let err = SendError::UpstreamStatus {
            status: 503,
            message: Some("workflow paused".to_string()),
        };
        assert_eq!(err.to_string(), "webhook returned status 503");

        let err = SendError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_format_error_display() {
        assert_eq!(
            FormatError::NotConfigured.to_string(),
            "no language model credential configured"
        );
        let err = FormatError::Provider("rate limited".to_string());
        assert!(err.to_string().contains("rate limited"));
    }
}
