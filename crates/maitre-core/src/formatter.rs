//! Optional language-model capabilities: answer formatting and
//! follow-up suggestion.
//!
//! Both are strictly cosmetic. A failure in either degrades to the raw
//! webhook output and is never surfaced to the user.

use maitre_types::error::FormatError;

/// Rewrites a raw webhook answer for tone before display.
pub trait ResponseFormatter: Send + Sync {
    /// Format `answer`, given the user message that produced it.
    fn format(
        &self,
        answer: &str,
        context: &str,
    ) -> impl std::future::Future<Output = Result<String, FormatError>> + Send;
}

/// Suggests short follow-up questions for the quick-reply row.
pub trait FollowupGenerator: Send + Sync {
    /// Suggest up to two follow-up questions for the given context.
    fn suggest(
        &self,
        context: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, FormatError>> + Send;
}

/// Formatter stand-in for sessions without a language-model credential.
///
/// The controller treats its error like any other formatter failure and
/// displays the raw answer unmodified.
pub struct NoFormatter;

impl ResponseFormatter for NoFormatter {
    async fn format(&self, _answer: &str, _context: &str) -> Result<String, FormatError> {
        Err(FormatError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_formatter_reports_not_configured() {
        let err = NoFormatter.format("hi", "context").await.unwrap_err();
        assert!(matches!(err, FormatError::NotConfigured));
    }
}
