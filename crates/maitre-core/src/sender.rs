//! MessageSender capability trait.

use serde_json::Value;

use maitre_types::error::SendError;

/// Transport seam between the controller and the workflow webhook.
///
/// Forwards one user message and returns the webhook's raw JSON reply,
/// which the caller feeds through [`crate::normalize::normalize`].
/// Uses native async fn in traits (RPITIT, Rust 2024 edition); the
/// concrete reqwest implementation lives in maitre-infra.
pub trait MessageSender: Send + Sync {
    /// Send one chat turn and return the raw reply.
    ///
    /// A non-2xx response maps to [`SendError::UpstreamStatus`]; an
    /// unreachable network or a timeout maps to [`SendError::Transport`].
    fn send(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Value, SendError>> + Send;
}
