//! OpenAI-compatible language-model client.
//!
//! One client backs both optional capabilities: rewriting webhook
//! answers for tone ([`ResponseFormatter`]) and suggesting quick-reply
//! questions ([`FollowupGenerator`]). Built only when a credential is
//! configured; the base URL can point at a proxy that holds the real
//! key server-side.
//!
//! Uses [`async_openai`] for type-safe request/response handling.

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use secrecy::ExposeSecret;

use maitre_core::formatter::{FollowupGenerator, ResponseFormatter};
use maitre_core::polish::{parse_followup_lines, strip_filler};
use maitre_types::config::WidgetConfig;
use maitre_types::error::FormatError;

/// Model used when the config names none.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Completion budget for a single rewrite or suggestion.
const MAX_COMPLETION_TOKENS: u32 = 500;

const TEMPERATURE: f32 = 0.7;

const FORMAT_SYSTEM_PROMPT: &str = "You polish replies from a restaurant's chat assistant. \
    Rewrite the reply in a warm, concise tone. Respond with the rewritten reply only: \
    no meta-commentary, no headings, no introductions.";

const FOLLOWUP_SYSTEM_PROMPT: &str = "You suggest quick-reply buttons for a restaurant's \
    chat assistant. Write exactly 2 short follow-up questions the guest might ask next, \
    one per line, nothing else.";

/// Client for the optional language-model services.
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
#[derive(Clone)]
pub struct LanguageModelClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl LanguageModelClient {
    /// Build a client from the widget config.
    ///
    /// Returns `None` when no credential is configured; the widget then
    /// displays webhook answers unmodified.
    pub fn from_config(config: &WidgetConfig) -> Option<Self> {
        let key = config.language_model_key.as_ref()?;

        let mut oai_config = OpenAIConfig::new().with_api_key(key.expose_secret());
        if let Some(base_url) = &config.language_model_proxy_url {
            oai_config = oai_config.with_api_base(base_url);
        }

        Some(Self {
            client: Client::with_config(oai_config),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    fn build_request(&self, system: &str, user: &str) -> CreateChatCompletionRequest {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(system.to_string()),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(user.to_string()),
                name: None,
            }),
        ];

        CreateChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_completion_tokens: Some(MAX_COMPLETION_TOKENS),
            temperature: Some(TEMPERATURE),
            ..Default::default()
        }
    }

    /// Run one completion and return the first choice's content.
    async fn complete(&self, system: &str, user: &str) -> Result<String, FormatError> {
        let request = self.build_request(system, user);

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|err| FormatError::Provider(err.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(FormatError::EmptyCompletion);
        }
        Ok(content)
    }
}

impl ResponseFormatter for LanguageModelClient {
    async fn format(&self, answer: &str, context: &str) -> Result<String, FormatError> {
        let user = format!("Guest asked: {context}\n\nReply to rewrite:\n{answer}");
        let completion = self.complete(FORMAT_SYSTEM_PROMPT, &user).await?;
        Ok(strip_filler(&completion))
    }
}

impl FollowupGenerator for LanguageModelClient {
    async fn suggest(&self, context: &str) -> Result<Vec<String>, FormatError> {
        let user = format!("The guest's last message: {context}");
        let completion = self.complete(FOLLOWUP_SYSTEM_PROMPT, &user).await?;
        Ok(parse_followup_lines(&completion))
    }
}
