//! Widget configuration loaded once at startup.
//!
//! `WidgetConfig` is deserialized from a TOML file. Every field has a
//! default so a partial (or missing) file still yields a usable config.
//! The language-model credential is wrapped in [`secrecy::SecretString`]
//! so it never shows up in Debug output or logs.

use secrecy::SecretString;
use serde::Deserialize;

/// Top-level configuration for the chat widget.
#[derive(Debug, Deserialize)]
pub struct WidgetConfig {
    /// Workflow webhook that answers chat turns.
    #[serde(default)]
    pub webhook_url: String,

    /// Credential for the optional language-model post-processing.
    /// When absent, answers are displayed exactly as the webhook
    /// returned them.
    #[serde(default)]
    pub language_model_key: Option<SecretString>,

    /// Alternative base URL for the language-model API (e.g. a proxy
    /// that holds the real credential server-side).
    #[serde(default)]
    pub language_model_proxy_url: Option<String>,

    /// Display name shown on assistant turns.
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,

    /// Website shown in the welcome banner.
    #[serde(default = "default_restaurant_url")]
    pub restaurant_url: String,
}

fn default_restaurant_name() -> String {
    "LA Baker".to_string()
}

fn default_restaurant_url() -> String {
    "https://www.labaker.com/".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            language_model_key: None,
            language_model_proxy_url: None,
            restaurant_name: default_restaurant_name(),
            restaurant_url: default_restaurant_url(),
        }
    }
}
