//! Widget configuration loader.
//!
//! Reads a TOML file into [`WidgetConfig`]. Falls back to defaults when
//! the file is missing or malformed so the widget can still start (and
//! report a useless webhook URL through normal error rendering).

use std::path::Path;

use maitre_types::config::WidgetConfig;

/// Load the widget configuration from `path`.
///
/// - Missing file: returns [`WidgetConfig::default()`].
/// - Unreadable or unparseable file: logs a warning, returns the default.
/// - Otherwise: the parsed config.
pub async fn load_widget_config(path: &Path) -> WidgetConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return WidgetConfig::default();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using defaults", path.display());
            return WidgetConfig::default();
        }
    };

    match toml::from_str::<WidgetConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to parse {}: {err}, using defaults", path.display());
            WidgetConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_widget_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_widget_config(&tmp.path().join("maitre.toml")).await;
        assert!(config.webhook_url.is_empty());
        assert_eq!(config.restaurant_name, "LA Baker");
    }

    #[tokio::test]
    async fn load_widget_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("maitre.toml");
        tokio::fs::write(
            &config_path,
            r#"
webhook_url = "https://workflows.example.com/webhook/abc/chat"
restaurant_name = "Corner Bistro"
restaurant_url = "https://cornerbistro.example.com/"
"#,
        )
        .await
        .unwrap();

        let config = load_widget_config(&config_path).await;
        assert_eq!(
            config.webhook_url,
            "https://workflows.example.com/webhook/abc/chat"
        );
        assert_eq!(config.restaurant_name, "Corner Bistro");
        assert!(config.language_model_key.is_none());
    }

    #[tokio::test]
    async fn load_widget_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("maitre.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_widget_config(&config_path).await;
        assert!(config.webhook_url.is_empty());
        assert_eq!(config.restaurant_url, "https://www.labaker.com/");
    }
}
