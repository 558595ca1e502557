use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SettingsError;

const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

/// Client settings persisted between runs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Backend API root.
    pub server_url: String,
    /// Bearer token for the backend.
    pub secret: String,
    pub default_workspace: Option<Uuid>,
    pub enable_mic: bool,
    pub selected_mic: Option<String>,
    pub enable_wake_word: bool,
    /// Provider id to API key, offered when creating workspaces.
    pub api_keys: BTreeMap<String, String>,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            secret: String::new(),
            default_workspace: None,
            enable_mic: true,
            selected_mic: None,
            enable_wake_word: false,
            api_keys: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<String>,
    pub rotate_size: u64,
    pub rotate_keep: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}

impl Settings {
    /// Sets a field from its dotted key, e.g. `enable_mic` or
    /// `api_keys.openai`. An empty value clears optional fields.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        match key {
            "server_url" => self.server_url = value.to_string(),
            "secret" => self.secret = value.to_string(),
            "default_workspace" => self.default_workspace = parse_optional(key, value)?,
            "enable_mic" => self.enable_mic = parse(key, value)?,
            "selected_mic" => self.selected_mic = non_empty(value),
            "enable_wake_word" => self.enable_wake_word = parse(key, value)?,
            "logging.level" => self.logging.level = value.to_string(),
            "logging.path" => self.logging.path = non_empty(value),
            "logging.rotate_size" => self.logging.rotate_size = parse(key, value)?,
            "logging.rotate_keep" => self.logging.rotate_keep = parse(key, value)?,
            _ => match key.strip_prefix("api_keys.") {
                Some(provider) if !provider.is_empty() => {
                    if value.is_empty() {
                        self.api_keys.remove(provider);
                    } else {
                        self.api_keys.insert(provider.to_string(), value.to_string());
                    }
                }
                _ => return Err(SettingsError::UnknownKey(key.to_string())),
            },
        }
        Ok(())
    }

    /// Copy with the secret and API keys masked, for display.
    pub fn redacted(&self) -> Self {
        Self {
            secret: mask(&self.secret),
            api_keys: self
                .api_keys
                .iter()
                .map(|(provider, key)| (provider.clone(), mask(key)))
                .collect(),
            ..self.clone()
        }
    }
}

fn mask(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn parse<T>(key: &str, value: &str) -> Result<T, SettingsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| SettingsError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

fn parse_optional<T>(key: &str, value: &str) -> Result<Option<T>, SettingsError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    if value.is_empty() {
        Ok(None)
    } else {
        parse(key, value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_file_fills_defaults() {
        let settings: Settings = toml::from_str("server_url = \"https://sesame.example.com/api\"").unwrap();
        assert_eq!(settings.server_url, "https://sesame.example.com/api");
        assert!(settings.enable_mic);
        assert!(!settings.enable_wake_word);
        assert_eq!(settings.logging, LoggingConfig::default());
    }

    #[test]
    fn set_parses_typed_fields() {
        let mut settings = Settings::default();
        settings.set("enable_mic", "false").unwrap();
        settings.set("logging.rotate_keep", "9").unwrap();
        settings
            .set("default_workspace", "0b8a4f3e-6a39-4c55-9a4e-5c8f0f2f4d11")
            .unwrap();
        assert!(!settings.enable_mic);
        assert_eq!(settings.logging.rotate_keep, 9);
        assert!(settings.default_workspace.is_some());

        settings.set("default_workspace", "").unwrap();
        assert_eq!(settings.default_workspace, None);
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.set("enable_mic", "maybe"),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert!(matches!(
            settings.set("volume", "11"),
            Err(SettingsError::UnknownKey(_))
        ));
        assert!(matches!(
            settings.set("api_keys.", "x"),
            Err(SettingsError::UnknownKey(_))
        ));
    }

    #[test]
    fn api_keys_are_set_and_cleared() {
        let mut settings = Settings::default();
        settings.set("api_keys.openai", "sk-123").unwrap();
        assert_eq!(settings.api_keys.get("openai").map(String::as_str), Some("sk-123"));
        settings.set("api_keys.openai", "").unwrap();
        assert!(settings.api_keys.is_empty());
    }

    #[test]
    fn redacted_masks_secrets_only() {
        let mut settings = Settings::default();
        settings.set("secret", "s3cr3t").unwrap();
        settings.set("api_keys.cartesia", "ck").unwrap();
        settings.set("server_url", "http://localhost:7860/api").unwrap();
        let redacted = settings.redacted();
        assert_eq!(redacted.secret, "********");
        assert_eq!(redacted.api_keys["cartesia"], "********");
        assert_eq!(redacted.server_url, settings.server_url);
    }
}
