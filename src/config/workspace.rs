use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::message::SeedMessage;
use super::service::{find_option, find_service, ServiceConfig};
use crate::error::WorkspaceError;
use crate::value::OptionValue;

/// How assistant text is shown relative to speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Output is shown word-by-word in time with the TTS audio.
    Conversational,
    /// Output is shown immediately.
    Informational,
}

impl InteractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Conversational => "conversational",
            InteractionMode::Informational => "informational",
        }
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionMode {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conversational" => Ok(InteractionMode::Conversational),
            "informational" => Ok(InteractionMode::Informational),
            _ => Err(WorkspaceError::InvalidRequest(format!(
                "Unknown interaction mode: {s}"
            ))),
        }
    }
}

/// The configuration document attached to a workspace.
///
/// Every field is optional: workspaces created before a service type existed
/// simply lack it. Unknown top-level keys are carried through untouched so a
/// save never drops data this crate doesn't model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Vec<ServiceConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_keys: Option<BTreeMap<String, String>>,
    /// Service type (`llm`, `tts`, ...) to provider id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_llm_context: Option<Vec<SeedMessage>>,
    /// Stored, but readers derive the mode from the TTS text filter instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_mode: Option<InteractionMode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WorkspaceConfig {
    pub fn service(&self, service_id: &str) -> Option<&ServiceConfig> {
        find_service(self.config.as_deref(), service_id)
    }

    pub fn option(&self, service_id: &str, name: &str) -> Option<&OptionValue> {
        self.service(service_id)
            .and_then(|service| find_option(service, name))
    }

    /// Provider id configured for a service type.
    pub fn provider(&self, service_type: &str) -> Option<&str> {
        self.services
            .as_ref()
            .and_then(|services| services.get(service_type))
            .map(String::as_str)
    }

    /// API key of the provider currently selected for `service_type`.
    /// Both hops must be present; nothing is defaulted.
    pub fn api_key_for(&self, service_type: &str) -> Option<&str> {
        let provider = self.provider(service_type)?;
        self.api_keys
            .as_ref()
            .and_then(|keys| keys.get(provider))
            .map(String::as_str)
    }

    /// Mutable service entry, appended at the end of the list if missing.
    pub fn service_mut_or_insert(&mut self, service_id: &str) -> &mut ServiceConfig {
        let list = self.config.get_or_insert_with(Vec::new);
        let index = match list.iter().position(|c| c.service == service_id) {
            Some(index) => index,
            None => {
                list.push(ServiceConfig::new(service_id));
                list.len() - 1
            }
        };
        &mut list[index]
    }

    pub fn set_provider(&mut self, service_type: &str, provider: impl Into<String>) {
        self.services
            .get_or_insert_with(BTreeMap::new)
            .insert(service_type.to_string(), provider.into());
    }

    /// Drops the provider entry for `service_type`. An emptied map stays
    /// present.
    pub fn clear_provider(&mut self, service_type: &str) {
        if let Some(services) = self.services.as_mut() {
            services.remove(service_type);
        }
    }

    /// Copy of this config with the API key map removed.
    pub fn without_api_keys(&self) -> Self {
        Self {
            api_keys: None,
            ..self.clone()
        }
    }
}
