//! Projection of a raw, possibly sparse workspace config into the fully
//! defaulted view settings screens render.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::catalog::llm_model;
use crate::config::{
    conversational_text_filter, default_workspace_config, option_names, service_ids,
    InteractionMode, SeedMessage, WorkspaceConfig,
};
use crate::value::OptionValue;

/// Whether missing fields are filled from the default template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    #[default]
    Template,
    /// Missing fields take the type's empty value.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelChoice {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Provider id
    pub service: String,
    pub model: ModelChoice,
    pub messages: Vec<SeedMessage>,
    pub run_on_config: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Provider id
    pub service: String,
    pub voice: String,
    pub model: String,
    pub language: String,
    pub interaction_mode: InteractionMode,
}

/// UI-ready view of a workspace. Derived on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredWorkspaceData {
    pub api_keys: BTreeMap<String, String>,
    pub llm: LlmSettings,
    pub tts: TtsSettings,
}

/// Projects `config`, filling gaps from the default template.
pub fn project(config: &WorkspaceConfig) -> StructuredWorkspaceData {
    project_with(config, Fallback::Template)
}

pub fn project_with(config: &WorkspaceConfig, fallback: Fallback) -> StructuredWorkspaceData {
    let defaults = match fallback {
        Fallback::Template => Some(template_defaults()),
        Fallback::Disabled => None,
    };
    let explicit = ExplicitFields::read(config);

    let model = match explicit.llm_model {
        Some(id) => ModelChoice {
            label: llm_model(&id)
                .map(|m| m.label.to_string())
                .unwrap_or_else(|| id.clone()),
            value: id,
        },
        None => defaults
            .map(|d| d.llm.model.clone())
            .unwrap_or_else(|| ModelChoice {
                label: String::new(),
                value: String::new(),
            }),
    };

    let llm = LlmSettings {
        api_key: config.api_key_for(service_ids::LLM).map(str::to_string),
        service: or_default(explicit.llm_service, defaults, |d| &d.llm.service),
        model,
        messages: explicit
            .messages
            .or_else(|| defaults.map(|d| d.llm.messages.clone()))
            .unwrap_or_default(),
        run_on_config: explicit
            .run_on_config
            .or_else(|| defaults.map(|d| d.llm.run_on_config))
            .unwrap_or_default(),
    };

    let tts = TtsSettings {
        api_key: config.api_key_for(service_ids::TTS).map(str::to_string),
        service: or_default(explicit.tts_service, defaults, |d| &d.tts.service),
        voice: or_default(explicit.tts_voice, defaults, |d| &d.tts.voice),
        model: or_default(explicit.tts_model, defaults, |d| &d.tts.model),
        language: or_default(explicit.tts_language, defaults, |d| &d.tts.language),
        interaction_mode: derive_interaction_mode(config),
    };

    StructuredWorkspaceData {
        api_keys: config.api_keys.clone().unwrap_or_default(),
        llm,
        tts,
    }
}

/// Conversational only when the TTS `text_filter` option is structurally
/// equal to the conversational filter. Absence counts as informational.
pub fn derive_interaction_mode(config: &WorkspaceConfig) -> InteractionMode {
    match config.option(service_ids::TTS, option_names::TEXT_FILTER) {
        Some(filter) if *filter == conversational_text_filter() => InteractionMode::Conversational,
        _ => InteractionMode::Informational,
    }
}

fn template_defaults() -> &'static StructuredWorkspaceData {
    static DEFAULTS: OnceLock<StructuredWorkspaceData> = OnceLock::new();
    DEFAULTS.get_or_init(|| project_with(&default_workspace_config(), Fallback::Disabled))
}

fn or_default(
    explicit: Option<String>,
    defaults: Option<&StructuredWorkspaceData>,
    field: impl FnOnce(&StructuredWorkspaceData) -> &String,
) -> String {
    explicit
        .or_else(|| defaults.map(|d| field(d).clone()))
        .unwrap_or_default()
}

/// Values present in the document with the expected shape.
struct ExplicitFields {
    llm_service: Option<String>,
    llm_model: Option<String>,
    messages: Option<Vec<SeedMessage>>,
    run_on_config: Option<bool>,
    tts_service: Option<String>,
    tts_voice: Option<String>,
    tts_model: Option<String>,
    tts_language: Option<String>,
}

impl ExplicitFields {
    fn read(config: &WorkspaceConfig) -> Self {
        let string_option = |service: &str, name: &str| {
            config
                .option(service, name)
                .and_then(OptionValue::as_str)
                .map(str::to_string)
        };
        Self {
            llm_service: config.provider(service_ids::LLM).map(str::to_string),
            llm_model: string_option(service_ids::LLM, option_names::MODEL),
            messages: config.default_llm_context.clone(),
            run_on_config: config
                .option(service_ids::LLM, option_names::RUN_ON_CONFIG)
                .and_then(OptionValue::as_bool),
            tts_service: config.provider(service_ids::TTS).map(str::to_string),
            tts_voice: string_option(service_ids::TTS, option_names::VOICE),
            tts_model: string_option(service_ids::TTS, option_names::MODEL),
            tts_language: string_option(service_ids::TTS, option_names::LANGUAGE),
        }
    }
}

#[cfg(test)]
mod tests;
