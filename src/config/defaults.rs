use std::collections::BTreeMap;

use super::message::SeedMessage;
use super::service::ServiceConfig;
use super::workspace::WorkspaceConfig;
use super::{option_names, service_ids};
use crate::catalog::{default_llm_model, default_stt_provider, default_voice};
use crate::value::OptionValue;

pub const DEFAULT_PROMPT: &str = "You are Sesame, a friendly assistant. Keep your responses brief, when possible or not requested differently. Avoid bold and italic text formatting (**bold** and *italic*) in your responses.";

pub const DEFAULT_VAD_STOP_SECS: f64 = 0.3;

fn text_filter(filter: bool) -> OptionValue {
    OptionValue::Object(BTreeMap::from([
        ("filter_code".to_string(), OptionValue::Bool(filter)),
        ("filter_tables".to_string(), OptionValue::Bool(filter)),
    ]))
}

/// TTS `text_filter` value that marks a workspace as conversational.
/// Only an exact structural match counts.
pub fn conversational_text_filter() -> OptionValue {
    text_filter(false)
}

/// TTS `text_filter` value written for informational workspaces.
pub fn informational_text_filter() -> OptionValue {
    text_filter(true)
}

/// The template every new workspace starts from, and the source of defaults
/// for fields missing from an existing one.
pub fn default_workspace_config() -> WorkspaceConfig {
    let llm = default_llm_model();
    let voice = default_voice();
    let stt = default_stt_provider();

    let services = BTreeMap::from([
        (service_ids::LLM.to_string(), llm.provider.to_string()),
        (service_ids::TTS.to_string(), voice.tts_provider.to_string()),
        (service_ids::STT.to_string(), stt.id.to_string()),
    ]);

    let vad_params = OptionValue::Object(BTreeMap::from([(
        "stop_secs".to_string(),
        OptionValue::from(DEFAULT_VAD_STOP_SECS),
    )]));

    WorkspaceConfig {
        services: Some(services),
        default_llm_context: Some(vec![SeedMessage::system(DEFAULT_PROMPT)]),
        config: Some(vec![
            ServiceConfig::new(service_ids::VAD).with_option(option_names::PARAMS, vad_params),
            ServiceConfig::new(service_ids::TTS)
                .with_option(option_names::VOICE, voice.voice_id)
                .with_option(option_names::MODEL, voice.tts_model)
                .with_option(option_names::LANGUAGE, voice.language)
                .with_option(option_names::TEXT_FILTER, conversational_text_filter()),
            ServiceConfig::new(service_ids::LLM)
                .with_option(option_names::MODEL, llm.id)
                .with_option(option_names::RUN_ON_CONFIG, false),
            ServiceConfig::new(service_ids::STT)
                .with_option(option_names::MODEL, voice.stt_model)
                .with_option(option_names::LANGUAGE, voice.language),
        ]),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn template_serializes_to_backend_shape() {
        let value = serde_json::to_value(default_workspace_config()).unwrap();
        assert_eq!(
            value["services"],
            json!({"llm": "anthropic", "tts": "cartesia", "stt": "deepgram"})
        );
        assert_eq!(value["config"][0]["service"], "vad");
        assert_eq!(value["config"][0]["options"][0]["value"], json!({"stop_secs": 0.3}));
        assert_eq!(
            value["config"][1]["options"][3],
            json!({"name": "text_filter", "value": {"filter_code": false, "filter_tables": false}})
        );
        assert_eq!(value["default_llm_context"][0]["content"]["role"], "system");
        assert!(value.get("api_keys").is_none());
    }

    #[test]
    fn text_filters_differ() {
        assert_ne!(conversational_text_filter(), informational_text_filter());
    }
}
