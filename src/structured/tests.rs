use super::*;
use crate::config::{ServiceConfig, DEFAULT_PROMPT};
use rstest::rstest;
use serde_json::json;

fn config_from(value: serde_json::Value) -> WorkspaceConfig {
    serde_json::from_value(value).unwrap()
}

fn tts_with_filter(filter: Option<serde_json::Value>) -> WorkspaceConfig {
    let mut options = vec![json!({"name": "voice", "value": "abc"})];
    if let Some(filter) = filter {
        options.push(json!({"name": "text_filter", "value": filter}));
    }
    config_from(json!({"config": [{"service": "tts", "options": options}]}))
}

#[test]
fn empty_config_projects_to_template_values() {
    let projected = project(&WorkspaceConfig::default());
    let template = project(&default_workspace_config());
    assert_eq!(projected.llm.service, template.llm.service);
    assert_eq!(projected.llm.model, template.llm.model);
    assert_eq!(projected.llm.messages, template.llm.messages);
    assert_eq!(projected.llm.run_on_config, template.llm.run_on_config);
    assert_eq!(projected.tts.service, template.tts.service);
    assert_eq!(projected.tts.voice, template.tts.voice);
    assert_eq!(projected.tts.model, template.tts.model);
    assert_eq!(projected.tts.language, template.tts.language);
    assert!(projected.api_keys.is_empty());
    assert!(projected.llm.api_key.is_none());
    assert!(projected.tts.api_key.is_none());
}

#[test]
fn template_values_match_catalog_defaults() {
    let template = project(&default_workspace_config());
    assert_eq!(template.llm.service, "anthropic");
    assert_eq!(template.llm.model.value, "claude-3-5-sonnet-20241022");
    assert_eq!(template.llm.model.label, "Claude 3.5 Sonnet (2024-10-22)");
    assert_eq!(template.llm.messages[0].text(), DEFAULT_PROMPT);
    assert!(!template.llm.run_on_config);
    assert_eq!(template.tts.service, "cartesia");
    assert_eq!(template.tts.model, "sonic-english");
    assert_eq!(template.tts.language, "en");
    assert_eq!(template.tts.interaction_mode, InteractionMode::Conversational);
}

#[test]
fn empty_config_is_informational_not_defaulted() {
    let projected = project(&WorkspaceConfig::default());
    assert_eq!(projected.tts.interaction_mode, InteractionMode::Informational);
}

#[rstest]
#[case(Some(json!({"filter_code": false, "filter_tables": false})), InteractionMode::Conversational)]
#[case(Some(json!({"filter_tables": false, "filter_code": false})), InteractionMode::Conversational)]
#[case(Some(json!({"filter_code": true, "filter_tables": false})), InteractionMode::Informational)]
#[case(Some(json!({"filter_code": false})), InteractionMode::Informational)]
#[case(Some(json!({"filter_code": false, "filter_tables": false, "extra": 1})), InteractionMode::Informational)]
#[case(Some(json!(false)), InteractionMode::Informational)]
#[case(None, InteractionMode::Informational)]
fn interaction_mode_follows_text_filter(
    #[case] filter: Option<serde_json::Value>,
    #[case] expected: InteractionMode,
) {
    let projected = project(&tts_with_filter(filter));
    assert_eq!(projected.tts.interaction_mode, expected);
}

#[test]
fn stored_interaction_mode_is_ignored() {
    let mut config = tts_with_filter(None);
    config.interaction_mode = Some(InteractionMode::Conversational);
    assert_eq!(
        project(&config).tts.interaction_mode,
        InteractionMode::Informational
    );
}

#[test]
fn api_key_resolves_through_selected_provider() {
    let config = config_from(json!({
        "services": {"llm": "openai"},
        "api_keys": {"openai": "sk-123", "cartesia": "ct-1"}
    }));
    let projected = project(&config);
    assert_eq!(projected.llm.api_key.as_deref(), Some("sk-123"));
    // tts provider not set explicitly: the default provider doesn't count
    assert_eq!(projected.tts.api_key, None);
    assert_eq!(projected.api_keys.len(), 2);
}

#[test]
fn api_key_absent_without_service_entry() {
    let config = config_from(json!({
        "services": {},
        "api_keys": {"openai": "sk-123", "anthropic": "sk-ant"}
    }));
    assert_eq!(project(&config).llm.api_key, None);
}

#[test]
fn unknown_model_uses_raw_id_as_label() {
    let config = config_from(json!({
        "config": [{"service": "llm", "options": [{"name": "model", "value": "unknown-model-id"}]}]
    }));
    let model = project(&config).llm.model;
    assert_eq!(model.value, "unknown-model-id");
    assert_eq!(model.label, "unknown-model-id");
}

#[test]
fn known_model_uses_catalog_label() {
    let config = config_from(json!({
        "services": {"llm": "together"},
        "config": [{"service": "llm", "options": [
            {"name": "model", "value": "meta-llama/Meta-Llama-3.1-70B-Instruct-Turbo"}
        ]}]
    }));
    let projected = project(&config);
    assert_eq!(projected.llm.service, "together");
    assert_eq!(projected.llm.model.label, "Llama 3.1 70B");
}

#[test]
fn mistyped_options_fall_back_to_defaults() {
    let config = config_from(json!({
        "config": [
            {"service": "llm", "options": [
                {"name": "model", "value": 42},
                {"name": "run_on_config", "value": "yes"}
            ]},
            {"service": "tts", "options": [{"name": "voice", "value": null}]}
        ]
    }));
    let projected = project(&config);
    let template = project(&default_workspace_config());
    assert_eq!(projected.llm.model, template.llm.model);
    assert_eq!(projected.llm.run_on_config, template.llm.run_on_config);
    assert_eq!(projected.tts.voice, template.tts.voice);
}

#[test]
fn explicit_values_win_over_defaults() {
    let config = config_from(json!({
        "services": {"llm": "groq", "tts": "elevenlabs"},
        "default_llm_context": [],
        "config": [
            {"service": "llm", "options": [
                {"name": "model", "value": "llama-3.1-8b-instant"},
                {"name": "run_on_config", "value": true}
            ]},
            {"service": "tts", "options": [
                {"name": "voice", "value": "Xb7hH8MSUJpSbSDYk0k2"},
                {"name": "model", "value": "eleven_turbo_v2_5"},
                {"name": "language", "value": "de"}
            ]}
        ]
    }));
    let projected = project(&config);
    assert_eq!(projected.llm.service, "groq");
    assert_eq!(projected.llm.model.label, "Llama 3.1 8B");
    assert!(projected.llm.run_on_config);
    // an explicit empty context is kept empty
    assert!(projected.llm.messages.is_empty());
    assert_eq!(projected.tts.service, "elevenlabs");
    assert_eq!(projected.tts.voice, "Xb7hH8MSUJpSbSDYk0k2");
    assert_eq!(projected.tts.model, "eleven_turbo_v2_5");
    assert_eq!(projected.tts.language, "de");
}

#[test]
fn disabled_fallback_leaves_fields_empty() {
    let config = WorkspaceConfig {
        config: Some(vec![ServiceConfig::new("tts").with_option("language", "fr")]),
        ..Default::default()
    };
    let projected = project_with(&config, Fallback::Disabled);
    assert_eq!(projected.tts.language, "fr");
    assert_eq!(projected.tts.voice, "");
    assert_eq!(projected.llm.service, "");
    assert_eq!(projected.llm.model.value, "");
    assert!(projected.llm.messages.is_empty());
}
