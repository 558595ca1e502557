use super::*;
use crate::config::ServiceConfig;
use crate::structured::project;
use proptest::prelude::*;
use serde_json::json;

fn loaded_config() -> WorkspaceConfig {
    serde_json::from_value(json!({
        "services": {"llm": "openai", "tts": "cartesia", "stt": "deepgram"},
        "api_keys": {"openai": "sk-123"},
        "default_llm_context": [
            {"content": {"role": "system", "content": "Be terse."}, "extra_metadata": null}
        ],
        "config": [
            {"service": "vad", "options": [{"name": "params", "value": {"stop_secs": 0.8, "min_volume": 0.6}}]},
            {"service": "tts", "options": [
                {"name": "voice", "value": "79a125e8-cd45-4c13-8a67-188112f4dd22"},
                {"name": "model", "value": "sonic-english"},
                {"name": "language", "value": "en"},
                {"name": "text_filter", "value": {"filter_code": false, "filter_tables": false}}
            ]},
            {"service": "llm", "options": [
                {"name": "model", "value": "gpt-4o"},
                {"name": "run_on_config", "value": true},
                {"name": "temperature", "value": 0.2}
            ]},
            {"service": "stt", "options": [
                {"name": "model", "value": "nova-2-conversationalai"},
                {"name": "language", "value": "en"},
                {"name": "endpointing", "value": 250}
            ]}
        ]
    }))
    .unwrap()
}

fn service_json(config: &WorkspaceConfig, id: &str) -> String {
    serde_json::to_string(config.service(id).unwrap()).unwrap()
}

#[test]
fn tts_edit_preserves_other_services_verbatim() {
    let previous = loaded_config();
    let next = WorkspaceEdit::new()
        .voice("156fb8d2-335b-4950-9cb3-a2d33befec77")
        .interaction_mode(InteractionMode::Informational)
        .apply(&previous);

    let ids: Vec<_> = next
        .config
        .as_ref()
        .unwrap()
        .iter()
        .map(|s| s.service.as_str())
        .collect();
    assert_eq!(ids, ["vad", "tts", "llm", "stt"]);
    for id in ["vad", "llm", "stt"] {
        assert_eq!(service_json(&next, id), service_json(&previous, id));
    }
    assert_eq!(next.services, previous.services);
    assert_eq!(next.api_keys, previous.api_keys);
    assert_eq!(next.default_llm_context, previous.default_llm_context);

    let structured = project(&next);
    assert_eq!(structured.tts.voice, "156fb8d2-335b-4950-9cb3-a2d33befec77");
    assert_eq!(structured.tts.model, "sonic-english");
    assert_eq!(structured.tts.interaction_mode, InteractionMode::Informational);
    assert_eq!(next.interaction_mode, Some(InteractionMode::Informational));
}

#[test]
fn edited_option_keeps_its_position() {
    let next = WorkspaceEdit::new()
        .llm_model("gpt-4o-mini")
        .apply(&loaded_config());
    let llm = next.service("llm").unwrap();
    let names: Vec<_> = llm.options.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["model", "run_on_config", "temperature"]);
    assert_eq!(project(&next).llm.model.label, "gpt-4o mini");
}

#[test]
fn empty_edit_is_identity() {
    let previous = loaded_config();
    let edit = WorkspaceEdit::new();
    assert!(edit.is_empty());
    assert_eq!(edit.apply(&previous), previous);
}

#[test]
fn missing_services_are_appended() {
    let previous = WorkspaceConfig {
        config: Some(vec![ServiceConfig::new("vad")]),
        ..Default::default()
    };
    let next = WorkspaceEdit::new()
        .llm_model("gpt-4o")
        .run_on_config(true)
        .apply(&previous);
    let list = next.config.unwrap();
    assert_eq!(list[0], ServiceConfig::new("vad"));
    assert_eq!(list[1].service, "llm");
    assert_eq!(list[1].options.len(), 2);
}

#[test]
fn main_language_updates_tts_and_stt_models() {
    let next = WorkspaceEdit::new()
        .main_language("fr")
        .voice("a8a1eb38-5f15-4c1d-8722-7ac0f329727d")
        .apply(&loaded_config());
    assert_eq!(
        next.option("tts", "model").and_then(OptionValue::as_str),
        Some("sonic-multilingual")
    );
    assert_eq!(
        next.option("stt", "model").and_then(OptionValue::as_str),
        Some("nova-2-general")
    );
    assert_eq!(
        next.option("stt", "language").and_then(OptionValue::as_str),
        Some("fr")
    );
    // unrelated stt option is untouched
    assert_eq!(
        next.option("stt", "endpointing").and_then(OptionValue::as_i64),
        Some(250)
    );
}

#[test]
fn provider_switch_resolves_model_for_current_language() {
    let next = WorkspaceEdit::new()
        .tts_provider("elevenlabs")
        .voice("Xb7hH8MSUJpSbSDYk0k2")
        .apply(&loaded_config());
    assert_eq!(next.provider("tts"), Some("elevenlabs"));
    assert_eq!(
        next.option("tts", "model").and_then(OptionValue::as_str),
        Some("eleven_turbo_v2_5")
    );
}

#[test]
fn unresolvable_model_keeps_previous() {
    let next = WorkspaceEdit::new()
        .tts_language("ja")
        .apply(&loaded_config());
    assert_eq!(
        next.option("tts", "model").and_then(OptionValue::as_str),
        Some("sonic-english")
    );
    assert_eq!(
        next.option("tts", "language").and_then(OptionValue::as_str),
        Some("ja")
    );
}

#[test]
fn explicit_model_wins_over_catalog() {
    let next = WorkspaceEdit::new()
        .tts_language("es")
        .tts_model("sonic-preview")
        .apply(&loaded_config());
    assert_eq!(
        next.option("tts", "model").and_then(OptionValue::as_str),
        Some("sonic-preview")
    );
}

#[test]
fn api_key_edits_merge_into_existing_map() {
    let next = WorkspaceEdit::new()
        .api_key("cartesia", "ct-1")
        .remove_api_key("openai")
        .apply(&loaded_config());
    let keys = next.api_keys.unwrap();
    assert_eq!(keys.get("cartesia").map(String::as_str), Some("ct-1"));
    assert!(!keys.contains_key("openai"));
}

#[test]
fn interaction_mode_round_trips_through_text_filter() {
    for mode in [InteractionMode::Conversational, InteractionMode::Informational] {
        let next = WorkspaceEdit::new()
            .interaction_mode(mode)
            .apply(&WorkspaceConfig::default());
        assert_eq!(project(&next).tts.interaction_mode, mode);
    }
}

#[test]
fn structured_view_round_trips_through_raw_config() {
    let structured = project(&loaded_config());
    let rebuilt = structured.to_config();
    assert_eq!(project(&rebuilt), structured);
    // stt and vad come from the template when rebuilding
    assert!(rebuilt.service("vad").is_some());
    assert!(rebuilt.service("stt").is_some());
}

#[test]
fn keys_without_provider_entries_stay_unresolved_after_rebuild() {
    let config: WorkspaceConfig = serde_json::from_value(json!({
        "api_keys": {"anthropic": "sk-ant", "cartesia": "ct-1"}
    }))
    .unwrap();
    let structured = project(&config);
    assert_eq!(structured.llm.api_key, None);
    assert_eq!(structured.tts.api_key, None);

    let rebuilt = structured.to_config();
    assert_eq!(rebuilt.provider("llm"), None);
    assert_eq!(rebuilt.provider("tts"), None);
    assert_eq!(project(&rebuilt), structured);
}

#[test]
fn rebuild_keeps_provider_entries_that_resolve_keys() {
    let config: WorkspaceConfig = serde_json::from_value(json!({
        "services": {"llm": "anthropic"},
        "api_keys": {"anthropic": "sk-ant", "cartesia": "ct-1"}
    }))
    .unwrap();
    let structured = project(&config);
    let rebuilt = structured.to_config();
    assert_eq!(rebuilt.provider("llm"), Some("anthropic"));
    assert_eq!(rebuilt.provider("tts"), None);
    assert_eq!(project(&rebuilt), structured);
}

#[test]
fn unknown_model_survives_round_trip() {
    let previous = WorkspaceEdit::new()
        .llm_provider("openai")
        .llm_model("unknown-model-id")
        .apply(&loaded_config());
    let structured = project(&previous);
    assert_eq!(project(&structured.to_config()), structured);
}

fn arb_text_filter() -> impl Strategy<Value = Option<serde_json::Value>> {
    prop_oneof![
        Just(None),
        Just(Some(json!({"filter_code": false, "filter_tables": false}))),
        (any::<bool>(), any::<bool>())
            .prop_map(|(code, tables)| Some(json!({"filter_code": code, "filter_tables": tables}))),
        "[a-z]{0,6}".prop_map(|s| Some(json!(s))),
    ]
}

prop_compose! {
    fn arb_config()(
        llm_provider in prop::option::of(prop_oneof![Just("anthropic".to_string()), "[a-z]{3,10}"]),
        tts_provider in prop::option::of(prop_oneof![
            Just("cartesia".to_string()),
            Just("elevenlabs".to_string()),
            "[a-z]{3,8}"
        ]),
        model in prop::option::of("[a-z0-9./-]{1,24}"),
        run_on_config in prop::option::of(any::<bool>()),
        voice in prop::option::of("[A-Za-z0-9-]{1,36}"),
        tts_model in prop::option::of("[a-z_-]{1,16}"),
        language in prop::option::of("[a-z]{2}"),
        text_filter in arb_text_filter(),
        api_keys in prop::collection::btree_map(
            prop_oneof![
                Just("anthropic".to_string()),
                Just("cartesia".to_string()),
                "[a-z]{3,10}"
            ],
            "[a-z0-9-]{4,12}",
            0..3,
        ),
        prompt in prop::option::of(prop::collection::vec("[ -~]{0,40}", 0..3)),
    ) -> WorkspaceConfig {
        let mut tts = ServiceConfig::new("tts");
        if let Some(voice) = voice { tts.set_option("voice", voice); }
        if let Some(tts_model) = tts_model { tts.set_option("model", tts_model); }
        if let Some(language) = language { tts.set_option("language", language); }
        if let Some(filter) = text_filter { tts.set_option("text_filter", OptionValue::from(filter)); }

        let mut llm = ServiceConfig::new("llm");
        if let Some(model) = model { llm.set_option("model", model); }
        if let Some(run_on_config) = run_on_config { llm.set_option("run_on_config", run_on_config); }

        let mut config = WorkspaceConfig {
            config: Some(vec![ServiceConfig::new("vad"), tts, llm]),
            api_keys: Some(api_keys),
            default_llm_context: prompt
                .map(|texts| texts.into_iter().map(SeedMessage::system).collect()),
            ..Default::default()
        };
        if let Some(provider) = llm_provider { config.set_provider("llm", provider); }
        if let Some(provider) = tts_provider { config.set_provider("tts", provider); }
        config
    }
}

proptest! {
    #[test]
    fn projection_survives_rebuild(config in arb_config()) {
        let structured = project(&config);
        prop_assert_eq!(project(&structured.to_config()), structured);
    }

    #[test]
    fn tts_only_edits_never_touch_other_services(
        config in arb_config(),
        voice in "[a-z0-9-]{1,12}",
        conversational in any::<bool>(),
    ) {
        let mode = if conversational {
            InteractionMode::Conversational
        } else {
            InteractionMode::Informational
        };
        let next = WorkspaceEdit::new().voice(voice).interaction_mode(mode).apply(&config);
        prop_assert_eq!(next.service("vad"), config.service("vad"));
        prop_assert_eq!(next.service("llm"), config.service("llm"));
        prop_assert_eq!(next.config.as_ref().map(Vec::len), config.config.as_ref().map(Vec::len));
    }
}
