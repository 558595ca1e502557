//! Merge-on-save: turning the fields a settings screen changed into a
//! complete workspace config.
//!
//! The backend replaces the whole config document on update, so an edit is
//! always applied on top of the previously loaded config. Services and
//! options the edit doesn't name are copied through unchanged.

use std::collections::BTreeMap;

use crate::catalog::{stt_provider, tts_provider};
use crate::config::{
    conversational_text_filter, default_workspace_config, informational_text_filter,
    option_names, service_ids, InteractionMode, SeedMessage, WorkspaceConfig,
};
use crate::structured::StructuredWorkspaceData;
use crate::value::OptionValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LlmEdit {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub run_on_config: Option<bool>,
}

/// Changes to the `tts` service.
///
/// When the provider or language changes and no model is given, the model is
/// looked up in the catalog for the resulting provider and language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TtsEdit {
    pub provider: Option<String>,
    pub voice: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub interaction_mode: Option<InteractionMode>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SttEdit {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
}

/// A set of user edits to a workspace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceEdit {
    pub title: Option<String>,
    pub llm: Option<LlmEdit>,
    pub prompt: Option<Vec<SeedMessage>>,
    pub tts: Option<TtsEdit>,
    pub stt: Option<SttEdit>,
    /// Provider to key; `None` removes the key.
    pub api_keys: BTreeMap<String, Option<String>>,
}

impl WorkspaceEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn llm_provider(mut self, provider: impl Into<String>) -> Self {
        self.llm.get_or_insert_with(LlmEdit::default).provider = Some(provider.into());
        self
    }

    pub fn llm_model(mut self, model: impl Into<String>) -> Self {
        self.llm.get_or_insert_with(LlmEdit::default).model = Some(model.into());
        self
    }

    pub fn run_on_config(mut self, run_on_config: bool) -> Self {
        self.llm.get_or_insert_with(LlmEdit::default).run_on_config = Some(run_on_config);
        self
    }

    pub fn prompt(mut self, messages: Vec<SeedMessage>) -> Self {
        self.prompt = Some(messages);
        self
    }

    pub fn tts_provider(mut self, provider: impl Into<String>) -> Self {
        self.tts.get_or_insert_with(TtsEdit::default).provider = Some(provider.into());
        self
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.tts.get_or_insert_with(TtsEdit::default).voice = Some(voice.into());
        self
    }

    pub fn tts_model(mut self, model: impl Into<String>) -> Self {
        self.tts.get_or_insert_with(TtsEdit::default).model = Some(model.into());
        self
    }

    pub fn tts_language(mut self, language: impl Into<String>) -> Self {
        self.tts.get_or_insert_with(TtsEdit::default).language = Some(language.into());
        self
    }

    pub fn interaction_mode(mut self, mode: InteractionMode) -> Self {
        self.tts.get_or_insert_with(TtsEdit::default).interaction_mode = Some(mode);
        self
    }

    pub fn stt_model(mut self, model: impl Into<String>) -> Self {
        self.stt.get_or_insert_with(SttEdit::default).model = Some(model.into());
        self
    }

    /// Sets the language on both the TTS and STT services.
    pub fn main_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.stt.get_or_insert_with(SttEdit::default).language = Some(language.clone());
        self.tts_language(language)
    }

    pub fn api_key(mut self, provider: impl Into<String>, key: impl Into<String>) -> Self {
        self.api_keys.insert(provider.into(), Some(key.into()));
        self
    }

    pub fn remove_api_key(mut self, provider: impl Into<String>) -> Self {
        self.api_keys.insert(provider.into(), None);
        self
    }

    /// Edit that sets every field of a structured view explicitly.
    pub fn from_structured(data: &StructuredWorkspaceData) -> Self {
        let edit = Self {
            llm: Some(LlmEdit {
                provider: Some(data.llm.service.clone()),
                model: Some(data.llm.model.value.clone()),
                run_on_config: Some(data.llm.run_on_config),
            }),
            prompt: Some(data.llm.messages.clone()),
            tts: Some(TtsEdit {
                provider: Some(data.tts.service.clone()),
                voice: Some(data.tts.voice.clone()),
                model: Some(data.tts.model.clone()),
                language: Some(data.tts.language.clone()),
                interaction_mode: Some(data.tts.interaction_mode),
            }),
            ..Self::default()
        };
        data.api_keys
            .iter()
            .fold(edit, |edit, (provider, key)| edit.api_key(provider, key))
    }

    /// Applies the edit on top of `previous`, returning the complete config
    /// to send to the backend.
    pub fn apply(&self, previous: &WorkspaceConfig) -> WorkspaceConfig {
        let mut next = previous.clone();

        if let Some(llm) = &self.llm {
            apply_llm(&mut next, llm);
        }
        if let Some(messages) = &self.prompt {
            next.default_llm_context = Some(messages.clone());
        }
        if let Some(tts) = &self.tts {
            apply_tts(&mut next, tts);
        }
        if let Some(stt) = &self.stt {
            apply_stt(&mut next, stt);
        }
        if !self.api_keys.is_empty() {
            let keys = next.api_keys.get_or_insert_with(BTreeMap::new);
            for (provider, key) in &self.api_keys {
                match key {
                    Some(key) => {
                        keys.insert(provider.clone(), key.clone());
                    }
                    None => {
                        keys.remove(provider);
                    }
                }
            }
        }

        log::debug!(
            "applied workspace edit (llm: {}, prompt: {}, tts: {}, stt: {}, api keys: {})",
            self.llm.is_some(),
            self.prompt.is_some(),
            self.tts.is_some(),
            self.stt.is_some(),
            self.api_keys.len()
        );
        next
    }
}

impl StructuredWorkspaceData {
    /// Raw config that projects back to this view, built on the default
    /// template.
    ///
    /// A view without an API key must not gain one through the template's
    /// provider entry. When the view's provider is the template's own, that
    /// entry is dropped instead; projection falls back to the same provider.
    pub fn to_config(&self) -> WorkspaceConfig {
        let template = default_workspace_config();
        let mut config = WorkspaceEdit::from_structured(self).apply(&template);
        for (service_type, service, api_key) in [
            (service_ids::LLM, &self.llm.service, &self.llm.api_key),
            (service_ids::TTS, &self.tts.service, &self.tts.api_key),
        ] {
            if api_key.is_none()
                && template.provider(service_type) == Some(service.as_str())
                && config.api_key_for(service_type).is_some()
            {
                config.clear_provider(service_type);
            }
        }
        config
    }
}

fn apply_llm(config: &mut WorkspaceConfig, edit: &LlmEdit) {
    if let Some(provider) = &edit.provider {
        config.set_provider(service_ids::LLM, provider.as_str());
    }
    if edit.model.is_none() && edit.run_on_config.is_none() {
        return;
    }
    let service = config.service_mut_or_insert(service_ids::LLM);
    if let Some(model) = &edit.model {
        service.set_option(option_names::MODEL, model.as_str());
    }
    if let Some(run_on_config) = edit.run_on_config {
        service.set_option(option_names::RUN_ON_CONFIG, run_on_config);
    }
}

fn apply_tts(config: &mut WorkspaceConfig, edit: &TtsEdit) {
    if let Some(provider) = &edit.provider {
        config.set_provider(service_ids::TTS, provider.as_str());
    }

    let model = match &edit.model {
        Some(model) => Some(model.clone()),
        None if edit.provider.is_some() || edit.language.is_some() => {
            let provider = current_provider(config, service_ids::TTS);
            let language = edit
                .language
                .clone()
                .or_else(|| current_string(config, service_ids::TTS, option_names::LANGUAGE));
            let resolved = language.as_deref().and_then(|language| {
                tts_provider(&provider)
                    .and_then(|p| p.language(language))
                    .map(|l| l.model.to_string())
            });
            if resolved.is_none() {
                log::warn!(
                    "no TTS model for provider {provider} and language {language:?}, keeping previous model"
                );
            }
            resolved
        }
        None => None,
    };

    if let Some(mode) = edit.interaction_mode {
        config.interaction_mode = Some(mode);
    }

    let service = config.service_mut_or_insert(service_ids::TTS);
    if let Some(voice) = &edit.voice {
        service.set_option(option_names::VOICE, voice.as_str());
    }
    if let Some(model) = model {
        service.set_option(option_names::MODEL, model);
    }
    if let Some(language) = &edit.language {
        service.set_option(option_names::LANGUAGE, language.as_str());
    }
    if let Some(mode) = edit.interaction_mode {
        service.set_option(option_names::TEXT_FILTER, text_filter_for(mode));
    }
}

fn apply_stt(config: &mut WorkspaceConfig, edit: &SttEdit) {
    if let Some(provider) = &edit.provider {
        config.set_provider(service_ids::STT, provider.as_str());
    }

    let model = match &edit.model {
        Some(model) => Some(model.clone()),
        None if edit.provider.is_some() || edit.language.is_some() => {
            let provider = current_provider(config, service_ids::STT);
            let language = edit
                .language
                .clone()
                .or_else(|| current_string(config, service_ids::STT, option_names::LANGUAGE));
            let resolved = language.as_deref().and_then(|language| {
                stt_provider(&provider)
                    .and_then(|p| p.model_for(language))
                    .map(str::to_string)
            });
            if resolved.is_none() {
                log::warn!(
                    "no STT model for provider {provider} and language {language:?}, keeping previous model"
                );
            }
            resolved
        }
        None => None,
    };

    let service = config.service_mut_or_insert(service_ids::STT);
    if let Some(model) = model {
        service.set_option(option_names::MODEL, model);
    }
    if let Some(language) = &edit.language {
        service.set_option(option_names::LANGUAGE, language.as_str());
    }
}

/// `text_filter` value encoding an interaction mode.
pub fn text_filter_for(mode: InteractionMode) -> OptionValue {
    match mode {
        InteractionMode::Conversational => conversational_text_filter(),
        InteractionMode::Informational => informational_text_filter(),
    }
}

fn current_provider(config: &WorkspaceConfig, service_type: &str) -> String {
    config
        .provider(service_type)
        .map(str::to_string)
        .or_else(|| default_workspace_config().provider(service_type).map(str::to_string))
        .unwrap_or_default()
}

fn current_string(config: &WorkspaceConfig, service: &str, name: &str) -> Option<String> {
    config
        .option(service, name)
        .and_then(OptionValue::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests;
