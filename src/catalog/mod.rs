//! Compiled-in catalog of supported providers, models, languages and voices.
//!
//! The catalog is read-only and only consulted for display labels and for
//! resolving dependent options (e.g. the TTS model for a language) when a
//! workspace is edited.

mod language;
mod llm;
mod stt;
mod tts;

pub use language::{language, Language, LANGUAGES};
pub use llm::{default_llm_model, llm_model, llm_models_for, llm_providers, LlmModel, LLM_MODELS};
pub use stt::{default_stt_provider, stt_provider, SttLanguage, SttProvider, STT_PROVIDERS};
pub use tts::{
    default_voice, find_voice, tts_provider, DefaultVoice, TtsLanguage, TtsProvider, Voice,
    TTS_PROVIDERS,
};
