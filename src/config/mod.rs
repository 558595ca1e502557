//! Raw workspace configuration document, as stored by the backend.

mod defaults;
mod message;
mod service;
mod workspace;

pub use defaults::{
    conversational_text_filter, default_workspace_config, informational_text_filter,
    DEFAULT_PROMPT, DEFAULT_VAD_STOP_SECS,
};
pub use message::{LlmMessageRole, SeedMessage, SeedMessageContent};
pub use service::{find_option, find_service, ServiceConfig, ServiceOption};
pub use workspace::{InteractionMode, WorkspaceConfig};

/// Well-known service slot identifiers.
pub mod service_ids {
    pub const LLM: &str = "llm";
    pub const TTS: &str = "tts";
    pub const STT: &str = "stt";
    pub const VAD: &str = "vad";
    pub const TRANSPORT: &str = "transport";
}

/// Well-known option names.
pub mod option_names {
    pub const MODEL: &str = "model";
    pub const RUN_ON_CONFIG: &str = "run_on_config";
    pub const VOICE: &str = "voice";
    pub const LANGUAGE: &str = "language";
    pub const TEXT_FILTER: &str = "text_filter";
    pub const PARAMS: &str = "params";
}
