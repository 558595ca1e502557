//! Workspace configuration for Sesame voice-assistant clients.
//!
//! A workspace carries a loosely-typed config document (a list of per-service
//! option lists plus provider and API-key maps). This crate decodes that
//! document, projects it into the flat view settings screens display, merges
//! edits back into a complete config for saving, and talks to the backend's
//! workspace endpoints.
//!
//! ```
//! use sesame_workspace::{project, WorkspaceEdit, default_workspace_config, InteractionMode};
//!
//! let config = default_workspace_config();
//! let edited = WorkspaceEdit::new()
//!     .interaction_mode(InteractionMode::Informational)
//!     .apply(&config);
//! assert_eq!(project(&edited).tts.interaction_mode, InteractionMode::Informational);
//! ```

pub mod backend;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod settings;
pub mod structured;
pub mod value;

pub use backend::{
    create_workspace_from_template, save_workspace, ConversationBackend, HttpWorkspaceClient,
    WorkspaceBackend,
};
pub use config::{
    default_workspace_config, find_option, find_service, InteractionMode, SeedMessage,
    ServiceConfig, ServiceOption, WorkspaceConfig,
};
pub use editor::WorkspaceEdit;
pub use error::WorkspaceError;
pub use models::{WorkspaceModel, WorkspaceUpdateModel};
pub use settings::{Settings, SettingsError, SettingsRepository};
pub use structured::{project, project_with, Fallback, StructuredWorkspaceData};
pub use value::OptionValue;

/// Initializes `env_logger` for embedders that don't install their own
/// logger. Safe to call more than once.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
