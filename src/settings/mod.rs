//! Client settings stored as TOML under the user's config directory.
//!
//! A `SettingsRepository` is loaded once and handed to whatever needs it.

mod error;
mod load;
mod paths;
mod save;
mod types;

use std::path::PathBuf;

use uuid::Uuid;

use crate::backend::HttpWorkspaceClient;
use crate::error::WorkspaceError;

pub use error::SettingsError;
pub use paths::SettingsPaths;
pub use types::{LoggingConfig, Settings};

#[derive(Debug)]
pub struct SettingsRepository {
    settings: Settings,
    paths: SettingsPaths,
    exists: bool,
}

impl SettingsRepository {
    /// Reads the settings file, falling back to defaults when it doesn't
    /// exist yet.
    pub fn load(path_override: Option<PathBuf>) -> Result<Self, SettingsError> {
        let paths = SettingsPaths::resolve(path_override)?;
        load::ensure_parent(&paths.settings_file)?;
        let read = load::read_settings(&paths.settings_file)?;
        load::restrict_to_owner(&paths.settings_file)?;
        log::debug!(
            "settings loaded from {} (exists: {})",
            paths.settings_file.display(),
            read.is_some()
        );
        Ok(Self {
            exists: read.is_some(),
            settings: read.unwrap_or_default(),
            paths,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn paths(&self) -> &SettingsPaths {
        &self.paths
    }

    /// Whether the file was present when loaded or has been saved since.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Mutates the in-memory settings. Call `save` to persist.
    pub fn update<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Settings) -> R,
    {
        f(&mut self.settings)
    }

    pub fn set_default_workspace(&mut self, workspace_id: Option<Uuid>) {
        self.settings.default_workspace = workspace_id;
    }

    pub fn save(&mut self) -> Result<(), SettingsError> {
        save::write_settings(&self.settings, &self.paths)?;
        self.exists = true;
        Ok(())
    }

    /// Backend client for the configured server and secret.
    pub fn client(&self) -> Result<HttpWorkspaceClient, WorkspaceError> {
        if self.settings.server_url.trim().is_empty() {
            return Err(WorkspaceError::InvalidRequest(
                "server_url is not set".to_string(),
            ));
        }
        HttpWorkspaceClient::builder()
            .base_url(self.settings.server_url.trim())
            .secret(self.settings.secret.clone())
            .build()
    }
}
