use std::fs;

use super::error::SettingsError;
use super::load::{ensure_parent, restrict_to_owner};
use super::paths::SettingsPaths;
use super::types::Settings;

/// Writes through a sibling temp file so a crash never leaves a truncated
/// settings file, and the keys are never readable by others.
pub(super) fn write_settings(settings: &Settings, paths: &SettingsPaths) -> Result<(), SettingsError> {
    ensure_parent(&paths.settings_file)?;
    let contents = toml::to_string_pretty(settings)?;
    let staging = paths.settings_file.with_extension("toml.tmp");
    fs::write(&staging, contents)?;
    restrict_to_owner(&staging)?;
    fs::rename(&staging, &paths.settings_file)?;
    log::debug!("settings written to {}", paths.settings_file.display());
    Ok(())
}
