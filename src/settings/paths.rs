use std::path::PathBuf;

use super::error::SettingsError;

const APP_DIR: &str = "sesame";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    pub settings_file: PathBuf,
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl SettingsPaths {
    /// Resolves the settings location. With an override, logs go to a `logs`
    /// directory next to the given file.
    pub fn resolve(path_override: Option<PathBuf>) -> Result<Self, SettingsError> {
        if let Some(path) = path_override {
            let config_dir = path
                .parent()
                .map(PathBuf::from)
                .ok_or(SettingsError::MissingHome)?;
            return Ok(Self {
                logs_dir: config_dir.join("logs"),
                config_dir,
                settings_file: path,
            });
        }
        let home = dirs::home_dir().ok_or(SettingsError::MissingHome)?;
        let config_dir = home.join(".config").join(APP_DIR);
        Ok(Self {
            settings_file: config_dir.join(SETTINGS_FILE),
            config_dir,
            logs_dir: home.join(".local").join("share").join(APP_DIR).join("logs"),
        })
    }
}
