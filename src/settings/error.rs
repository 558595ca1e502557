use std::io;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings IO error: {0}")]
    Io(#[from] io::Error),
    #[error("settings parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("settings serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("missing home directory for settings paths")]
    MissingHome,
    #[error("unknown setting: {0}")]
    UnknownKey(String),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
