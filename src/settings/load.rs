use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::error::SettingsError;
use super::types::Settings;

/// Mode for the settings file: it holds the backend secret and provider keys.
#[cfg(unix)]
const OWNER_ONLY: u32 = 0o600;

/// Parsed settings file, or `None` if there is none yet.
pub(super) fn read_settings(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(toml::from_str(&contents)?))
}

/// Creates the directory the settings file lives in.
pub(super) fn ensure_parent(path: &Path) -> Result<(), SettingsError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(fs::create_dir_all(dir)?),
        _ => Ok(()),
    }
}

/// Restricts `path` to its owner. Returns whether the mode was changed; a
/// missing file is left alone.
pub(super) fn restrict_to_owner(path: &Path) -> Result<bool, SettingsError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err.into()),
        };
        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 == 0 {
            return Ok(false);
        }
        fs::set_permissions(path, fs::Permissions::from_mode(OWNER_ONLY))?;
        log::info!(
            "restricted {} from {mode:o} to {OWNER_ONLY:o}",
            path.display()
        );
        Ok(true)
    }
    #[cfg(not(unix))]
    {
        let _ = path;
        Ok(false)
    }
}
