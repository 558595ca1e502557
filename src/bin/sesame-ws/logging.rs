use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use flexi_logger::{
    detailed_format, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
};
use sesame_workspace::settings::{LoggingConfig, SettingsPaths};

const DEFAULT_BASENAME: &str = "sesame-ws";

/// Directory and file basename for the rotating log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub directory: PathBuf,
    pub basename: String,
}

impl LogTarget {
    /// `logging.path` may be absolute or relative to the logs directory; a
    /// blank path means the default file.
    pub fn from_settings(config: &LoggingConfig, paths: &SettingsPaths) -> Self {
        let Some(raw) = config.path.as_deref().filter(|p| !p.trim().is_empty()) else {
            return Self {
                directory: paths.logs_dir.clone(),
                basename: DEFAULT_BASENAME.to_string(),
            };
        };
        let path = Path::new(raw);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            paths.logs_dir.join(path)
        };
        Self {
            directory: path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| paths.logs_dir.clone()),
            basename: path
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_BASENAME)
                .to_string(),
        }
    }

    fn file_spec(&self) -> FileSpec {
        FileSpec::default()
            .directory(&self.directory)
            .basename(&self.basename)
            .suppress_timestamp()
    }
}

/// Starts file logging. Warnings are also echoed to stderr. The returned
/// handle must be held until exit.
pub fn init_logging(config: &LoggingConfig, paths: &SettingsPaths) -> anyhow::Result<LoggerHandle> {
    let target = LogTarget::from_settings(config, paths);
    fs::create_dir_all(&target.directory)
        .with_context(|| format!("cannot create log directory {}", target.directory.display()))?;
    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(target.file_spec())
        .format_for_files(detailed_format)
        .duplicate_to_stderr(Duplicate::Warn)
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    log::info!(
        "sesame-ws {} logging to {}/{}",
        env!("CARGO_PKG_VERSION"),
        target.directory.display(),
        target.basename
    );
    Ok(handle)
}
