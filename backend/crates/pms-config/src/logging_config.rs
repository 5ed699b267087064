use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, LogLevel};

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored stdout output; ignored when `file` is set
    pub colored: bool,
    /// Append logs to this file instead of stdout
    pub file: Option<String>,
    /// Directory for relative `file` values, under the config dir
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: true,
            file: None,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty when set"));
        }
        Ok(())
    }

    /// Resolve the log file path, if file logging is configured.
    pub fn file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.file.as_ref().map(|file| {
            let path = Path::new(file);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                config_dir.join(&self.dir).join(path)
            }
        })
    }
}
