use crate::{
    AdminConfig, AuthConfig, CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for PMS_CONFIG_DIR env var, else use ./.pms/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PMS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PMS_CONFIG_DIR env var > ./.pms/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.admin.validate()?;
        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Resolved log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        Ok(self.logging.file_path(&Self::config_dir()?))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (pool {})",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: {} (token ttl {}s)",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.auth.token_ttl_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
        if let Some(rejected) = self.logging.level.rejected() {
            warn!(
                "  logging.level '{}' is not one of off|error|warn|info|debug|trace; using {}",
                rejected, *self.logging.level
            );
        }
        info!(
            "  admin seed: {} ({})",
            if self.admin.seed { "on" } else { "off" },
            self.admin.email
        );

        if self.admin.seed && self.admin.uses_default_password() {
            warn!("  admin seed uses the default password; set admin.password or PMS_ADMIN_PASSWORD");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server. Bare PORT is honored for hosting platforms; PMS_SERVER_PORT wins.
        Self::apply_env_string("PMS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PORT", &mut self.server.port);
        Self::apply_env_parse("PMS_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("PMS_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "PMS_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_bool("PMS_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("PMS_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("PMS_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Logging
        Self::apply_env_parse("PMS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PMS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PMS_LOG_FILE", &mut self.logging.file);

        // Admin seed
        Self::apply_env_bool("PMS_ADMIN_SEED", &mut self.admin.seed);
        Self::apply_env_string("PMS_ADMIN_NAME", &mut self.admin.name);
        Self::apply_env_string("PMS_ADMIN_EMPLOYEE_CODE", &mut self.admin.employee_code);
        Self::apply_env_string("PMS_ADMIN_EMAIL", &mut self.admin.email);
        Self::apply_env_string("PMS_ADMIN_PASSWORD", &mut self.admin.password);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
