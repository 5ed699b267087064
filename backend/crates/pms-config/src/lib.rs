mod admin_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use admin_config::AdminConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "PMS_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".pms";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3008;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "pms.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

pub const DEFAULT_ADMIN_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_EMPLOYEE_CODE: &str = "ADMIN001";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin@123";

#[cfg(test)]
mod tests;
