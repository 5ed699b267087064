use thiserror::Error;

/// Failures that stop the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pms_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] pms_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] pms_auth::AuthError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
