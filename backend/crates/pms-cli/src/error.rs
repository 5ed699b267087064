use crate::ClientError;

use pms_auth::AuthError;
use pms_config::ConfigError;
use pms_db::DbError;

use thiserror::Error;

/// Errors from any `pms` command
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type Result<T> = std::result::Result<T, CliError>;
