use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_EMPLOYEE_CODE,
    DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD,
};

use serde::Deserialize;

/// Administrator account created at startup when no user has its email.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub seed: bool,
    pub name: String,
    pub employee_code: String,
    pub email: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            seed: true,
            name: String::from(DEFAULT_ADMIN_NAME),
            employee_code: String::from(DEFAULT_ADMIN_EMPLOYEE_CODE),
            email: String::from(DEFAULT_ADMIN_EMAIL),
            password: String::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

impl AdminConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.seed {
            return Ok(());
        }

        for (field, value) in [
            ("admin.name", &self.name),
            ("admin.employee_code", &self.employee_code),
            ("admin.email", &self.email),
            ("admin.password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::admin(format!("{field} cannot be empty")));
            }
        }

        if !self.email.contains('@') {
            return Err(ConfigError::admin(format!(
                "admin.email '{}' is not an email address",
                self.email
            )));
        }

        Ok(())
    }

    pub fn uses_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }
}
