//! Credentials configuration.
//!
//! Values come from an optional YAML file, overridden by environment
//! variables prefixed with [`ENV_PREFIX`] (`WAPITIA_CRED_PASSWORD_SALT`).

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;

use crate::secret::SecretString;

pub const ENV_PREFIX: &str = "WAPITIA_CRED_";

/// Configuration error for credentials loading
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid credentials config: {0}")]
    Invalid(#[source] Box<figment::Error>),
    #[error("password_salt must not be empty")]
    EmptySalt,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Invalid(Box::new(e))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsConfig {
    /// Salt shared by every password hash of a deployment.
    pub password_salt: SecretString,
}

impl CredentialsConfig {
    /// Load from `path` (when given and present) and the environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when the sources cannot be read or
    /// lack `password_salt`, and [`ConfigError::EmptySalt`] for an empty salt.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        Self::from_figment(&figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract from an already assembled figment.
    ///
    /// # Errors
    /// Same as [`load`](Self::load).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        if config.password_salt.is_empty() {
            return Err(ConfigError::EmptySalt);
        }
        tracing::debug!("credentials config loaded");
        Ok(config)
    }
}
