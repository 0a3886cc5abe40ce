use directory_domain::{application::ports::KeycloakConfig, domain::errors::ConfigError};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub keycloak: KeycloakConfig,
    pub port: u16,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "3000".into());
        let port = port.parse().map_err(|_| ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: format!("'{port}' is not a valid port number"),
        })?;

        Ok(Self {
            keycloak: KeycloakConfig::from_env()?,
            port,
            api_key: env::var("API_KEY").ok().filter(|key| !key.is_empty()),
        })
    }
}
