use crate::domain::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Connection settings for the Keycloak admin API and the realm the
/// directory works against
#[derive(Clone, Serialize, Deserialize)]
pub struct KeycloakConfig {
    pub url: String,
    pub admin_realm: String,
    pub admin_client_id: String,
    pub admin_username: String,
    pub admin_password: String,
    /// Realm holding the directory's users
    pub realm: String,
}

impl KeycloakConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            url: env_or("KEYCLOAK_URL", "http://localhost:8080"),
            admin_realm: env_or("KEYCLOAK_ADMIN_REALM", "master"),
            admin_client_id: env_or("KEYCLOAK_ADMIN_CLIENT_ID", "admin-cli"),
            admin_username: env_or("KEYCLOAK_ADMIN_USERNAME", "admin"),
            admin_password: required("KEYCLOAK_ADMIN_PASSWORD")?,
            realm: required("KEYCLOAK_REALM")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "KEYCLOAK_URL".to_string(),
            });
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "KEYCLOAK_URL".to_string(),
                message: "Must start with http:// or https://".to_string(),
            });
        }

        for (key, value) in [
            ("KEYCLOAK_ADMIN_REALM", &self.admin_realm),
            ("KEYCLOAK_ADMIN_CLIENT_ID", &self.admin_client_id),
            ("KEYCLOAK_ADMIN_USERNAME", &self.admin_username),
            ("KEYCLOAK_ADMIN_PASSWORD", &self.admin_password),
            ("KEYCLOAK_REALM", &self.realm),
        ] {
            if value.is_empty() {
                return Err(ConfigError::MissingRequired {
                    key: key.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl std::fmt::Debug for KeycloakConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeycloakConfig")
            .field("url", &self.url)
            .field("admin_realm", &self.admin_realm)
            .field("admin_client_id", &self.admin_client_id)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"[REDACTED]")
            .field("realm", &self.realm)
            .finish()
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingRequired {
        key: key.to_string(),
    })
}
