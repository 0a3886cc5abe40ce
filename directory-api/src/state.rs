use crate::{config::Config, error::AppResult};
use directory_domain::{
    application::{ports::IdentityProviderClient, services::DirectoryService},
    infrastructure::adapters::KeycloakIdentityProvider,
};
use keycloak::{KeycloakAdmin, KeycloakAdminToken};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub directory: Arc<DirectoryService>,
}

impl AppState {
    /// Log in to the admin realm and wire the directory to the live Keycloak adapter
    pub async fn new(config: &Config) -> AppResult<Self> {
        let keycloak = &config.keycloak;
        let reqwest_client = reqwest::Client::new();

        // TODO: the password-grant token is acquired once; swap in a supplier
        // that re-acquires it on expiry for long-running deployments
        let admin_token = KeycloakAdminToken::acquire_custom_realm(
            keycloak.base_url(),
            &keycloak.admin_username,
            &keycloak.admin_password,
            &keycloak.admin_realm,
            &keycloak.admin_client_id,
            "password",
            &reqwest_client,
        )
        .await?;

        info!(
            url = keycloak.base_url(),
            admin_realm = %keycloak.admin_realm,
            "Acquired Keycloak admin token"
        );

        let admin = KeycloakAdmin::new(keycloak.base_url(), admin_token, reqwest_client);
        let provider = Arc::new(KeycloakIdentityProvider::new(admin));

        Ok(Self::with_provider(config.clone(), provider))
    }

    pub fn with_provider(config: Config, provider: Arc<dyn IdentityProviderClient>) -> Self {
        let directory = DirectoryService::new(provider, config.keycloak.realm.clone());
        Self {
            config,
            directory: Arc::new(directory),
        }
    }
}
