use async_trait::async_trait;
use keycloak::types::*;
use keycloak::{KeycloakAdmin, KeycloakError, KeycloakTokenSupplier};
use std::sync::Arc;

use crate::application::ports::identity_provider::*;
use crate::domain::{entities::*, errors::*};

/// Keycloak admin REST adapter implementing the IdentityProviderClient port
pub struct KeycloakIdentityProvider<TS: KeycloakTokenSupplier> {
    admin: Arc<KeycloakAdmin<TS>>,
}

impl<TS: KeycloakTokenSupplier + Send + Sync> KeycloakIdentityProvider<TS> {
    pub fn new(admin: KeycloakAdmin<TS>) -> Self {
        Self {
            admin: Arc::new(admin),
        }
    }
}

#[async_trait]
impl<TS: KeycloakTokenSupplier + Send + Sync> IdentityProviderClient for KeycloakIdentityProvider<TS> {
    async fn create_user(&self, realm: &str, user: &NewIdentity) -> ProviderResult<ProviderResponse> {
        let response = self
            .admin
            .realm_users_post(realm, user_to_keycloak(user))
            .await
            .map_err(provider_error)?;

        let created_id = response.to_id().map(|id| EntityId::from_string(id.to_string()));
        Ok(ProviderResponse::created(created_id))
    }

    async fn get_identity(&self, realm: &str, user_id: &str) -> ProviderResult<IdentityRecord> {
        let keycloak_user = self
            .admin
            .realm_users_with_user_id_get(realm, user_id, None)
            .await
            .map_err(provider_error)?;

        identity_from_keycloak(keycloak_user, user_id)
    }

    async fn get_role_assignments(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<RoleAssignment>> {
        let mappings = self
            .admin
            .realm_users_with_user_id_role_mappings_get(realm, user_id)
            .await
            .map_err(provider_error)?;

        // Client-level mappings are not part of the profile
        Ok(mappings
            .realm_mappings
            .map(|roles| roles.iter().map(role_from_keycloak).collect())
            .unwrap_or_default())
    }

    async fn get_group_memberships(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<GroupMembership>> {
        let groups = self
            .admin
            .realm_users_with_user_id_groups_get(realm, user_id, None, None, None, None)
            .await
            .map_err(provider_error)?;

        Ok(groups.iter().map(group_from_keycloak).collect())
    }
}

fn user_to_keycloak(user: &NewIdentity) -> UserRepresentation {
    let credentials: Vec<CredentialRepresentation> = user
        .credentials
        .iter()
        .map(|credential| CredentialRepresentation {
            type_: Some(PasswordCredential::TYPE.to_string().into()),
            value: Some(credential.value.clone().into()),
            temporary: Some(credential.temporary),
            ..Default::default()
        })
        .collect();

    UserRepresentation {
        username: Some(user.username.clone().into()),
        email: Some(user.email.clone().into()),
        first_name: Some(user.first_name.clone().into()),
        last_name: Some(user.last_name.clone().into()),
        enabled: Some(user.enabled),
        credentials: Some(credentials.into()),
        ..Default::default()
    }
}

fn identity_from_keycloak(
    keycloak_user: UserRepresentation,
    requested_id: &str,
) -> ProviderResult<IdentityRecord> {
    let username = keycloak_user
        .username
        .ok_or_else(|| {
            ProviderError::transport(format!(
                "Keycloak returned user '{requested_id}' without a username"
            ))
        })?
        .to_string();

    let id = keycloak_user
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| requested_id.to_string());

    Ok(IdentityRecord {
        id: EntityId::from_string(id),
        username,
        email: keycloak_user.email.map(|e| e.to_string()),
        first_name: keycloak_user.first_name.map(|f| f.to_string()),
        last_name: keycloak_user.last_name.map(|l| l.to_string()),
    })
}

fn role_from_keycloak(role: &RoleRepresentation) -> RoleAssignment {
    RoleAssignment {
        id: role.id.as_ref().map(|id| EntityId::from_string(id.to_string())),
        name: role.name.as_ref().map(|n| n.to_string()).unwrap_or_default(),
        description: role.description.as_ref().map(|d| d.to_string()),
    }
}

fn group_from_keycloak(group: &GroupRepresentation) -> GroupMembership {
    GroupMembership {
        id: group.id.as_ref().map(|id| EntityId::from_string(id.to_string())),
        name: group.name.as_ref().map(|n| n.to_string()).unwrap_or_default(),
        path: group.path.as_ref().map(|p| p.to_string()),
    }
}

/// Collapse a Keycloak client failure into the port's failure type
fn provider_error(err: KeycloakError) -> ProviderError {
    match err {
        KeycloakError::HttpFailure { status, body, .. } => {
            let message = body.as_ref().and_then(|b| b.message());
            ProviderError::status(status, describe_status(status, message.as_deref()))
        }
        other => ProviderError::transport(other.to_string()),
    }
}

fn describe_status(status: u16, message: Option<&str>) -> String {
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status");

    match message.filter(|m| !m.is_empty()) {
        Some(message) => format!("HTTP {status} {reason}: {message}"),
        None => format!("HTTP {status} {reason}"),
    }
}
