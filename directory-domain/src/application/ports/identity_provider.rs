use crate::domain::{
    entities::{common::REDACTED, *},
    errors::ProviderResult,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port to the external identity provider holding the realm's users.
///
/// Implementations are shared between concurrent calls, so they must not
/// rely on per-call mutable state.
#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    async fn create_user(&self, realm: &str, user: &NewIdentity) -> ProviderResult<ProviderResponse>;

    /// Fails when the user does not exist.
    async fn get_identity(&self, realm: &str, user_id: &str) -> ProviderResult<IdentityRecord>;

    /// Realm-level role mappings only. A user without roles yields an empty list.
    async fn get_role_assignments(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<RoleAssignment>>;

    async fn get_group_memberships(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<GroupMembership>>;
}

/// Provider-native user record submitted on account creation
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub enabled: bool,
    pub credentials: Vec<PasswordCredential>,
}

impl From<&AccountCreationRequest> for NewIdentity {
    fn from(request: &AccountCreationRequest) -> Self {
        Self {
            username: request.username.clone(),
            email: request.email.clone(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            enabled: true,
            credentials: vec![PasswordCredential::permanent(request.password.clone())],
        }
    }
}

impl std::fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewIdentity")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("enabled", &self.enabled)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Plaintext password handed to the provider, which hashes and stores it
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordCredential {
    pub value: String,
    pub temporary: bool,
}

impl PasswordCredential {
    pub const TYPE: &'static str = "password";

    pub fn permanent(value: String) -> Self {
        Self {
            value,
            temporary: false,
        }
    }
}

impl std::fmt::Debug for PasswordCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredential")
            .field("value", &REDACTED)
            .field("temporary", &self.temporary)
            .finish()
    }
}

/// Outcome of a create call as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub reason: String,
    pub created_id: Option<EntityId>,
}

impl ProviderResponse {
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            created_id: None,
        }
    }

    pub fn created(created_id: Option<EntityId>) -> Self {
        Self {
            status: 201,
            reason: "Created".to_string(),
            created_id,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Human-readable status line, e.g. `HTTP 409 Conflict`
    pub fn status_line(&self) -> String {
        format!("HTTP {} {}", self.status, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_identity_carries_request_fields() {
        let request =
            AccountCreationRequest::new("testuser", "test@example.com", "password123", "John", "Doe");

        let identity = NewIdentity::from(&request);

        assert_eq!(identity.username, "testuser");
        assert_eq!(identity.email, "test@example.com");
        assert_eq!(identity.first_name, "John");
        assert_eq!(identity.last_name, "Doe");
        assert!(identity.enabled);
        assert_eq!(identity.credentials, vec![PasswordCredential::permanent("password123".into())]);
    }

    #[test]
    fn new_identity_debug_hides_password() {
        let request = AccountCreationRequest::new("u1", "u@x.io", "s3cr3t-pw", "A", "B");
        let rendered = format!("{:?}", NewIdentity::from(&request));
        assert!(!rendered.contains("s3cr3t-pw"));
    }

    #[test]
    fn response_success_range() {
        assert!(ProviderResponse::created(None).is_success());
        assert!(ProviderResponse::new(204, "No Content").is_success());
        assert!(!ProviderResponse::new(409, "Conflict").is_success());
        assert!(!ProviderResponse::new(302, "Found").is_success());
        assert_eq!(ProviderResponse::new(409, "Conflict").status_line(), "HTTP 409 Conflict");
    }
}
