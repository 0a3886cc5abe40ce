use crate::{
    application::ports::*,
    domain::{
        entities::*,
        errors::{DirectoryError, DirectoryResult, ProviderError},
    },
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Creates accounts in, and reads profiles from, one realm of the identity provider
#[derive(Clone)]
pub struct DirectoryService {
    provider: Arc<dyn IdentityProviderClient>,
    realm: String,
}

impl DirectoryService {
    pub fn new(provider: Arc<dyn IdentityProviderClient>, realm: impl Into<String>) -> Self {
        Self {
            provider,
            realm: realm.into(),
        }
    }

    /// Provision a new account.
    ///
    /// The provider may not report the new identifier, so nothing is
    /// returned on success. Creation is not retried: a second submission
    /// may conflict or create a duplicate.
    #[instrument(skip(self, request), fields(realm = %self.realm, username = %request.username))]
    pub async fn create_account(&self, request: &AccountCreationRequest) -> DirectoryResult<()> {
        info!("Creating account '{}' in realm '{}'", request.username, self.realm);

        let user = NewIdentity::from(request);

        let response = self
            .provider
            .create_user(&self.realm, &user)
            .await
            .map_err(|e| provider_failure("create_user", e))?;

        if !response.is_success() {
            let status_line = response.status_line();
            return Err(provider_failure(
                "create_user",
                ProviderError::status(response.status, status_line),
            ));
        }

        match response.created_id {
            Some(user_id) => info!(
                "Created account '{}' with ID '{}'",
                request.username, user_id
            ),
            None => info!("Created account '{}'", request.username),
        }

        Ok(())
    }

    /// Load a user's identity together with their realm roles and groups.
    ///
    /// Roles and groups are only requested once the identity lookup has
    /// succeeded; the two lookups then run concurrently and the first
    /// failure abandons the other.
    #[instrument(skip(self, user_id), fields(realm = %self.realm, user_id = %user_id))]
    pub async fn get_profile(&self, user_id: &str) -> DirectoryResult<UserProfile> {
        info!("Getting profile of user '{}' from realm '{}'", user_id, self.realm);

        let identity = self
            .provider
            .get_identity(&self.realm, user_id)
            .await
            .map_err(|e| provider_failure("get_identity", e))?;

        let roles = async {
            self.provider
                .get_role_assignments(&self.realm, user_id)
                .await
                .map_err(|e| provider_failure("get_role_assignments", e))
        };
        let groups = async {
            self.provider
                .get_group_memberships(&self.realm, user_id)
                .await
                .map_err(|e| provider_failure("get_group_memberships", e))
        };
        let (roles, groups) = tokio::try_join!(roles, groups)?;

        let profile = UserProfile::assemble(identity, roles, groups);

        info!(
            "Found user '{}' with {} roles and {} groups",
            user_id,
            profile.roles.len(),
            profile.groups.len()
        );
        Ok(profile)
    }
}

fn provider_failure(operation: &'static str, err: ProviderError) -> DirectoryError {
    warn!(operation, error = %err, "Identity provider call failed");
    err.into()
}
