#![allow(dead_code)]

use async_trait::async_trait;
use directory_domain::{
    application::ports::identity_provider::*,
    domain::{
        entities::*,
        errors::{ProviderError, ProviderResult},
    },
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory identity provider that records every call made against it
pub struct MockIdentityProvider {
    pub identities: Arc<Mutex<HashMap<String, IdentityRecord>>>, // user id -> identity
    pub roles: Arc<Mutex<HashMap<String, Vec<RoleAssignment>>>>,
    pub groups: Arc<Mutex<HashMap<String, Vec<GroupMembership>>>>,
    pub created_users: Arc<Mutex<Vec<(String, NewIdentity)>>>, // (realm, record)
    pub calls: Arc<Mutex<Vec<String>>>,
    pub create_response: Arc<Mutex<Option<ProviderResponse>>>,
    pub create_failure: Arc<Mutex<Option<ProviderError>>>,
    pub identity_failure: Arc<Mutex<Option<ProviderError>>>,
    pub role_failure: Arc<Mutex<Option<ProviderError>>>,
    pub group_failure: Arc<Mutex<Option<ProviderError>>>,
    pub role_delay: Arc<Mutex<Option<Duration>>>,
    pub group_delay: Arc<Mutex<Option<Duration>>>,
    pub user_counter: Arc<Mutex<u32>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            identities: Arc::new(Mutex::new(HashMap::new())),
            roles: Arc::new(Mutex::new(HashMap::new())),
            groups: Arc::new(Mutex::new(HashMap::new())),
            created_users: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            create_response: Arc::new(Mutex::new(None)),
            create_failure: Arc::new(Mutex::new(None)),
            identity_failure: Arc::new(Mutex::new(None)),
            role_failure: Arc::new(Mutex::new(None)),
            group_failure: Arc::new(Mutex::new(None)),
            role_delay: Arc::new(Mutex::new(None)),
            group_delay: Arc::new(Mutex::new(None)),
            user_counter: Arc::new(Mutex::new(0)),
        }
    }

    /// Seed a user together with their role and group names
    pub fn with_user(
        self,
        identity: IdentityRecord,
        roles: &[&str],
        groups: &[&str],
    ) -> Self {
        let user_id = identity.id.to_string();
        self.roles.lock().unwrap().insert(
            user_id.clone(),
            roles.iter().map(|name| RoleAssignment::new(*name)).collect(),
        );
        self.groups.lock().unwrap().insert(
            user_id.clone(),
            groups.iter().map(|name| GroupMembership::new(*name)).collect(),
        );
        self.identities.lock().unwrap().insert(user_id, identity);
        self
    }

    pub fn set_create_response(&self, response: ProviderResponse) {
        *self.create_response.lock().unwrap() = Some(response);
    }

    pub fn fail_create(&self, error: ProviderError) {
        *self.create_failure.lock().unwrap() = Some(error);
    }

    pub fn fail_identity(&self, error: ProviderError) {
        *self.identity_failure.lock().unwrap() = Some(error);
    }

    pub fn fail_roles(&self, error: ProviderError) {
        *self.role_failure.lock().unwrap() = Some(error);
    }

    pub fn fail_groups(&self, error: ProviderError) {
        *self.group_failure.lock().unwrap() = Some(error);
    }

    pub fn delay_roles(&self, delay: Duration) {
        *self.role_delay.lock().unwrap() = Some(delay);
    }

    pub fn delay_groups(&self, delay: Duration) {
        *self.group_delay.lock().unwrap() = Some(delay);
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == operation)
            .count()
    }

    pub fn created_users(&self) -> Vec<(String, NewIdentity)> {
        self.created_users.lock().unwrap().clone()
    }

    fn record(&self, operation: &str) {
        self.calls.lock().unwrap().push(operation.to_string());
    }

    fn generate_user_id(&self) -> String {
        let mut counter = self.user_counter.lock().unwrap();
        *counter += 1;
        format!("user-{}", counter)
    }
}

#[async_trait]
impl IdentityProviderClient for MockIdentityProvider {
    async fn create_user(&self, realm: &str, user: &NewIdentity) -> ProviderResult<ProviderResponse> {
        self.record("create_user");
        self.created_users
            .lock()
            .unwrap()
            .push((realm.to_string(), user.clone()));

        if let Some(error) = self.create_failure.lock().unwrap().clone() {
            return Err(error);
        }

        if let Some(response) = self.create_response.lock().unwrap().clone() {
            return Ok(response);
        }

        let user_id = self.generate_user_id();
        self.identities.lock().unwrap().insert(
            user_id.clone(),
            IdentityRecord::new(user_id.as_str(), user.username.as_str())
                .with_email(user.email.as_str())
                .with_name(user.first_name.as_str(), user.last_name.as_str()),
        );
        Ok(ProviderResponse::created(Some(EntityId::from_string(user_id))))
    }

    async fn get_identity(&self, _realm: &str, user_id: &str) -> ProviderResult<IdentityRecord> {
        self.record("get_identity");

        if let Some(error) = self.identity_failure.lock().unwrap().clone() {
            return Err(error);
        }

        self.identities
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| ProviderError::status(404, "HTTP 404 Not Found: User not found"))
    }

    async fn get_role_assignments(
        &self,
        _realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<RoleAssignment>> {
        self.record("get_role_assignments");

        let delay = *self.role_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.role_failure.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(self.roles.lock().unwrap().get(user_id).cloned().unwrap_or_default())
    }

    async fn get_group_memberships(
        &self,
        _realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<GroupMembership>> {
        self.record("get_group_memberships");

        let delay = *self.group_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.group_failure.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(self.groups.lock().unwrap().get(user_id).cloned().unwrap_or_default())
    }
}
