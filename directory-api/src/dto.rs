use directory_domain::domain::{
    entities::{AccountCreationRequest, UserProfile},
    errors::ValidationError,
};
use serde::{Deserialize, Serialize};

/// Sign-up payload accepted by `POST /api/users`
///
/// Debug is left out so the password never reaches request logs.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl CreateUserRequest {
    pub fn into_domain(self) -> Result<AccountCreationRequest, ValidationError> {
        let request = AccountCreationRequest::new(
            self.username,
            self.email,
            self.password,
            self.first_name,
            self.last_name,
        );
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub groups: Vec<String>,
}

impl From<UserProfile> for UserProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            roles: profile.roles,
            groups: profile.groups,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
