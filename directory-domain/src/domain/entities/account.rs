use super::common::REDACTED;
use crate::domain::errors::ValidationError;

pub const USERNAME_MIN_LENGTH: usize = 2;
pub const USERNAME_MAX_LENGTH: usize = 30;
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Everything needed to provision a new account in the identity provider
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCreationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl AccountCreationRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Check the request against the boundary rules.
    ///
    /// The directory service does not call this itself; callers validate
    /// before handing the request over.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::validate_username(&self.username)?;
        Self::validate_email(&self.email)?;
        Self::validate_password(&self.password)?;

        if self.first_name.trim().is_empty() {
            return Err(ValidationError::new("firstName", "First name cannot be blank"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::new("lastName", "Last name cannot be blank"));
        }

        Ok(())
    }

    pub fn validate_username(username: &str) -> Result<(), ValidationError> {
        if username.trim().is_empty() {
            return Err(ValidationError::new("username", "Username cannot be blank"));
        }

        let length = username.chars().count();
        if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
            return Err(ValidationError::new(
                "username",
                format!(
                    "Username must be between {USERNAME_MIN_LENGTH} and {USERNAME_MAX_LENGTH} characters long"
                ),
            ));
        }

        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), ValidationError> {
        let invalid = || ValidationError::new("email", format!("Invalid email address: {email}"));

        if email.is_empty() || email.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(invalid());
        }

        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid());
        }

        Ok(())
    }

    pub fn validate_password(password: &str) -> Result<(), ValidationError> {
        if password.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(ValidationError::new(
                "password",
                format!("Password must be at least {PASSWORD_MIN_LENGTH} characters long"),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for AccountCreationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountCreationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &REDACTED)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}
