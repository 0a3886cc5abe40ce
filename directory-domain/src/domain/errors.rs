use thiserror::Error;

/// The single error kind the directory service hands back to its callers.
///
/// Provider-side causes (not found, conflict, validation rejection,
/// transport failure) survive only in `message`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Directory error: {message}")]
pub struct DirectoryError {
    pub message: String,
}

impl DirectoryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failures raised by an identity provider client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider responded with status {status}: {description}")]
    Status { status: u16, description: String },

    #[error("Provider call failed: {message}")]
    Transport { message: String },
}

impl ProviderError {
    pub fn status(status: u16, description: impl Into<String>) -> Self {
        Self::Status {
            status,
            description: description.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Result type for identity provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;

impl From<ProviderError> for DirectoryError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status { description, .. } => DirectoryError { message: description },
            ProviderError::Transport { message } => DirectoryError { message },
        }
    }
}

/// Request validation errors, raised by the boundary before the service is called
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation error: {field} - {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
