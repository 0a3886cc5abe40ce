use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use directory_domain::domain::errors::{ConfigError, DirectoryError, ValidationError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Keycloak error: {0}")]
    Keycloak(#[from] keycloak::KeycloakError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Keycloak(e) => match e {
                keycloak::KeycloakError::HttpFailure { status, text, .. } => {
                    let status_code = match status {
                        401 => StatusCode::UNAUTHORIZED,
                        403 => StatusCode::FORBIDDEN,
                        _ => StatusCode::BAD_GATEWAY,
                    };
                    (status_code, text)
                }
                _ => (StatusCode::BAD_GATEWAY, e.to_string()),
            },
            // Provider causes are deliberately not told apart here
            AppError::Directory(e) => (StatusCode::BAD_GATEWAY, e.message),
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::InvalidBody(e) => (StatusCode::BAD_REQUEST, e.body_text()),
            AppError::Config(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
