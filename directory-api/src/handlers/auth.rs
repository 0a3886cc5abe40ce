use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Require `x-api-key` on every route except `/health` when an API key is configured
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if request.uri().path() == "/health" {
        return Ok(next.run(request).await);
    }

    let Some(expected) = &state.config.api_key else {
        return Ok(next.run(request).await);
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    match provided {
        Some(key) if key == expected => Ok(next.run(request).await),
        _ => Err(AppError::Unauthorized),
    }
}
