use crate::{
    dto::{CreateUserRequest, UserProfileDto},
    error::AppResult,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

/// Validate the sign-up payload and provision the account
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(request) = payload?;
    let account = request.into_domain()?;
    state.directory.create_account(&account).await?;
    Ok(StatusCode::OK)
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserProfileDto>> {
    let profile = state.directory.get_profile(&user_id).await?;
    Ok(Json(profile.into()))
}
