pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use state::AppState;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/users", post(handlers::users::create_user))
        .route("/api/users/:user_id", get(handlers::users::get_user))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::auth::api_key_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
