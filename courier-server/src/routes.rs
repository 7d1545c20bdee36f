use crate::api::auth::auth;
use crate::api::profile::profile;
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authentication endpoints
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/verify-otp", post(auth::verify_otp))
        .route("/api/v1/auth/resend-otp/{identifier}", get(auth::resend_otp))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/reset-password", post(auth::reset_password))
        // Protected profile endpoint
        .route("/api/v1/profile", put(profile::update_profile))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
