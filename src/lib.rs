// ============================================================================
// SOCIAL MEDIA REST API
// ============================================================================

// - User registration/login with password hashing
// - JWT authentication via x-auth-token header
// - Posts with likes and comments
// - Following between users
// - CORS configuration
// - Proper error handling
// - Structured logging

pub mod auth;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod states;

pub use models::{Comment, Post, User};
pub use states::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the router over the given state.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Public routes (no auth required)
        .route("/health", get(routes::health::health_check))
        .route("/api/users/register", post(routes::user::register))
        .route("/api/users/login", post(routes::user::login))
        // Protected routes (auth required); GET /api/posts stays public
        .route(
            "/api/posts",
            post(routes::post::create_post).get(routes::post::list_posts),
        )
        .route("/api/users/profile", get(routes::user::profile))
        .route("/api/users/follow/{id}", post(routes::user::follow))
        .route("/api/posts/like/{post_id}", post(routes::post::like_post))
        .route(
            "/api/posts/comment/{post_id}",
            post(routes::post::comment_post),
        )
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
