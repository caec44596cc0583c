use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    InvalidCredentials,
    EmailTaken,
    AlreadyFollowing,
    AlreadyLiked,
    Unauthorized,
    UserNotFound,
    PostNotFound,
    ValidationError(String),
    InternalError(String),
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses
/// This is how we control what users see when errors occur
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials"),
            ApiError::EmailTaken => (StatusCode::BAD_REQUEST, "User already exists"),
            ApiError::AlreadyFollowing => (StatusCode::BAD_REQUEST, "Already following this user"),
            ApiError::AlreadyLiked => (StatusCode::BAD_REQUEST, "Post already liked"),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Token is not valid"),
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            ApiError::PostNotFound => (StatusCode::NOT_FOUND, "Post not found"),
            ApiError::ValidationError(msg) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                      "error": msg
                    })),
                )
                    .into_response();
            }
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
