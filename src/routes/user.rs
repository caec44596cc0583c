use crate::{
    AppState,
    auth::{authenticate, create_token},
    dto::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse, UserResponse},
    errors::ApiError,
    models::User,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// POST /api/users/register
/// Body: { "username": "...", "email": "...", "password": "..." }
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    if state.email_index.contains_key(&payload.email) {
        return Err(ApiError::EmailTaken);
    }

    let hashed_password = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| ApiError::InternalError(format!("Password hashing failed: {}", e)))?;

    let user = User {
        id: Uuid::new_v4(),
        username: payload.username,
        email: payload.email,
        hashed_password,
        following: Vec::new(),
        created_at: Utc::now().timestamp(),
    };

    let token = create_token(&user.id, &state.jwt_secret)?;

    state.email_index.insert(user.email.clone(), user.id);
    state.users.insert(user.id, user.clone());

    info!("New user registered: {}", user.email);

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// POST /api/users/login
/// Body: { "email": "...", "password": "..." }
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    // Find user by email
    let user_id = state
        .email_index
        .get(&payload.email)
        .ok_or(ApiError::InvalidCredentials)?;

    let user = state
        .users
        .get(&*user_id)
        .ok_or(ApiError::InvalidCredentials)?;

    // Verify password
    let valid = verify(&payload.password, &user.hashed_password)
        .map_err(|e| ApiError::InternalError(format!("Password verification failed: {}", e)))?;

    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    // Generate token
    let token = create_token(&user.id, &state.jwt_secret)?;

    info!("User logged in: {}", user.email);

    Ok(Json(TokenResponse { token }))
}

/// GET /api/users/profile
/// Headers: x-auth-token: <token>
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = authenticate(&headers, &state.jwt_secret)?;

    let user = state.users.get(&user_id).ok_or(ApiError::UserNotFound)?;

    Ok(Json(user.clone().into()))
}

/// POST /api/users/follow/:id
/// Headers: x-auth-token: <token>
pub async fn follow(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(target_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user_id = authenticate(&headers, &state.jwt_secret)?;

    if !state.users.contains_key(&target_id) {
        return Err(ApiError::UserNotFound);
    }

    // Entry lock makes the check-then-append an add-to-set
    let mut user = state.users.get_mut(&user_id).ok_or(ApiError::Unauthorized)?;

    if user.following.contains(&target_id) {
        return Err(ApiError::AlreadyFollowing);
    }

    user.following.push(target_id);

    info!("User {} now follows {}", user_id, target_id);

    Ok(Json(MessageResponse {
        msg: "User followed".into(),
    }))
}
