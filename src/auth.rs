use crate::errors::ApiError;
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Header carrying the token on authenticated requests.
pub const TOKEN_HEADER: &str = "x-auth-token";

const TOKEN_EXPIRY_HOURS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub exp: usize,
}

pub fn create_token(user_id: &Uuid, secret: &str) -> Result<String, ApiError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_EXPIRY_HOURS))
        .ok_or_else(|| ApiError::InternalError("Failed to calculate expiration".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::InternalError(format!("Token creation failed: {}", e)))
}

/// Verify the `x-auth-token` header and yield the embedded user id.
///
/// Validity is exactly the signature/expiry check; there is no revocation
/// and no store lookup here.
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<Uuid, ApiError> {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::Unauthorized)?;

    Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthorized)
}
