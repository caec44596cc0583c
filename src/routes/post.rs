use crate::{
    AppState,
    auth::authenticate,
    dto::{CommentRequest, CreatePostRequest, PostResponse},
    errors::ApiError,
    models::{Comment, Post},
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// POST /api/posts
/// Headers: x-auth-token: <token>
/// Body: { "text": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let user_id = authenticate(&headers, &state.jwt_secret)?;

    // A valid token for a user the store no longer knows is a stale credential
    if !state.users.contains_key(&user_id) {
        return Err(ApiError::Unauthorized);
    }

    let post = Post {
        id: Uuid::new_v4(),
        user_id,
        text: payload.text,
        likes: Vec::new(),
        comments: Vec::new(),
        created_at: Utc::now().timestamp(),
    };

    state.posts.insert(post.id, post.clone());

    info!("Post created: {} by user {}", post.id, user_id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/posts
///
/// Every post, with the author expanded to username and email only.
/// No pagination; store order.
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<PostResponse>> {
    let posts = state
        .posts
        .iter()
        .filter_map(|entry| {
            let post = entry.value().clone();
            let author = state.users.get(&post.user_id)?.clone();
            Some(PostResponse::new(post, author))
        })
        .collect();

    Json(posts)
}

/// POST /api/posts/like/:post_id
/// Headers: x-auth-token: <token>
pub async fn like_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    let user_id = authenticate(&headers, &state.jwt_secret)?;

    // Entry lock makes the check-then-append an add-to-set
    let mut post = state.posts.get_mut(&post_id).ok_or(ApiError::PostNotFound)?;

    if post.likes.contains(&user_id) {
        return Err(ApiError::AlreadyLiked);
    }

    post.likes.push(user_id);

    info!("Post {} liked by user {}", post_id, user_id);

    Ok(Json(post.clone()))
}

/// POST /api/posts/comment/:post_id
/// Headers: x-auth-token: <token>
/// Body: { "text": "..." }
pub async fn comment_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(post_id): Path<Uuid>,
    Json(payload): Json<CommentRequest>,
) -> Result<Json<Post>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let user_id = authenticate(&headers, &state.jwt_secret)?;

    let mut post = state.posts.get_mut(&post_id).ok_or(ApiError::PostNotFound)?;

    post.comments.push(Comment {
        text: payload.text,
        user_id,
    });

    info!("Post {} commented by user {}", post_id, user_id);

    Ok(Json(post.clone()))
}
