use crate::models::{Comment, Post, User};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub following: Vec<Uuid>,
    pub created_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            following: user.following,
            created_at: user.created_at,
        }
    }
}

/// Author fields exposed when a post's user reference is expanded.
#[derive(Debug, Serialize)]
pub struct PostAuthor {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for PostAuthor {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub text: String,
    pub user: PostAuthor,
    pub likes: Vec<Uuid>,
    pub comments: Vec<Comment>,
    pub created_at: i64,
}

impl PostResponse {
    pub fn new(post: Post, author: User) -> Self {
        Self {
            id: post.id,
            text: post.text,
            user: author.into(),
            likes: post.likes,
            comments: post.comments,
            created_at: post.created_at,
        }
    }
}
