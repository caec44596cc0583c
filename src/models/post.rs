use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub likes: Vec<Uuid>,
    pub comments: Vec<Comment>,
    pub created_at: i64,
}

/// Comments are append-only; insertion order is the only ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub user_id: Uuid,
}
