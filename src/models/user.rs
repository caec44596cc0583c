use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    // Never leaves the process; every response path drops it
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub following: Vec<Uuid>,
    pub created_at: i64,
}
