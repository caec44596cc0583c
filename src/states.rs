use crate::{Post, User};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// The in-process document store: two collections plus an email index,
/// behind `Arc<DashMap>` so every handler task shares one copy.
///
/// `DashMap` locks per entry, so a read-modify-write of a single user or
/// post document (follow, like, comment) is serialized against other
/// writers of that same document.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<DashMap<Uuid, User>>,
    pub posts: Arc<DashMap<Uuid, Post>>,
    pub email_index: Arc<DashMap<String, Uuid>>, // Quick Lookup by Email
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(jwt_secret: String) -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            posts: Arc::new(DashMap::new()),
            email_index: Arc::new(DashMap::new()),
            jwt_secret,
        }
    }
}
