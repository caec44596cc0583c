mod requests;
mod responses;

pub use requests::{CommentRequest, CreatePostRequest, LoginRequest, RegisterRequest};
pub use responses::{MessageResponse, PostAuthor, PostResponse, TokenResponse, UserResponse};
