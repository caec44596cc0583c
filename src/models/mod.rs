mod post;
mod user;

pub use post::{Comment, Post};
pub use user::User;
