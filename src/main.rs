use social_api::{AppState, app};
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    // JWT Secret
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set!");

    let state = AppState::new(jwt_secret);

    let app = app(state);

    // Start server
    let addr = "0.0.0.0:5001";
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health                      - Health check");
    info!("  POST   /api/users/register          - Create account");
    info!("  POST   /api/users/login             - Login");
    info!("  GET    /api/users/profile           - Current user (auth)");
    info!("  POST   /api/users/follow/:id        - Follow a user (auth)");
    info!("  POST   /api/posts                   - Create post (auth)");
    info!("  GET    /api/posts                   - List posts");
    info!("  POST   /api/posts/like/:postId      - Like a post (auth)");
    info!("  POST   /api/posts/comment/:postId   - Comment on a post (auth)");

    axum::serve(listener, app).await.unwrap();
}
