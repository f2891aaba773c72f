use axum::{http::StatusCode, routing::get, Router};

/// Builds the route table. Anything not listed here gets a 404,
/// including wrong-method requests to a known path.
pub fn app() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/evening", get(evening))
        .method_not_allowed_fallback(|| async { StatusCode::NOT_FOUND })
}

async fn hello() -> &'static str {
    "Hello world"
}

async fn evening() -> &'static str {
    "Good evening"
}
