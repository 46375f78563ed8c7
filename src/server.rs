use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::handlers::{example_langchain, explain, generate_code, health};
use crate::state::AppState;

/// Local dev frontends allowed by CORS; tighten for prod.
const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// Create the HTTP server with all routes
pub fn create_server(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(ALLOWED_ORIGINS.map(HeaderValue::from_static))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/health", get(health))
        .route("/generate_code", post(generate_code))
        .route("/explain", post(explain))
        .route("/examples/langchain", get(example_langchain))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

/// Start the HTTP server on the specified port
pub async fn start_server(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = create_server(state);
    let addr = format!("0.0.0.0:{}", port);

    println!("🚀 HTTP server running on http://{}", addr);
    println!("💚 Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
