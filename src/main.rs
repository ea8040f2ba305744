use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use std::sync::Arc;
use tera::Tera;
use time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

mod dictionary;
mod error;
mod model;
mod pagination;
mod signs;
mod utils;

#[tokio::main]
async fn main() {
    // Configuration
    dotenv::dotenv().ok();
    env_logger::init();

    let api_url = match std::env::var("SIGNS_API_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("SIGNS_API_URL must point at the dictionary backend");
            std::process::exit(1);
        }
    };
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".into());

    // Remote API client
    let client = match signs::SignsClient::new(&api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build signs API client: {}", e);
            std::process::exit(1);
        }
    };

    // Templates configuration
    let templates = match Tera::new("templates/**/*.html") {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    let templates = Arc::new(templates);

    // Sessions configuration; the external login flow writes the API
    // token into this store.
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)))
        .with_secure(false);

    // Dictionary admin router
    let dictionary_router = Router::new()
        .route("/", get(dictionary::browse))
        .route("/add", post(dictionary::add_sign))
        .route("/word/{word}", get(dictionary::word_detail))
        .with_state(client);

    // Main application router
    let app = Router::new()
        .route("/", get(|| async { Redirect::to("/admin/dictionary") }))
        .nest("/admin/dictionary", dictionary_router)
        // Static files
        .nest_service("/static", get_service(ServeDir::new("static")))
        // Shared state and layers
        .layer(axum::extract::Extension(templates))
        .layer(session_layer);

    // Start server
    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    println!("Dictionary admin running on http://{}", bind_addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
