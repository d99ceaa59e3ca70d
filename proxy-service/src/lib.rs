use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod models;
pub mod routes;

use models::upstream::Upstream;
use routes::{health::health_check, prompts::relay_prompts};

pub type Backend = Arc<dyn Upstream + Send + Sync>;

pub fn app(backend: Backend) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/api/prompts", post(relay_prompts))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(backend)
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
