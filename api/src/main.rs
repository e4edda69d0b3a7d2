//! MarkPress API Server
//!
//! Pulls posts out of a Notion database, converts the block tree to
//! markdown, renders a display fragment, and publishes a post by flipping
//! its status property. Uses hexagonal (ports & adapters) architecture for
//! clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod markdown;

#[cfg(test)]
mod test_utils;


use adapters::{HttpBlogPublisher, NotionClientImpl};
use app::PostService;
use config::Config;
use domain::ports::{BlogPublisher, NoopBlogPublisher, NotionClient};

/// Application state shared across all handlers
pub struct AppState<N: NotionClient> {
    pub post_service: Arc<PostService<N>>,
}

// Derived Clone would demand N: Clone; only the Arc is cloned.
impl<N: NotionClient> Clone for AppState<N> {
    fn clone(&self) -> Self {
        Self {
            post_service: self.post_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Read-only API routes.
pub fn api_router<N: NotionClient + 'static>(state: AppState<N>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/posts", get(handlers::list_posts::<N>))
        .route("/api/posts/:id", get(handlers::get_post::<N>))
        .route(
            "/api/database/properties",
            get(handlers::database_properties::<N>),
        )
        .with_state(state)
}

/// The side-effecting publish route; rate limited when mounted in `main`.
pub fn publish_router<N: NotionClient + 'static>(state: AppState<N>) -> Router {
    Router::new()
        .route("/api/publish", post(handlers::publish::<N>))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,markpress_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MarkPress API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        "Blog forwarding enabled: {}",
        config.blog_forwarding_enabled()
    );

    // Create adapters
    let notion = Arc::new(NotionClientImpl::new(
        config.notion_base_url.clone(),
        config.notion_token.clone(),
        config.notion_version.clone(),
    ));

    let blog: Arc<dyn BlogPublisher> = match &config.blog_api_url {
        Some(endpoint) => Arc::new(HttpBlogPublisher::new(
            endpoint.clone(),
            config.blog_api_key.clone(),
        )),
        None => Arc::new(NoopBlogPublisher),
    };

    // Create application services
    let post_service = Arc::new(PostService::new(notion, blog, &config));

    // Create app state
    let state = AppState { post_service };

    // Rate limiting config for publishing: 2 req/sec sustained, burst of 5.
    // Uses PeerIpKeyExtractor to get client IP from socket connection.
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Build router: API routes plus the browser UI at the root path
    let app = api_router(state.clone())
        .merge(publish_router(state).layer(GovernorLayer {
            config: governor_config,
        }))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
