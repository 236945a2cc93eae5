//! Backend of RevLimits, an automotive news site.
//!
//! Serves the article API consumed by the reader site (home feed, category
//! pages, article pages) and the admin panel.
//!
//!
//!
//! # Endpoints
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | GET | `/api/articles?category=&status=&featured=` | articles, newest first |
//! | GET | `/api/articles/featured?limit=` | published featured articles, default 3 |
//! | GET | `/api/articles/trending?limit=` | published articles by views, default 5 |
//! | GET | `/api/articles/{id}` | the article, counts one view |
//! | POST | `/api/articles` | 201 + created article |
//! | PUT | `/api/articles/{id}` | updated article |
//! | DELETE | `/api/articles/{id}` | `{message}` |
//! | POST | `/api/articles/{id}/like` | `{likes}` |
//! | POST | `/api/articles/{id}/dislike` | `{dislikes}` |
//!
//! Errors are `{ "message": string, "errors"?: [...] }`. `errors` only shows up
//! on 400s and lists every offending field, e.g.
//! `{ "path": ["imageUrl"], "code": "invalid_string", "message": "Invalid url" }`.
//!
//!
//!
//! # Notes
//!
//! ## Storage
//! Articles are held in memory and reset on restart. Handlers only talk to the
//! `Storage` trait so a database can replace it later.
//!
//! ## Likes
//! Like and dislike only ever count up. There are no accounts, so there is no
//! way to tell who already voted.
//!
//!
//!
//! # Setup
//!
//! Run with defaults (port 5000, sample articles).
//! ```sh
//! RUST_LOG=info cargo run --bin revlimits
//! ```
//!
//! Environment variables.
//! - `RUST_PORT` listening port, default `5000`
//! - `SEED_ARTICLES` load sample articles, default `true`
//! - `MAX_BODY_BYTES` request body limit, default `1048576`
//! - `CORS_MAX_AGE_SECS` preflight cache, default `3600`
//!
//! Smoke test a running server.
//! ```sh
//! cargo run --bin tester -- --base-url http://localhost:5000
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod query;
pub mod routes;
pub mod state;
pub mod validate;

use config::Config;
use routes::{
    create_article_handler, delete_article_handler, dislike_article_handler,
    featured_articles_handler, get_article_handler, like_article_handler, list_articles_handler,
    trending_articles_handler, update_article_handler,
};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config);

    info!("Starting server...");
    let app = build_router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(state.config.cors_max_age_secs));

    Router::new()
        .route(
            "/api/articles",
            get(list_articles_handler).post(create_article_handler),
        )
        .route("/api/articles/featured", get(featured_articles_handler))
        .route("/api/articles/trending", get(trending_articles_handler))
        .route(
            "/api/articles/{id}",
            get(get_article_handler)
                .put(update_article_handler)
                .delete(delete_article_handler),
        )
        .route("/api/articles/{id}/like", post(like_article_handler))
        .route("/api/articles/{id}/dislike", post(dislike_article_handler))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
