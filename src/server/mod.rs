//! HTTP server for the contact pages.
//!
//! This module wires the contact handlers onto an axum `Router` and runs it
//! until the process is asked to stop.

pub mod form;
pub mod handlers;
pub mod pages;
pub mod paths;

pub use paths::{ResourcePath, ResourcePaths, ValidatedPaths};

use crate::config::Config;
use crate::repositories::ContactRepository;
use anyhow::Result;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, patch};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Path of the health check endpoint.
pub const HEALTH_CHECK_PATH: &str = "/healthcheck";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ContactRepository>,
    pub paths: Arc<ValidatedPaths>,
    pub page_size_min: usize,
    pub page_size_max: usize,
}

impl AppState {
    pub fn new(repo: Arc<dyn ContactRepository>, paths: ValidatedPaths, config: &Config) -> Self {
        Self {
            repo,
            paths: Arc::new(paths),
            page_size_min: config.page_size_min,
            page_size_max: config.page_size_max,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let paths = state.paths.clone();

    Router::new()
        .route(
            paths.root.as_str(),
            get(handlers::get_contact).delete(handlers::delete_contact),
        )
        .route(
            paths.form.as_str(),
            get(handlers::get_form).post(handlers::post_form),
        )
        .route(paths.list.as_str(), get(handlers::get_list))
        .route(paths.email.as_str(), patch(handlers::patch_email))
        .route(HEALTH_CHECK_PATH, get(handlers::healthcheck))
        .route(pages::STYLESHEET_PATH, get(handlers::stylesheet))
        .route("/", get(handlers::home))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}

/// Serve the application on `config.bind_address()` until SIGINT or SIGTERM.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn run_server(config: &Config, state: AppState) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Starting server at {:?}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Bye.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let received = tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    };
    info!("Received shutdown signal {:?}", received);
}
