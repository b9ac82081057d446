mod handlers;
pub mod routes;
mod state;


use std::net::{IpAddr, SocketAddr};

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use handlers::{
    ErrorResponse, HealthResponse, ProjectBody, ProjectListBody, ProjectRecordResponse,
    ProjectResponse, PutProjectRequest,
};
pub use state::AppState;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 9050;

/// API server errors
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(catalog::api::bind),
        help("Is another process already listening on this port? Set PORT or --port.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(catalog::api::serve))]
    Serve(#[source] std::io::Error),
}

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Override the bind address (builder pattern).
    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Override the port (builder pattern).
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Socket address string, e.g. `0.0.0.0:9050`.
    pub fn addr(&self) -> String {
        SocketAddr::new(self.host, self.port).to_string()
    }
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration and database.
///
/// Serves until Ctrl-C, then drains in-flight requests.
pub async fn run<D: Database + 'static>(config: Config, db: D) -> Result<(), ApiError> {
    let state = AppState::new(db);
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("API server listening on http://{}", addr);
    info!("API docs available at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
