pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use handlers::{HealthResponse, TextInput};
pub use routes::create_router;

use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::analyzer::PolarityAnalyzer;
use crate::config::ServerConfig;

/// Immutable state shared by every request
pub struct AppState {
    pub analyzer: Arc<dyn PolarityAnalyzer>,
    pub index_path: PathBuf,
    /// `None` lifts the request body limit entirely
    pub max_body_bytes: Option<usize>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn PolarityAnalyzer>, index_path: PathBuf) -> Self {
        Self {
            analyzer,
            index_path,
            max_body_bytes: None,
        }
    }

    pub fn with_body_limit(mut self, max_body_bytes: Option<usize>) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Bind to the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    run(listener, state, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Failed to read listener address")?;
    let app = create_router(Arc::new(state));

    tracing::info!(%addr, "sentiment-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
