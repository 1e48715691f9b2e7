//! ndgeo Server - HTTP facade for ndgeo-core
//!
//! Every endpoint is a thin wrapper: shape math, tiling and query dispatch
//! all live in `ndgeo-core`. The server adds request validation against the
//! configured limits and maps [`GeometryError`](ndgeo_core::GeometryError)
//! onto HTTP status codes.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     GeometryServer                        │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │     Mutex<GeometryAgent>   (saved shapes, RNG)     │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                          │                                │
//! │   ┌──────────────┬───────┴──────┬──────────────┐         │
//! │   ▼              ▼              ▼              ▼         │
//! │ /api/sphere   /api/query    /api/tiling   /api/compare   │
//! │ /api/cube ...                               /api/dimensions│
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Tiling requests do not touch the agent; each builds its own pattern and
//! its own RNG.

pub mod routes;
mod config;
mod error;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use error::ApiError;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use ndgeo_core::GeometryAgent;

/// Shared application state
pub struct AppState {
    /// Query dispatcher shared by `/api/query`
    pub agent: Mutex<GeometryAgent>,
    pub config: ServerConfig,
}

impl AppState {
    /// Build the agent the configuration describes
    pub fn new(config: ServerConfig) -> ndgeo_core::Result<Self> {
        let agent = match config.rng_seed {
            Some(seed) => GeometryAgent::with_seed(seed)?,
            None => GeometryAgent::new()?,
        }
        .with_limits(config.max_dimensions, config.max_tiles);

        Ok(Self {
            agent: Mutex::new(agent),
            config,
        })
    }

    pub(crate) fn agent(&self) -> Result<MutexGuard<'_, GeometryAgent>, ApiError> {
        self.agent
            .lock()
            .map_err(|e| ApiError::Internal(format!("Lock error: {}", e)))
    }
}

/// ndgeo HTTP Server
///
/// # Example
///
/// ```rust,ignore
/// use ndgeo_server::{GeometryServer, ServerConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let config = ServerConfig::builder().port(8430).build();
///     let server = GeometryServer::new(config).unwrap();
///     server.run().await.unwrap();
/// }
/// ```
pub struct GeometryServer {
    state: Arc<AppState>,
    config: ServerConfig,
}

impl GeometryServer {
    pub fn new(config: ServerConfig) -> ndgeo_core::Result<Self> {
        Ok(Self {
            state: Arc::new(AppState::new(config.clone())?),
            config,
        })
    }

    /// Build the Axum router with all routes
    pub fn router(&self) -> Router {
        routes::create_router(Arc::clone(&self.state))
    }

    /// Get the socket address for the server
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.config.port))
    }

    /// Run the server
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = self.addr();

        tracing::info!("ndgeo Server listening on http://{}", addr);
        tracing::info!(
            max_dimensions = self.config.max_dimensions,
            max_tiles = self.config.max_tiles,
            cors = self.config.cors_enabled,
            "Limits"
        );
        tracing::info!("Endpoints:");
        tracing::info!("  GET  /health");
        tracing::info!("  GET  /api/health");
        tracing::info!("  POST /api/sphere | /api/cube | /api/ellipsoid | /api/simplex | /api/pyramid");
        tracing::info!("  POST /api/query");
        tracing::info!("  POST /api/compare");
        tracing::info!("  GET  /api/dimensions/:dimensions");
        tracing::info!("  POST /api/tiling");
        tracing::info!("  POST /api/classic-sphere?diameter=");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
