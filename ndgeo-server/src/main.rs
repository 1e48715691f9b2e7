//! ndgeo Server Binary
//!
//! ## Usage
//!
//! ```bash
//! # Start with defaults (port 8430)
//! ndgeo-server
//!
//! # Custom port and limits
//! NDGEO_PORT=3000 NDGEO_MAX_DIMENSIONS=20 NDGEO_MAX_TILES=5000 ndgeo-server
//!
//! # Repeatable random Voronoi seeds
//! NDGEO_RNG_SEED=42 ndgeo-server
//! ```

use std::str::FromStr;

use ndgeo_server::{GeometryServer, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_var<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ndgeo_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut builder = ServerConfig::builder();
    if let Some(port) = env_var::<u16>("NDGEO_PORT") {
        builder = builder.port(port);
    }
    if let Some(max) = env_var::<usize>("NDGEO_MAX_DIMENSIONS") {
        builder = builder.max_dimensions(max);
    }
    if let Some(max) = env_var::<u64>("NDGEO_MAX_TILES") {
        builder = builder.max_tiles(max);
    }
    if let Some(seed) = env_var::<u64>("NDGEO_RNG_SEED") {
        builder = builder.rng_seed(seed);
    }
    let config = builder.build();

    tracing::info!("Starting ndgeo Server v{}", env!("CARGO_PKG_VERSION"));

    let server = GeometryServer::new(config)?;
    server.run().await?;

    Ok(())
}
