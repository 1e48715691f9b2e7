//! Server configuration

use ndgeo_core::{DEFAULT_MAX_DIMENSIONS, DEFAULT_MAX_TILES};

const DEFAULT_PORT: u16 = 8430;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Enable CORS
    pub cors_enabled: bool,
    /// Largest dimension count any endpoint accepts
    pub max_dimensions: usize,
    /// Largest tile count a tiling request may produce
    pub max_tiles: u64,
    /// Fixed seed for random Voronoi seeds; entropy when unset
    pub rng_seed: Option<u64>,
}

impl ServerConfig {
    /// Create a new configuration builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    cors_enabled: Option<bool>,
    max_dimensions: Option<usize>,
    max_tiles: Option<u64>,
    rng_seed: Option<u64>,
}

impl ServerConfigBuilder {
    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Enable or disable CORS
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors_enabled = Some(enabled);
        self
    }

    pub fn max_dimensions(mut self, max: usize) -> Self {
        self.max_dimensions = Some(max);
        self
    }

    pub fn max_tiles(mut self, max: u64) -> Self {
        self.max_tiles = Some(max);
        self
    }

    /// Make random Voronoi seeds repeatable
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            cors_enabled: self.cors_enabled.unwrap_or(true),
            max_dimensions: self.max_dimensions.unwrap_or(DEFAULT_MAX_DIMENSIONS),
            max_tiles: self.max_tiles.unwrap_or(DEFAULT_MAX_TILES),
            rng_seed: self.rng_seed,
        }
    }
}
