//! Error types for ndgeo operations
//!
//! Every failure in the engine is a parameter validation failure: a bad
//! dimension count, a non-positive length, bounds that don't describe a
//! region, or a tiling combination that isn't supported. Nothing here is
//! transient, so no error is recoverable by retrying.
//!
//! Each variant carries:
//! - A human-readable message
//! - A stable error code (e.g. `INVALID_PARAMETER`)
//! - A category for grouping
//! - An HTTP status code for the REST facade
//!
//! # Example
//!
//! ```rust
//! use ndgeo_core::error::{ErrorCategory, GeometryError};
//! use ndgeo_core::HyperSphere;
//!
//! let err = HyperSphere::new(3, -1.0).unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Validation);
//! assert_eq!(err.http_status_code(), 400);
//! assert_eq!(err.error_code(), "INVALID_PARAMETER");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ndgeo operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Input validation failed (400)
    Validation,
    /// Combination of inputs is not supported (400)
    Unsupported,
    /// Request would exceed a configured limit (413)
    Limit,
    /// Internal error (500)
    Internal,
}

/// Errors that can occur in ndgeo operations
#[derive(Error, Debug)]
pub enum GeometryError {
    // ═══════════════════════════════════════════════════════════════════════
    // Shape parameter errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Dimension count is zero
    #[error("Dimensions must be positive, got {dimensions}")]
    InvalidDimensions { dimensions: usize },

    /// A length, radius or axis is zero, negative or not finite
    #[error("{name} must be positive, got {value}")]
    InvalidParameter { name: String, value: f64 },

    /// Wrong number of parameters for a shape
    #[error("{shape} requires exactly {expected} {parameter}, got {actual}")]
    ParameterCount {
        shape: String,
        parameter: String,
        expected: usize,
        actual: usize,
    },

    /// A point's coordinate count doesn't match the shape
    #[error("Point dimension mismatch: expected {expected} coordinates, got {actual}")]
    PointDimensionMismatch { expected: usize, actual: usize },

    /// A derived property isn't defined for this shape
    #[error("{property} is undefined: {reason}")]
    UndefinedProperty { property: String, reason: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Tiling errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Bounds list is empty, inverted or not finite
    #[error("Invalid bounds: {reason}")]
    InvalidBounds { reason: String },

    /// Bounds list length doesn't match the dimension count
    #[error("Number of bounds ({actual}) must match dimensions ({expected})")]
    BoundsDimensionMismatch { expected: usize, actual: usize },

    /// Density is zero, negative or not finite
    #[error("Density must be positive, got {density}")]
    InvalidDensity { density: f64 },

    /// Pattern requested outside the dimensions it supports
    #[error("{pattern} tiling is only supported in 2D, got {dimensions}D")]
    UnsupportedDimension { pattern: String, dimensions: usize },

    /// Voronoi tiling without explicit or random seeds
    #[error("Voronoi tiling requires either 'seed_points' or 'num_random_seeds'")]
    MissingSeedSource,

    /// A seed point has the wrong number of coordinates
    #[error("Seed point {index} has {actual} coordinates, expected {expected}")]
    SeedDimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A pattern-specific parameter is missing
    #[error("{pattern} tiling requires {parameter}")]
    MissingParameter { pattern: String, parameter: String },

    /// Unknown base shape name
    #[error("Unsupported shape type: '{name}'. Expected one of: cube, sphere, simplex")]
    UnknownShapeType { name: String },

    /// Unknown tiling type name
    #[error("Unsupported tiling type: '{name}'. Expected one of: regular, hexagonal, voronoi")]
    UnknownTilingType { name: String },

    // ═══════════════════════════════════════════════════════════════════════
    // Limits (enforced by callers such as the REST facade)
    // ═══════════════════════════════════════════════════════════════════════

    /// Dimension count above the configured maximum
    #[error("Dimensions ({dimensions}) exceed the supported maximum of {max}")]
    DimensionLimitExceeded { dimensions: usize, max: usize },

    /// Tiling would produce more tiles than allowed
    #[error("Tiling would produce about {estimated} tiles, above the limit of {limit}. Shrink the bounds or lower the density.")]
    TileLimitExceeded { estimated: u64, limit: u64 },

    // ═══════════════════════════════════════════════════════════════════════
    // Infrastructure errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Query pattern failed to compile
    #[error("Query pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON serialization or deserialization failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GeometryError {
    /// Shorthand for [`GeometryError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, value: f64) -> Self {
        GeometryError::InvalidParameter {
            name: name.into(),
            value,
        }
    }

    /// Returns true if this error might succeed on retry.
    ///
    /// Geometry evaluation is deterministic, so the same input always fails
    /// the same way.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Returns true if this error is a client error (4xx equivalent)
    pub fn is_client_error(&self) -> bool {
        matches!(self.http_status_code(), 400..=499)
    }

    /// Returns true if this error is a server error (5xx equivalent)
    pub fn is_server_error(&self) -> bool {
        matches!(self.http_status_code(), 500..=599)
    }

    /// Returns the error category for grouping
    pub fn category(&self) -> ErrorCategory {
        match self {
            GeometryError::InvalidDimensions { .. }
            | GeometryError::InvalidParameter { .. }
            | GeometryError::ParameterCount { .. }
            | GeometryError::PointDimensionMismatch { .. }
            | GeometryError::InvalidBounds { .. }
            | GeometryError::BoundsDimensionMismatch { .. }
            | GeometryError::InvalidDensity { .. }
            | GeometryError::SeedDimensionMismatch { .. }
            | GeometryError::MissingParameter { .. }
            | GeometryError::MissingSeedSource => ErrorCategory::Validation,

            GeometryError::UndefinedProperty { .. }
            | GeometryError::UnsupportedDimension { .. }
            | GeometryError::UnknownShapeType { .. }
            | GeometryError::UnknownTilingType { .. } => ErrorCategory::Unsupported,

            GeometryError::DimensionLimitExceeded { .. }
            | GeometryError::TileLimitExceeded { .. } => ErrorCategory::Limit,

            GeometryError::Pattern(_) | GeometryError::JsonError(_) => ErrorCategory::Internal,
        }
    }

    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GeometryError::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            GeometryError::InvalidParameter { .. } => "INVALID_PARAMETER",
            GeometryError::ParameterCount { .. } => "PARAMETER_COUNT",
            GeometryError::PointDimensionMismatch { .. } => "POINT_DIMENSION_MISMATCH",
            GeometryError::UndefinedProperty { .. } => "UNDEFINED_PROPERTY",
            GeometryError::InvalidBounds { .. } => "INVALID_BOUNDS",
            GeometryError::BoundsDimensionMismatch { .. } => "BOUNDS_DIMENSION_MISMATCH",
            GeometryError::InvalidDensity { .. } => "INVALID_DENSITY",
            GeometryError::UnsupportedDimension { .. } => "UNSUPPORTED_DIMENSION",
            GeometryError::MissingSeedSource => "MISSING_SEED_SOURCE",
            GeometryError::SeedDimensionMismatch { .. } => "SEED_DIMENSION_MISMATCH",
            GeometryError::MissingParameter { .. } => "MISSING_PARAMETER",
            GeometryError::UnknownShapeType { .. } => "UNKNOWN_SHAPE_TYPE",
            GeometryError::UnknownTilingType { .. } => "UNKNOWN_TILING_TYPE",
            GeometryError::DimensionLimitExceeded { .. } => "DIMENSION_LIMIT_EXCEEDED",
            GeometryError::TileLimitExceeded { .. } => "TILE_LIMIT_EXCEEDED",
            GeometryError::Pattern(_) => "PATTERN_ERROR",
            GeometryError::JsonError(_) => "JSON_ERROR",
        }
    }

    /// Returns the HTTP status code for this error
    pub fn http_status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Unsupported => 400,
            ErrorCategory::Limit => match self {
                GeometryError::TileLimitExceeded { .. } => 413,
                _ => 400,
            },
            ErrorCategory::Internal => 500,
        }
    }

    /// Converts this error to a JSON-serializable response object
    ///
    /// ```json
    /// {
    ///   "error": {
    ///     "code": "UNSUPPORTED_DIMENSION",
    ///     "message": "Hexagonal tiling is only supported in 2D, got 3D",
    ///     "category": "unsupported",
    ///     "recoverable": false
    ///   }
    /// }
    /// ```
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                category: self.category(),
                recoverable: self.is_recoverable(),
            },
        }
    }
}

/// JSON-serializable error response for APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail for JSON responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code (e.g., "INVALID_BOUNDS")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category
    pub category: ErrorCategory,
    /// Whether retry might succeed
    pub recoverable: bool,
}
