use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Details of a geometric operation which could not be carried out on the input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGeometry {
    NotEnoughPoints,
    CoincidentPoints,
    DegenerateContour,
    ZeroThickness,
    ZeroCamber,
    InvalidNumPoints,
    NonFiniteValue,
}

impl std::fmt::Display for InvalidGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for InvalidGeometry {}

/// Errors produced by the profile engine, rib placement and solver integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("profile file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of a profile file which is neither a single name token nor a pair of numbers.
    #[error("malformed profile data on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A chordwise lookup which falls outside of the stored surface.
    #[error("x-value {x} is outside of the surface range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },

    #[error("invalid geometry: {0}")]
    Geometry(#[from] InvalidGeometry),

    /// Two profiles whose chordwise ranges can't be mapped onto each other.
    #[error("profile x-domains do not overlap: [{a_min}, {a_max}] vs [{b_min}, {b_max}]")]
    DomainMismatch {
        a_min: f64,
        a_max: f64,
        b_min: f64,
        b_max: f64,
    },

    #[error("no 2d profile present for rib '{rib}'")]
    MissingProfile { rib: String },

    #[error("solver failed: {0}")]
    SolverFailed(String),

    #[error("solver timed out after {0:?}")]
    SolverTimeout(Duration),

    #[error("solver run was cancelled")]
    Cancelled,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
