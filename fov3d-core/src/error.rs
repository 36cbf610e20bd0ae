/// Error type shared by the fallible (non-geometric) parts of the crate
use thiserror::Error;

/// Errors raised while building graphs, parsing edge lists or planning orbits.
///
/// Geometry and projection never fail: a point outside the field of view is
/// `None`, not an error.
#[derive(Error, Debug)]
pub enum Fov3dError {
    /// A graph needs at least one edge to have a center and an extent
    #[error("graph has no edges")]
    EmptyGraph,

    /// Malformed edge-list input
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Orbit parameters that cannot produce a frame sequence
    #[error("invalid orbit: {0}")]
    InvalidOrbit(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Fov3dError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Fov3dError::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Fov3dError>;
