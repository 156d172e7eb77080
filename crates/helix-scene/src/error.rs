//! Error types for scene-graph operations.

use thiserror::Error;

/// Errors that can occur while mutating or querying the scene graph.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Curve geometry rejected (bad knot vector, too few CVs, ...).
    #[error("invalid curve geometry: {0}")]
    InvalidGeometry(String),

    /// A node handle did not resolve to a live node.
    #[error("no node at path |{0}")]
    UnknownNode(String),

    /// A curve replacement was requested without a target node.
    #[error("createNewCurve is false but no parent node was given")]
    MissingParent,
}

impl SceneError {
    /// Create an invalid-geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry(message.into())
    }
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;
