//! Error types for the helix tool command.

use crate::command::CommandState;
use helix_scene::SceneError;
use thiserror::Error;

/// Errors that can occur while parsing, generating, or running the command.
#[derive(Error, Debug)]
pub enum HelixError {
    /// A flag value failed to parse, or a token was not a known flag.
    /// The whole parse is aborted; no parameter is updated.
    #[error("{flag} flag parsing failed: {message}")]
    ArgumentParse {
        /// The offending flag or token.
        flag: String,
        /// What went wrong with it.
        message: String,
    },

    /// `numCVs` does not exceed the curve degree, so the span count
    /// would be zero or negative.
    #[error("numCVs must exceed the curve degree: got {num_cvs} CVs for degree {degree}")]
    InvalidParameter {
        /// The rejected CV count.
        num_cvs: u32,
        /// The fixed curve degree.
        degree: usize,
    },

    /// The curve-construction service rejected the generated geometry.
    #[error("curve construction failed: {0}")]
    CurveConstruction(#[source] SceneError),

    /// Undo's deletion request failed; the curve is still in the scene.
    #[error("deleting the helix curve failed: {0}")]
    Deletion(#[source] SceneError),

    /// A lifecycle method was invoked out of order. Nothing happened.
    #[error("{method} is not valid in the {state:?} state")]
    InvalidState {
        /// The method that was called.
        method: &'static str,
        /// The state the command was in.
        state: CommandState,
    },
}

impl HelixError {
    /// Create an argument-parse error.
    pub fn argument_parse(flag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ArgumentParse {
            flag: flag.into(),
            message: message.into(),
        }
    }
}

/// Result type for helix tool operations.
pub type Result<T> = std::result::Result<T, HelixError>;
