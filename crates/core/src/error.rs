//! Error types for TrekAtlas

use thiserror::Error;

/// Main error type for TrekAtlas operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Trail '{0}' not found")]
    TrailNotFound(String),

    #[error("Duplicate trail id '{0}' in catalog")]
    DuplicateTrailId(String),

    #[error("Invalid trail '{id}': {reason}")]
    InvalidTrail { id: String, reason: String },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for TrekAtlas operations
pub type Result<T> = std::result::Result<T, Error>;
