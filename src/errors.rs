//! Shared error types used across modules.

use thiserror::Error;

/// Failure modes of the interface formulas.
#[derive(Debug, Error)]
pub enum FresnelError {
    /// Raised when an angle places the light behind the interface.
    #[error("invalid angle: {0}")]
    InvalidAngle(String),
    /// Raised when no real transmitted angle exists for the given inputs.
    #[error("total internal reflection: {0}")]
    TotalInternalReflection(String),
}
