//! Error types for position calculation
//!
//! Only configuration errors are fatal. Placement errors are reported through
//! the log and the calculator falls back to a zero position.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// No formula registered under this placement name
    #[error("No function found for placement '{0}'")]
    UnknownPlacement(String),

    /// A caller-supplied formula failed (threw, or returned something that
    /// is not a position)
    #[error("Placement function for '{placement}' failed: {message}")]
    Formula { placement: String, message: String },

    /// Configuration could not be parsed
    #[error("Invalid position config: {0}")]
    Config(String),
}
