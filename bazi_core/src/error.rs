//! Error types for the bazi_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bazi_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Birth input could not be parsed or names an impossible date/time
    #[error("Invalid birth input: {0}")]
    InvalidInput(String),

    /// A pillar that is not one of the sixty sexagenary pairs
    #[error("'{0}' is not one of the sixty sexagenary pairs")]
    PillarNotFound(String),
}
