//! Error types for the lighters scene.

use thiserror::Error;

/// Main error type shared by the lighter crates.
#[derive(Error, Debug)]
pub enum Error {
    /// A rotation axis with zero (or non-finite) length
    #[error("Invalid rotation axis: direction {0:?} has no usable length")]
    InvalidAxis([f64; 3]),

    /// Window creation or management errors
    #[error("Window error: {0}")]
    Window(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using the shared Error type.
pub type Result<T> = std::result::Result<T, Error>;
