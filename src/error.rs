//! Top-level error type for the `storefront_cart` binary.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Terminal or socket I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
