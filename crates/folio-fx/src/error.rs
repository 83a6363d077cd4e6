//! Error types for the effects engines

use thiserror::Error;

/// Errors raised by the engines and the GPU renderer.
///
/// A missing DOM target is not an error: initializers skip it and carry on.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FolioError {
    /// Configuration JSON could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Configuration parsed but holds unusable values.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// GPU adapter, device or pipeline setup failed.
    #[error("gpu error: {0}")]
    Gpu(String),

    /// The render surface could not produce a frame.
    #[error("surface error: {0}")]
    Surface(String),

    /// The platform random source failed while seeding particles.
    #[error("entropy error: {0}")]
    Entropy(String),
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        FolioError::Config(e.to_string())
    }
}
