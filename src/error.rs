use thiserror::Error;

/// Errors that can occur while producing the signature bitmap
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Errors that can occur while writing a signature to disk
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to write signature: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors that can occur while loading a [`crate::SignatureConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = SignatureError> = std::result::Result<T, E>;
