use std::io;

/// All error types for the model loader.
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Material error: {0}")]
    Material(String),
    #[error("Texture error: {0}")]
    Texture(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ModelError>;
