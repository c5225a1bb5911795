/// Errors raised while loading or validating a scene configuration
use std::io;

/// Anything that can go wrong outside the projection path
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read
    #[error("failed to read scene config: {0}")]
    Io(#[from] io::Error),
    /// The configuration is not valid JSON for a `SceneConfig`
    #[error("failed to parse scene config: {0}")]
    Json(#[from] serde_json::Error),
    /// The configuration parsed but holds values the engine cannot use
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
