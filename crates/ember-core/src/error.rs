//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Renderer unavailable: {0}")]
    RendererUnavailable(String),

    #[error("Draw error: {0}")]
    Draw(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Config serialization error: {0}")]
    ConfigSer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::ConfigParse(err.to_string())
    }
}

impl From<toml::ser::Error> for EmberError {
    fn from(err: toml::ser::Error) -> Self {
        EmberError::ConfigSer(err.to_string())
    }
}
