use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised at the edges of the board: id parsing, configuration and
/// snapshot export. Board mutations themselves never fail.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid column ID: {0:?}")]
    InvalidColumnId(String),

    #[error("Invalid case ID: {0:?}")]
    InvalidCaseId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
