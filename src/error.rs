use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item {0} is a placeholder and cannot be dragged")]
    NotDraggable(String),

    #[error("A drag session for {0} is already in progress")]
    SessionActive(String),

    #[error("Duplicate id on board: {0}")]
    DuplicateId(String),

    #[error("Board must have at least one container")]
    NoContainers,

    #[error("Seed not found: {0}")]
    SeedNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
