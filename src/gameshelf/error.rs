use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Missing information: {0}")]
    Validation(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Image search failed: {0}")]
    ImageSearch(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
