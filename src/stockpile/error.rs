use thiserror::Error;

/// Why an inventory operation refused to touch the collection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("product id cannot be empty")]
    EmptyId,

    #[error("a product with id '{0}' already exists")]
    DuplicateId(String),

    #[error("product name cannot be empty")]
    EmptyName,

    #[error("quantity cannot be negative (got {0})")]
    NegativeQuantity(i64),

    #[error("price cannot be negative (got {0})")]
    NegativePrice(f64),

    #[error("price must be a finite number")]
    InvalidPrice,

    #[error("{0} cannot contain control characters")]
    ControlCharacter(&'static str),

    #[error("id '{id}' cannot be stored in this format: {reason}")]
    UnstorableId { id: String, reason: &'static str },
}

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
