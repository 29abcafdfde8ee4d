use thiserror::Error;

/// Rejections raised while turning user input into a [`Record`](crate::model::Record).
///
/// Nothing is mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} is invalid: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    #[error("Stock adjustment amount must be greater than zero")]
    ZeroAmount,

    #[error("{field} is out of range")]
    Overflow { field: &'static str },
}

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Item with ID {0} not found")]
    NotFound(u64),

    #[error("An item with ID {0} already exists")]
    DuplicateId(u64),

    #[error("Cannot apply {delta} to item {id}: only {quantity} in stock")]
    WouldGoNegative { id: u64, quantity: i64, delta: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
