use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
