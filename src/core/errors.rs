use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum SplitroomError {
    /// A payment or conversion referenced a currency missing from the rate table
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// The exchange-rate provider could not be reached or answered with an error
    #[error("Rate fetch failed: {0}")]
    RateFetch(String),

    #[error("Room {0} not found")]
    RoomNotFound(String),

    #[error("Member {0} not found")]
    MemberNotFound(String),

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),
}
