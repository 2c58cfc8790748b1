use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealEconomicsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    /// A rate that makes a closed-form solve undefined (e.g. selling costs
    /// consuming the whole sale price).
    #[error("Invalid rate: {field} = {rate} — {reason}")]
    InvalidRate {
        field: String,
        rate: Decimal,
        reason: String,
    },

    /// Organisation configuration (fee schedule) that cannot be used.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DealEconomicsError {
    fn from(e: serde_json::Error) -> Self {
        DealEconomicsError::SerializationError(e.to_string())
    }
}
