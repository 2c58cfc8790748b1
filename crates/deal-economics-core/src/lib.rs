pub mod error;
pub mod fees;
pub mod financing;
pub mod types;

#[cfg(feature = "deal_sheet")]
pub mod deal_sheet;

#[cfg(feature = "sensitivity")]
pub mod sensitivity;

#[cfg(feature = "community")]
pub mod community;

pub use error::DealEconomicsError;
pub use types::*;

/// Standard result type for all deal-economics operations
pub type DealResult<T> = Result<T, DealEconomicsError>;
