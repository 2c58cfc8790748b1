use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::DealEconomicsError;
use crate::DealResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Largest amount accepted on any single money input.
pub const MAX_AMOUNT: Money = dec!(1000000000000);
/// Longest accepted deal duration in days (100 years).
pub const MAX_DURATION_DAYS: u32 = 36_500;
/// Longest accepted construction or investment period in months.
pub const MAX_DURATION_MONTHS: u32 = 1_200;
/// Largest accepted community size.
pub const MAX_LOTS: u32 = 1_000_000;

/// Sensitivity variable specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityVariable {
    pub name: String,
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Shared input checks
// ---------------------------------------------------------------------------

/// Reject negative or out-of-range monetary amounts.
pub(crate) fn ensure_amount(field: &str, value: Money) -> DealResult<()> {
    if value < Decimal::ZERO {
        return Err(DealEconomicsError::InvalidInput {
            field: field.into(),
            reason: "Amount cannot be negative".into(),
        });
    }
    if value > MAX_AMOUNT {
        return Err(DealEconomicsError::InvalidInput {
            field: field.into(),
            reason: format!("Amount exceeds the supported maximum of {MAX_AMOUNT}"),
        });
    }
    Ok(())
}

/// Reject counts and durations above `max`.
pub(crate) fn ensure_at_most(field: &str, value: u32, max: u32) -> DealResult<()> {
    if value > max {
        return Err(DealEconomicsError::InvalidInput {
            field: field.into(),
            reason: format!("{value} exceeds the supported maximum of {max}"),
        });
    }
    Ok(())
}

/// Reject rates outside the closed unit interval.
pub(crate) fn ensure_unit_rate(field: &str, value: Rate) -> DealResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(DealEconomicsError::InvalidInput {
            field: field.into(),
            reason: "Rate must be between 0 and 1".into(),
        });
    }
    Ok(())
}

/// `numerator / denominator`, or zero when the denominator is not positive.
///
/// Used for ratios against a sale price, where a missing price means the
/// ratio is not applicable rather than infinite.
/// A quotient too large to represent is also reported as zero.
pub fn ratio_or_zero(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}
