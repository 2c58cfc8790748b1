use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Minimum builder fee on any contract, regardless of job size.
pub const FLOOR_BUILDER_FEE: Money = dec!(25000);
/// Builder fee as a fraction of the sections 1–5 subtotal.
pub const BUILDER_FEE_RATE: Rate = dec!(0.10);
/// Maximum contingency reserve, regardless of job size.
pub const CONTINGENCY_CAP: Money = dec!(10000);
/// Contingency as a fraction of the sections 1–5 subtotal.
pub const CONTINGENCY_RATE: Rate = dec!(0.05);

/// Builder fee: 10% of the sections 1–5 subtotal, never below the floor.
pub fn builder_fee(sections_1_to_5: Money) -> Money {
    (sections_1_to_5 * BUILDER_FEE_RATE).max(FLOOR_BUILDER_FEE)
}

/// Contingency: 5% of the sections 1–5 subtotal, never above the cap.
pub fn contingency(sections_1_to_5: Money) -> Money {
    (sections_1_to_5 * CONTINGENCY_RATE).min(CONTINGENCY_CAP)
}

/// Subtotal at which the percentage builder fee overtakes the floor.
pub fn builder_fee_crossover() -> Money {
    FLOOR_BUILDER_FEE / BUILDER_FEE_RATE
}

/// Subtotal at which the percentage contingency reaches the cap.
pub fn contingency_crossover() -> Money {
    CONTINGENCY_CAP / CONTINGENCY_RATE
}
