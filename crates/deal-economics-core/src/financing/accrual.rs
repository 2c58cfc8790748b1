//! Interest accrual conventions.
//!
//! The deal sheet finances a single bullet construction loan and prices it
//! actual/360. The community proforma funds homes from a revolving line drawn
//! monthly and prices it on an average balance over months/12. The two
//! conventions produce different figures for the same nominal inputs and are
//! kept as separate strategies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::capital::AVERAGE_DRAW_FACTOR;
use crate::types::{Money, Rate};

/// A rule for turning a principal, an annual rate and an elapsed period into
/// an accrued financing cost.
pub trait AccrualConvention {
    /// Number of periods in one year (360 days, 12 months, ...).
    fn periods_per_year(&self) -> Decimal;

    /// Fraction of the principal outstanding on average.
    fn balance_factor(&self) -> Decimal {
        Decimal::ONE
    }

    /// Human-readable convention name
    fn name(&self) -> &'static str;

    /// `principal × balance_factor × rate × periods / periods_per_year`.
    ///
    /// A zero or negative period accrues nothing.
    fn accrued_cost(&self, principal: Money, annual_rate: Rate, periods: Decimal) -> Money {
        if periods <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        principal * self.balance_factor() * annual_rate * periods / self.periods_per_year()
    }
}

/// Literal elapsed days over a 360-day year.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360Accrual;

impl Actual360Accrual {
    pub fn accrued_for_days(&self, principal: Money, annual_rate: Rate, days: u32) -> Money {
        self.accrued_cost(principal, annual_rate, Decimal::from(days))
    }
}

impl AccrualConvention for Actual360Accrual {
    fn periods_per_year(&self) -> Decimal {
        dec!(360)
    }

    fn name(&self) -> &'static str {
        "Actual/360"
    }
}

/// Half the principal outstanding on average, months over a 12-month year.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageBalanceMonthlyAccrual;

impl AverageBalanceMonthlyAccrual {
    pub fn accrued_for_months(&self, principal: Money, annual_rate: Rate, months: u32) -> Money {
        self.accrued_cost(principal, annual_rate, Decimal::from(months))
    }
}

impl AccrualConvention for AverageBalanceMonthlyAccrual {
    fn periods_per_year(&self) -> Decimal {
        dec!(12)
    }

    fn balance_factor(&self) -> Decimal {
        AVERAGE_DRAW_FACTOR
    }

    fn name(&self) -> &'static str {
        "Average balance, months/12"
    }
}

/// Elapsed calendar days from `start` to `end`, zero if `end` precedes `start`.
pub fn actual_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}
