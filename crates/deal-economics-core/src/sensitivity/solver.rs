//! Closed-form sale price solves.
//!
//! Every cost line of the deal sheet is independent of the sale price, and
//! selling costs are linear in it, so net profit is affine in the price:
//!
//! `profit(P) = P × (1 − s) − concessions − all_in_cost`
//!
//! Requiring `profit(P) = m × P` for a target margin `m` gives
//! `P = (all_in_cost + concessions) / (1 − s − m)`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::deal_sheet::{DealSheetInputs, DealSheetResult};
use crate::error::DealEconomicsError;
use crate::types::{Money, Rate};
use crate::DealResult;

/// Margin the minimum-price solve targets by default.
pub const MINIMUM_ACCEPTABLE_MARGIN: Rate = dec!(0.05);

/// Sale price at which net profit is exactly zero.
pub fn solve_breakeven_asp(input: &DealSheetInputs) -> DealResult<Money> {
    input.validate()?;
    let base = DealSheetResult::compute(input);
    price_for_margin(input, &base, Decimal::ZERO)
}

/// Sale price at which the net profit margin equals `target_margin`.
pub fn solve_minimum_asp(input: &DealSheetInputs, target_margin: Rate) -> DealResult<Money> {
    input.validate()?;
    let base = DealSheetResult::compute(input);
    price_for_margin(input, &base, target_margin)
}

/// Solve against an already computed base run of the same inputs.
pub(crate) fn price_for_margin(
    input: &DealSheetInputs,
    base: &DealSheetResult,
    target_margin: Rate,
) -> DealResult<Money> {
    let no_finite_price = || DealEconomicsError::InvalidRate {
        field: "selling_cost_rate".into(),
        rate: input.selling_cost_rate,
        reason: format!(
            "Selling costs plus a {target_margin} margin leave no proceeds to cover cost; no finite sale price exists"
        ),
    };

    let denominator = Decimal::ONE
        .checked_sub(input.selling_cost_rate)
        .and_then(|d| d.checked_sub(target_margin))
        .ok_or_else(no_finite_price)?;
    if denominator <= Decimal::ZERO {
        return Err(no_finite_price());
    }
    (base.all_in_cost() + input.selling_concessions)
        .checked_div(denominator)
        .ok_or_else(no_finite_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal() -> DealSheetInputs {
        DealSheetInputs {
            lot_purchase_price: dec!(80000),
            closing_costs: dec!(3000),
            sticks_and_bricks: dec!(180000),
            upgrades: dec!(25000),
            soft_costs: dec!(10000),
            land_prep: dec!(5000),
            site_work_total: dec!(12510),
            other_site_costs: dec!(2500),
            asset_sales_price: dec!(450000),
            selling_cost_rate: dec!(0.085),
            selling_concessions: dec!(5000),
            ltc_ratio: dec!(0.85),
            interest_rate: dec!(0.10),
            cost_of_capital_rate: dec!(0.16),
            project_duration_days: 120,
            ..Default::default()
        }
    }

    #[test]
    fn test_breakeven_round_trips_to_zero_profit() {
        let input = deal();
        let breakeven = solve_breakeven_asp(&input).unwrap();
        let rerun = DealSheetResult::compute(&DealSheetInputs {
            asset_sales_price: breakeven,
            ..input
        });
        assert!(rerun.net_profit.abs() < dec!(1), "profit {}", rerun.net_profit);
    }

    #[test]
    fn test_breakeven_closed_form() {
        // (388,900 + 11,018.83 + 3,111.20 + 5,000) / 0.915
        let breakeven = solve_breakeven_asp(&deal()).unwrap();
        assert!((breakeven - dec!(445934.46)).abs() < dec!(0.01), "got {breakeven}");
    }

    #[test]
    fn test_target_margin_round_trip() {
        let input = deal();
        let price = solve_minimum_asp(&input, dec!(0.08)).unwrap();
        let rerun = DealSheetResult::compute(&DealSheetInputs {
            asset_sales_price: price,
            ..input
        });
        assert!((rerun.net_profit_margin - dec!(0.08)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_breakeven_ignores_current_price() {
        let a = solve_breakeven_asp(&deal()).unwrap();
        let b = solve_breakeven_asp(&DealSheetInputs {
            asset_sales_price: dec!(1),
            ..deal()
        })
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_selling_rate() {
        let input = DealSheetInputs {
            selling_cost_rate: Decimal::ONE,
            ..deal()
        };
        match solve_breakeven_asp(&input).unwrap_err() {
            DealEconomicsError::InvalidRate { field, rate, .. } => {
                assert_eq!(field, "selling_cost_rate");
                assert_eq!(rate, Decimal::ONE);
            }
            other => panic!("Expected InvalidRate, got: {other:?}"),
        }
    }

    #[test]
    fn test_minimum_margin_degenerate_before_breakeven() {
        let input = DealSheetInputs {
            selling_cost_rate: dec!(0.96),
            ..deal()
        };
        assert!(solve_breakeven_asp(&input).is_ok());
        assert!(solve_minimum_asp(&input, MINIMUM_ACCEPTABLE_MARGIN).is_err());
    }

    #[test]
    fn test_solvers_validate_inputs() {
        let input = DealSheetInputs {
            closing_costs: dec!(-1),
            ..deal()
        };
        assert!(matches!(
            solve_breakeven_asp(&input),
            Err(DealEconomicsError::InvalidInput { .. })
        ));
        assert!(matches!(
            solve_minimum_asp(&input, MINIMUM_ACCEPTABLE_MARGIN),
            Err(DealEconomicsError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_vanishing_denominator_is_a_rate_error() {
        // 1 - s is the smallest positive Decimal; the quotient cannot be represented
        let input = DealSheetInputs {
            selling_cost_rate: Decimal::ONE - Decimal::new(1, 28),
            ..deal()
        };
        assert!(matches!(
            solve_breakeven_asp(&input),
            Err(DealEconomicsError::InvalidRate { .. })
        ));
    }
}
