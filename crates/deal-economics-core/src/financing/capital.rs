use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

/// Share of a drawn facility assumed outstanding on average over its term.
pub const AVERAGE_DRAW_FACTOR: Rate = dec!(0.5);

/// Debt sized as a fraction of total cost.
pub fn loan_amount(total_project_cost: Money, ltc_ratio: Rate) -> Money {
    total_project_cost * ltc_ratio
}

/// Equity funds whatever the loan does not.
pub fn equity_required(total_project_cost: Money, loan_amount: Money) -> Money {
    total_project_cost - loan_amount
}

/// Interest reserve on a development line drawn evenly over one rate period.
///
/// `budget × rate × 0.5`: half the budget is outstanding on average. This is
/// a draw-schedule approximation, not a day count.
pub fn average_draw_reserve(budget: Money, annual_rate: Rate) -> Money {
    budget * annual_rate * AVERAGE_DRAW_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_loan_and_equity_split() {
        let loan = loan_amount(dec!(388900), dec!(0.85));
        assert_eq!(loan, dec!(330565));
        assert_eq!(equity_required(dec!(388900), loan), dec!(58335));
    }

    #[test]
    fn test_zero_ltc_is_all_equity() {
        let loan = loan_amount(dec!(100000), Decimal::ZERO);
        assert_eq!(loan, Decimal::ZERO);
        assert_eq!(equity_required(dec!(100000), loan), dec!(100000));
    }

    #[test]
    fn test_average_draw_reserve() {
        // 1,000,000 × 8% × 0.5
        assert_eq!(average_draw_reserve(dec!(1000000), dec!(0.08)), dec!(40000));
    }
}
