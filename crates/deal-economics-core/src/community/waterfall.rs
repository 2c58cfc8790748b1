use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::inputs::CommunityProformaInputs;
use super::phase1::Phase1Results;
use super::phase2::Phase2ProjectTotals;
use crate::types::*;

/// Single-tier LP/GP distribution for the community fund.
///
/// The GP rolls a positive land margin forward as equity, the LP funds the
/// rest of the lot purchase and earns a flat accruing return, and what is
/// left of the Phase 2 profit is split among the GPs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpWaterfall {
    /// Positive Phase 1 gross margin; a loss rolls forward as zero
    pub gp_rolled_equity: Money,
    pub total_lot_cost: Money,
    pub sl_fund_lp_capital: Money,
    pub lp_accrued_return: Money,
    pub total_lp_payout: Money,
    pub remaining_to_gps: Money,
    pub gp_share: Money,
    /// Total LP payout over LP capital; zero when no capital is contributed
    pub lp_equity_multiple: Decimal,
}

pub fn compute_lp_waterfall(
    input: &CommunityProformaInputs,
    phase1: &Phase1Results,
    totals: &Phase2ProjectTotals,
) -> LpWaterfall {
    let gp_rolled_equity = phase1.gross_margin.max(Decimal::ZERO);
    let total_lot_cost = Decimal::from(input.total_lots) * input.lot_sales_price;
    let sl_fund_lp_capital = total_lot_cost - gp_rolled_equity;

    let years = Decimal::from(input.lp_investment_period_months) / Decimal::from(12);
    let lp_accrued_return = sl_fund_lp_capital * input.lp_accruing_return_rate * years;
    let total_lp_payout = sl_fund_lp_capital + lp_accrued_return;

    let remaining_to_gps = totals.total_profit - lp_accrued_return;
    let gp_share = remaining_to_gps * input.gp_split_pct;

    LpWaterfall {
        gp_rolled_equity,
        total_lot_cost,
        sl_fund_lp_capital,
        lp_accrued_return,
        total_lp_payout,
        remaining_to_gps,
        gp_share,
        lp_equity_multiple: ratio_or_zero(total_lp_payout, sl_fund_lp_capital),
    }
}
