use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::inputs::CommunityProformaInputs;
use crate::financing::{average_draw_reserve, equity_required, loan_amount};
use crate::types::*;

/// Horizontal development budget, capital stack and lot-sale margin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase1Results {
    pub land_value_total: Money,
    pub horizontal_dev_total: Money,
    pub ae_total: Money,
    pub carry_cost_total: Money,
    /// Per-lot costs × lots plus amenity package and monument sign
    pub subtotal_hard: Money,
    pub contingency: Money,
    pub cm_fee: Money,
    pub developer_fee: Money,
    pub interest_reserve: Money,
    pub total_uses: Money,
    pub senior_debt: Money,
    pub lp_equity: Money,
    pub lot_sales_proceeds: Money,
    pub gross_margin: Money,
    /// Gross margin over lot sale proceeds; zero when there are no proceeds
    pub gross_margin_pct: Rate,
}

pub fn compute_phase1(input: &CommunityProformaInputs) -> Phase1Results {
    let lots = Decimal::from(input.total_lots);

    let land_value_total = input.land_value_per_lot * lots;
    let horizontal_dev_total = input.horizontal_dev_per_lot * lots;
    let ae_total = input.ae_per_lot * lots;
    let carry_cost_total = input.carry_cost_per_lot * lots;

    let subtotal_hard = land_value_total
        + horizontal_dev_total
        + ae_total
        + carry_cost_total
        + input.amenity_package
        + input.monument_sign;
    let contingency = subtotal_hard * input.contingency_rate;
    let cm_fee = input.cm_fee_per_lot * lots;
    let developer_fee = input.developer_fee_per_lot * lots;
    let interest_reserve = average_draw_reserve(subtotal_hard + contingency, input.bank_interest_rate);

    let total_uses = subtotal_hard + contingency + cm_fee + developer_fee + interest_reserve;
    let senior_debt = loan_amount(total_uses, input.bank_ltc);
    let lp_equity = equity_required(total_uses, senior_debt);

    let lot_sales_proceeds = lots * input.lot_sales_price;
    let gross_margin = lot_sales_proceeds - total_uses;

    Phase1Results {
        land_value_total,
        horizontal_dev_total,
        ae_total,
        carry_cost_total,
        subtotal_hard,
        contingency,
        cm_fee,
        developer_fee,
        interest_reserve,
        total_uses,
        senior_debt,
        lp_equity,
        lot_sales_proceeds,
        gross_margin,
        gross_margin_pct: ratio_or_zero(gross_margin, lot_sales_proceeds),
    }
}
