use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::inputs::CommunityProformaInputs;
use crate::financing::AverageBalanceMonthlyAccrual;
use crate::types::*;

/// Economics of one home built on a purchased lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase2PerHome {
    pub home_sales_price: Money,
    /// The Phase 1 lot sale price, paid by the home builder
    pub lot_cost: Money,
    pub vertical_cost: Money,
    pub construction_interest: Money,
    pub selling_costs: Money,
    pub seller_concession: Money,
    pub total_cost_per_home: Money,
    pub per_home_profit: Money,
    /// Zero when the home has no sale price
    pub per_home_margin: Rate,
}

/// Per-home figures scaled to the whole community.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase2ProjectTotals {
    pub homes: u32,
    pub total_revenue: Money,
    pub total_cost: Money,
    pub total_profit: Money,
    pub total_margin: Rate,
}

pub fn compute_per_home(input: &CommunityProformaInputs) -> Phase2PerHome {
    let construction_interest = AverageBalanceMonthlyAccrual.accrued_for_months(
        input.vertical_cost,
        input.construction_interest_rate,
        input.construction_months,
    );
    let selling_costs = input.home_sales_price * input.selling_cost_rate;
    let lot_cost = input.lot_sales_price;

    let total_cost_per_home = lot_cost
        + input.vertical_cost
        + construction_interest
        + selling_costs
        + input.seller_concession;
    let per_home_profit = input.home_sales_price - total_cost_per_home;

    Phase2PerHome {
        home_sales_price: input.home_sales_price,
        lot_cost,
        vertical_cost: input.vertical_cost,
        construction_interest,
        selling_costs,
        seller_concession: input.seller_concession,
        total_cost_per_home,
        per_home_profit,
        per_home_margin: ratio_or_zero(per_home_profit, input.home_sales_price),
    }
}

/// Multiply the per-home figures out across `homes` identical homes.
pub fn project_totals(per_home: &Phase2PerHome, homes: u32) -> Phase2ProjectTotals {
    let count = Decimal::from(homes);
    let total_revenue = per_home.home_sales_price * count;
    let total_cost = per_home.total_cost_per_home * count;
    let total_profit = per_home.per_home_profit * count;

    Phase2ProjectTotals {
        homes,
        total_revenue,
        total_cost,
        total_profit,
        total_margin: ratio_or_zero(total_profit, total_revenue),
    }
}
