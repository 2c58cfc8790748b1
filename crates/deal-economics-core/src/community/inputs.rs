use serde::{Deserialize, Serialize};

use crate::types::*;
use crate::DealResult;

/// Assumptions for a multi-lot community: horizontal land development
/// (Phase 1), vertical home construction (Phase 2) and the LP fund terms.
///
/// Phase 2 assumes every home in the community is identical.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommunityProformaInputs {
    pub total_lots: u32,

    // --- Phase 1: per-lot costs ---
    pub land_value_per_lot: Money,
    pub horizontal_dev_per_lot: Money,
    /// Architecture & engineering
    pub ae_per_lot: Money,
    pub carry_cost_per_lot: Money,

    // --- Phase 1: flat costs ---
    #[serde(default)]
    pub amenity_package: Money,
    #[serde(default)]
    pub monument_sign: Money,

    pub contingency_rate: Rate,
    /// Construction-management fee
    pub cm_fee_per_lot: Money,
    pub developer_fee_per_lot: Money,
    pub lot_sales_price: Money,

    // --- Phase 1: financing ---
    pub bank_ltc: Rate,
    pub bank_interest_rate: Rate,
    /// Fund terms recorded with the deal; the single-tier waterfall does not read them
    #[serde(default)]
    pub lp_pref_return: Rate,
    #[serde(default)]
    pub lp_buyout_irr: Rate,

    // --- Phase 2: per home ---
    pub home_sales_price: Money,
    pub selling_cost_rate: Rate,
    #[serde(default)]
    pub seller_concession: Money,
    pub vertical_cost: Money,
    pub construction_interest_rate: Rate,
    pub construction_months: u32,

    // --- LP fund ---
    pub lp_accruing_return_rate: Rate,
    pub lp_investment_period_months: u32,
    /// Fraction of the residual paid to each GP
    pub gp_split_pct: Rate,
}

impl CommunityProformaInputs {
    pub fn validate(&self) -> DealResult<()> {
        for (field, value) in [
            ("land_value_per_lot", self.land_value_per_lot),
            ("horizontal_dev_per_lot", self.horizontal_dev_per_lot),
            ("ae_per_lot", self.ae_per_lot),
            ("carry_cost_per_lot", self.carry_cost_per_lot),
            ("amenity_package", self.amenity_package),
            ("monument_sign", self.monument_sign),
            ("cm_fee_per_lot", self.cm_fee_per_lot),
            ("developer_fee_per_lot", self.developer_fee_per_lot),
            ("lot_sales_price", self.lot_sales_price),
            ("home_sales_price", self.home_sales_price),
            ("seller_concession", self.seller_concession),
            ("vertical_cost", self.vertical_cost),
        ] {
            ensure_amount(field, value)?;
        }
        for (field, value) in [
            ("contingency_rate", self.contingency_rate),
            ("bank_ltc", self.bank_ltc),
            ("bank_interest_rate", self.bank_interest_rate),
            ("lp_pref_return", self.lp_pref_return),
            ("lp_buyout_irr", self.lp_buyout_irr),
            ("selling_cost_rate", self.selling_cost_rate),
            ("construction_interest_rate", self.construction_interest_rate),
            ("lp_accruing_return_rate", self.lp_accruing_return_rate),
            ("gp_split_pct", self.gp_split_pct),
        ] {
            ensure_unit_rate(field, value)?;
        }
        ensure_at_most("total_lots", self.total_lots, MAX_LOTS)?;
        for (field, value) in [
            ("construction_months", self.construction_months),
            ("lp_investment_period_months", self.lp_investment_period_months),
        ] {
            ensure_at_most(field, value, MAX_DURATION_MONTHS)?;
        }
        Ok(())
    }
}
