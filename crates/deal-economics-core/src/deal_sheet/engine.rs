use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::verdict::{land_verdict, profit_verdict, Verdict};
use crate::fees::{builder_fee, contingency, fixed_per_house_fee, FeeSchedule, OwnershipRelation};
use crate::financing::{equity_required, loan_amount, Actual360Accrual};
use crate::types::*;
use crate::DealResult;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Underwriting assumptions for a single lot / single home deal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealSheetInputs {
    // --- Acquisition ---
    pub lot_purchase_price: Money,
    pub closing_costs: Money,
    #[serde(default)]
    pub acquisition_commission: Money,
    #[serde(default)]
    pub acquisition_bonus: Money,
    #[serde(default)]
    pub other_lot_costs: Money,

    // --- Construction (sections 1-5) ---
    pub sticks_and_bricks: Money,
    #[serde(default)]
    pub upgrades: Money,
    pub soft_costs: Money,
    pub land_prep: Money,
    #[serde(default)]
    pub site_specific: Money,

    // --- Site ---
    pub site_work_total: Money,
    #[serde(default)]
    pub other_site_costs: Money,

    /// Gates the asset-management line of the fee schedule
    #[serde(default, alias = "is_rch_related_owner")]
    pub ownership: OwnershipRelation,

    // --- Sale ---
    pub asset_sales_price: Money,
    /// Fraction of the sale price paid as selling costs (commissions, closing)
    pub selling_cost_rate: Rate,
    #[serde(default)]
    pub selling_concessions: Money,

    // --- Financing ---
    /// Loan-to-cost ratio
    pub ltc_ratio: Rate,
    /// Annual interest rate on the construction loan
    pub interest_rate: Rate,
    /// Annual cost of capital charged on equity
    pub cost_of_capital_rate: Rate,
    /// Elapsed days from lot close to home sale
    pub project_duration_days: u32,

    /// Organisation per-house fees; the standard schedule when omitted
    #[serde(default)]
    pub fee_schedule: FeeSchedule,
}

impl DealSheetInputs {
    /// Check the documented domain: money in [0, `MAX_AMOUNT`], rates within
    /// [0, 1], duration at most `MAX_DURATION_DAYS`.
    pub fn validate(&self) -> DealResult<()> {
        for (field, value) in [
            ("lot_purchase_price", self.lot_purchase_price),
            ("closing_costs", self.closing_costs),
            ("acquisition_commission", self.acquisition_commission),
            ("acquisition_bonus", self.acquisition_bonus),
            ("other_lot_costs", self.other_lot_costs),
            ("sticks_and_bricks", self.sticks_and_bricks),
            ("upgrades", self.upgrades),
            ("soft_costs", self.soft_costs),
            ("land_prep", self.land_prep),
            ("site_specific", self.site_specific),
            ("site_work_total", self.site_work_total),
            ("other_site_costs", self.other_site_costs),
            ("asset_sales_price", self.asset_sales_price),
            ("selling_concessions", self.selling_concessions),
        ] {
            ensure_amount(field, value)?;
        }
        for (field, value) in [
            ("selling_cost_rate", self.selling_cost_rate),
            ("ltc_ratio", self.ltc_ratio),
            ("interest_rate", self.interest_rate),
            ("cost_of_capital_rate", self.cost_of_capital_rate),
        ] {
            ensure_unit_rate(field, value)?;
        }
        ensure_at_most(
            "project_duration_days",
            self.project_duration_days,
            MAX_DURATION_DAYS,
        )?;
        self.fee_schedule.validate()
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Full underwriting roll-up for a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealSheetResult {
    pub total_lot_basis: Money,
    /// Sticks & bricks + upgrades + soft costs + land prep + site specific
    pub sections_1_to_5: Money,
    pub builder_fee: Money,
    pub contingency: Money,
    pub total_contract_cost: Money,
    pub total_fixed_per_house: Money,
    pub total_project_cost: Money,
    pub loan_amount: Money,
    pub equity_required: Money,
    pub interest_cost: Money,
    pub cost_of_capital_amount: Money,
    pub selling_costs: Money,
    pub net_proceeds: Money,
    pub net_profit: Money,
    /// Zero when there is no sale price (not applicable, not break-even)
    pub net_profit_margin: Rate,
    /// Zero when there is no sale price
    pub land_cost_ratio: Rate,
    pub profit_verdict: Verdict,
    pub land_verdict: Verdict,
}

impl DealSheetResult {
    /// Run the underwriting pipeline. Total over any numeric input.
    pub fn compute(input: &DealSheetInputs) -> Self {
        let total_lot_basis = input.lot_purchase_price
            + input.closing_costs
            + input.acquisition_commission
            + input.acquisition_bonus
            + input.other_lot_costs;

        let sections_1_to_5 = input.sticks_and_bricks
            + input.upgrades
            + input.soft_costs
            + input.land_prep
            + input.site_specific;

        let builder_fee = builder_fee(sections_1_to_5);
        let contingency = contingency(sections_1_to_5);
        let total_contract_cost = sections_1_to_5 + builder_fee + contingency;

        let total_fixed_per_house = fixed_per_house_fee(&input.fee_schedule, input.ownership);

        let total_project_cost = total_lot_basis
            + total_contract_cost
            + total_fixed_per_house
            + input.site_work_total
            + input.other_site_costs;

        let loan_amount = loan_amount(total_project_cost, input.ltc_ratio);
        let equity_required = equity_required(total_project_cost, loan_amount);

        let accrual = Actual360Accrual;
        let interest_cost =
            accrual.accrued_for_days(loan_amount, input.interest_rate, input.project_duration_days);
        let cost_of_capital_amount = accrual.accrued_for_days(
            equity_required,
            input.cost_of_capital_rate,
            input.project_duration_days,
        );

        let selling_costs = input.asset_sales_price * input.selling_cost_rate;
        let net_proceeds = input.asset_sales_price - selling_costs - input.selling_concessions;
        let net_profit =
            net_proceeds - (total_project_cost + interest_cost + cost_of_capital_amount);

        let net_profit_margin = ratio_or_zero(net_profit, input.asset_sales_price);
        let land_cost_ratio = ratio_or_zero(
            total_lot_basis + input.site_work_total + input.other_site_costs,
            input.asset_sales_price,
        );

        DealSheetResult {
            total_lot_basis,
            sections_1_to_5,
            builder_fee,
            contingency,
            total_contract_cost,
            total_fixed_per_house,
            total_project_cost,
            loan_amount,
            equity_required,
            interest_cost,
            cost_of_capital_amount,
            selling_costs,
            net_proceeds,
            net_profit,
            net_profit_margin,
            land_cost_ratio,
            profit_verdict: profit_verdict(net_profit_margin),
            land_verdict: land_verdict(land_cost_ratio),
        }
    }

    /// Every cost that must be recovered from the sale before profit:
    /// project cost, interest and cost of capital.
    pub fn all_in_cost(&self) -> Money {
        self.total_project_cost + self.interest_cost + self.cost_of_capital_amount
    }
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Underwrite a single-asset deal.
///
/// Rolls acquisition, contract, fixed per-house and site costs into a total
/// project cost, finances it on an LTC split accruing actual/360, nets the
/// sale price of selling costs and concessions, and classifies the resulting
/// margin and land cost ratio.
pub fn calculate_deal_sheet(
    input: &DealSheetInputs,
) -> DealResult<ComputationOutput<DealSheetResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.validate()?;

    let output = DealSheetResult::compute(input);

    if input.asset_sales_price.is_zero() {
        warnings.push(
            "Asset sales price is zero; net profit margin and land cost ratio are reported as 0 (not applicable)"
                .into(),
        );
    }
    if input.project_duration_days == 0 {
        warnings.push("Project duration is zero days; no interest or cost of capital accrued".into());
    }
    for warning in &warnings {
        tracing::warn!(%warning, "deal sheet");
    }

    tracing::debug!(
        total_project_cost = %output.total_project_cost,
        net_profit = %output.net_profit,
        net_profit_margin = %output.net_profit_margin,
        profit_verdict = %output.profit_verdict,
        land_verdict = %output.land_verdict,
        "deal sheet calculated"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Deal Sheet Underwriting (Actual/360 financing)",
        &serde_json::json!({
            "asset_sales_price": input.asset_sales_price.to_string(),
            "selling_cost_rate": input.selling_cost_rate.to_string(),
            "ltc_ratio": input.ltc_ratio.to_string(),
            "interest_rate": input.interest_rate.to_string(),
            "cost_of_capital_rate": input.cost_of_capital_rate.to_string(),
            "project_duration_days": input.project_duration_days,
            "ownership": input.ownership,
            "day_count": "Actual/360",
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
