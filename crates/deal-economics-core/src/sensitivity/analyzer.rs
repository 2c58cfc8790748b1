use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::solver::{price_for_margin, MINIMUM_ACCEPTABLE_MARGIN};
use crate::deal_sheet::{DealSheetInputs, DealSheetResult};
use crate::types::*;
use crate::DealResult;

// ---------------------------------------------------------------------------
// Scenario shocks
// ---------------------------------------------------------------------------

/// A deterministic perturbation of the deal assumptions.
///
/// `cost_factor` scales every construction and site cost (sections 1-5, site
/// work, other site costs); acquisition costs are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioShock {
    pub cost_factor: Decimal,
    pub price_factor: Decimal,
    pub extra_days: u32,
}

impl ScenarioShock {
    pub fn apply(&self, input: &DealSheetInputs) -> DealSheetInputs {
        let f = self.cost_factor;
        DealSheetInputs {
            sticks_and_bricks: input.sticks_and_bricks * f,
            upgrades: input.upgrades * f,
            soft_costs: input.soft_costs * f,
            land_prep: input.land_prep * f,
            site_specific: input.site_specific * f,
            site_work_total: input.site_work_total * f,
            other_site_costs: input.other_site_costs * f,
            asset_sales_price: input.asset_sales_price * self.price_factor,
            project_duration_days: input.project_duration_days.saturating_add(self.extra_days),
            ..input.clone()
        }
    }
}

pub const BEST_CASE: ScenarioShock = ScenarioShock {
    cost_factor: dec!(0.95),
    price_factor: dec!(1.05),
    extra_days: 0,
};

pub const WORST_CASE: ScenarioShock = ScenarioShock {
    cost_factor: dec!(1.05),
    price_factor: dec!(0.95),
    extra_days: 0,
};

pub const COST_OVERRUN_10: ScenarioShock = ScenarioShock {
    cost_factor: dec!(1.10),
    price_factor: Decimal::ONE,
    extra_days: 0,
};

pub const ASP_DECLINE_10: ScenarioShock = ScenarioShock {
    cost_factor: Decimal::ONE,
    price_factor: dec!(0.90),
    extra_days: 0,
};

pub const DELAY_30_DAYS: ScenarioShock = ScenarioShock {
    cost_factor: Decimal::ONE,
    price_factor: Decimal::ONE,
    extra_days: 30,
};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub base: DealSheetResult,
    pub best_case: DealSheetResult,
    pub worst_case: DealSheetResult,
    pub cost_overrun_10: DealSheetResult,
    pub asp_decline_10: DealSheetResult,
    pub delay_30_days: DealSheetResult,
    /// Sale price at which net profit is zero
    pub breakeven_asp: Money,
    /// Sale price at which the net profit margin is 5%
    pub minimum_asp_5pct: Money,
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

/// Stress a deal against fixed scenarios and solve its breakeven prices.
///
/// Fails with `InvalidRate` when the selling cost rate leaves no finite
/// breakeven or 5%-margin price.
pub fn run_sensitivity_analysis(
    input: &DealSheetInputs,
) -> DealResult<ComputationOutput<SensitivityResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.validate()?;

    let base = DealSheetResult::compute(input);
    let breakeven_asp = price_for_margin(input, &base, Decimal::ZERO)?;
    let minimum_asp_5pct = price_for_margin(input, &base, MINIMUM_ACCEPTABLE_MARGIN)?;

    let run = |shock: &ScenarioShock| DealSheetResult::compute(&shock.apply(input));

    let output = SensitivityResult {
        best_case: run(&BEST_CASE),
        worst_case: run(&WORST_CASE),
        cost_overrun_10: run(&COST_OVERRUN_10),
        asp_decline_10: run(&ASP_DECLINE_10),
        delay_30_days: run(&DELAY_30_DAYS),
        base,
        breakeven_asp,
        minimum_asp_5pct,
    };

    if input.asset_sales_price < breakeven_asp {
        warnings.push(format!(
            "Asset sales price {} is below the breakeven price {}",
            input.asset_sales_price,
            breakeven_asp.round_dp(2)
        ));
    }
    if output.worst_case.net_profit < Decimal::ZERO && output.base.net_profit >= Decimal::ZERO {
        warnings.push("Deal turns loss-making in the worst case".into());
    }
    for warning in &warnings {
        tracing::warn!(%warning, "sensitivity");
    }

    tracing::debug!(
        base_net_profit = %output.base.net_profit,
        best_net_profit = %output.best_case.net_profit,
        worst_net_profit = %output.worst_case.net_profit,
        breakeven_asp = %output.breakeven_asp,
        minimum_asp_5pct = %output.minimum_asp_5pct,
        "sensitivity analysis complete"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Deal Sheet Scenario Sensitivity with Closed-Form Breakeven",
        &serde_json::json!({
            "asset_sales_price": input.asset_sales_price.to_string(),
            "selling_cost_rate": input.selling_cost_rate.to_string(),
            "best_case": BEST_CASE,
            "worst_case": WORST_CASE,
            "cost_overrun": COST_OVERRUN_10,
            "asp_decline": ASP_DECLINE_10,
            "delay": DELAY_30_DAYS,
            "minimum_margin": MINIMUM_ACCEPTABLE_MARGIN.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}
