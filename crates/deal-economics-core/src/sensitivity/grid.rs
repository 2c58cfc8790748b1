use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::analyzer::ScenarioShock;
use crate::deal_sheet::{DealSheetInputs, DealSheetResult};
use crate::error::DealEconomicsError;
use crate::types::*;
use crate::DealResult;

/// Upper bound on sweep points per axis.
const MAX_SWEEP_POINTS: usize = 201;

/// Deal sheet figure reported in each grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridMetric {
    NetProfit,
    NetProfitMargin,
}

impl GridMetric {
    fn read(&self, result: &DealSheetResult) -> Decimal {
        match self {
            GridMetric::NetProfit => result.net_profit,
            GridMetric::NetProfitMargin => result.net_profit_margin,
        }
    }
}

/// Input for a 2-way sale price × construction cost sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceCostGridInput {
    pub base_inputs: DealSheetInputs,
    /// Absolute asset sales prices to sweep
    pub sales_price: SensitivityVariable,
    /// Multipliers applied to construction and site costs (1.0 = base)
    pub cost_factor: SensitivityVariable,
    pub metric: GridMetric,
}

/// Output of the 2-way sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceCostGridOutput {
    pub sales_price_values: Vec<Decimal>,
    pub cost_factor_values: Vec<Decimal>,
    pub metric: GridMetric,
    /// Matrix[i][j] = metric when price = sales_price_values[i], cost factor = cost_factor_values[j]
    pub matrix: Vec<Vec<Decimal>>,
    /// Metric for the unshocked base inputs
    pub base_case_value: Decimal,
    /// Cell nearest the base price and a 1.0 cost factor (row, col)
    pub base_case_position: (usize, usize),
}

/// Generate the sweep values for a sensitivity variable from min to max with step.
fn generate_sweep_values(var: &SensitivityVariable) -> DealResult<Vec<Decimal>> {
    if var.step <= Decimal::ZERO {
        return Err(DealEconomicsError::InvalidInput {
            field: format!("variable:{}", var.name),
            reason: "Step must be positive".into(),
        });
    }
    if var.min > var.max {
        return Err(DealEconomicsError::InvalidInput {
            field: format!("variable:{}", var.name),
            reason: "Min must be <= max".into(),
        });
    }
    if var.min < Decimal::ZERO {
        return Err(DealEconomicsError::InvalidInput {
            field: format!("variable:{}", var.name),
            reason: "Sweep values cannot be negative".into(),
        });
    }
    if var.max > MAX_AMOUNT {
        return Err(DealEconomicsError::InvalidInput {
            field: format!("variable:{}", var.name),
            reason: format!("Sweep values cannot exceed {MAX_AMOUNT}"),
        });
    }

    let too_many = || DealEconomicsError::InvalidInput {
        field: format!("variable:{}", var.name),
        reason: format!("Sweep exceeds {MAX_SWEEP_POINTS} points"),
    };

    let mut values = Vec::new();
    let mut current = var.min;
    while current <= var.max {
        if values.len() == MAX_SWEEP_POINTS {
            return Err(too_many());
        }
        values.push(current);
        match current.checked_add(var.step) {
            Some(next) => current = next,
            None => break,
        }
    }
    // Ensure max is included if step doesn't land exactly on it
    if let Some(&last) = values.last() {
        if last < var.max {
            values.push(var.max);
        }
    }
    if values.len() > MAX_SWEEP_POINTS {
        return Err(too_many());
    }

    Ok(values)
}

/// Find the closest index to a target value.
fn closest_index(values: &[Decimal], target: Decimal) -> usize {
    values
        .iter()
        .enumerate()
        .min_by_key(|(_, v)| (**v - target).abs())
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Base deal at an absolute sale price with costs scaled by `cost_factor`.
fn shocked_inputs(base: &DealSheetInputs, price: Money, cost_factor: Decimal) -> DealSheetInputs {
    let shock = ScenarioShock {
        cost_factor,
        price_factor: Decimal::ONE,
        extra_days: 0,
    };
    DealSheetInputs {
        asset_sales_price: price,
        ..shock.apply(base)
    }
}

/// Sweep sale price against a construction cost multiplier.
pub fn evaluate_price_cost_grid(
    input: &PriceCostGridInput,
) -> DealResult<ComputationOutput<PriceCostGridOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.base_inputs.validate()?;
    let price_values = generate_sweep_values(&input.sales_price)?;
    let cost_values = generate_sweep_values(&input.cost_factor)?;

    // Costs and price both grow along their axes, so the far corner bounds every cell
    if let (Some(&price), Some(&factor)) = (price_values.last(), cost_values.last()) {
        shocked_inputs(&input.base_inputs, price, factor).validate()?;
    }

    let matrix: Vec<Vec<Decimal>> = price_values
        .iter()
        .map(|price| {
            cost_values
                .iter()
                .map(|factor| {
                    let shocked = shocked_inputs(&input.base_inputs, *price, *factor);
                    input.metric.read(&DealSheetResult::compute(&shocked))
                })
                .collect()
        })
        .collect();

    let base_case_value = input
        .metric
        .read(&DealSheetResult::compute(&input.base_inputs));
    let base_price = input.base_inputs.asset_sales_price;
    if base_price < input.sales_price.min || base_price > input.sales_price.max {
        warnings.push(format!(
            "Base sales price {base_price} lies outside the swept range"
        ));
    }
    let base_case_position = (
        closest_index(&price_values, base_price),
        closest_index(&cost_values, Decimal::ONE),
    );

    tracing::debug!(
        rows = price_values.len(),
        cols = cost_values.len(),
        "price/cost grid evaluated"
    );

    let output = PriceCostGridOutput {
        sales_price_values: price_values,
        cost_factor_values: cost_values,
        metric: input.metric,
        matrix,
        base_case_value,
        base_case_position,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "2-Way Sale Price x Construction Cost Sensitivity",
        &serde_json::json!({
            "sales_price": input.sales_price.name,
            "cost_factor": input.cost_factor.name,
            "metric": input.metric,
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn grid_input() -> PriceCostGridInput {
        PriceCostGridInput {
            base_inputs: DealSheetInputs {
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
            },
            sales_price: SensitivityVariable {
                name: "Asset Sales Price".into(),
                min: dec!(400000),
                max: dec!(500000),
                step: dec!(25000),
            },
            cost_factor: SensitivityVariable {
                name: "Cost Factor".into(),
                min: dec!(0.90),
                max: dec!(1.10),
                step: dec!(0.05),
            },
            metric: GridMetric::NetProfit,
        }
    }

    #[test]
    fn test_grid_dimensions_and_base_cell() {
        let out = evaluate_price_cost_grid(&grid_input()).unwrap().result;
        assert_eq!(out.sales_price_values.len(), 5);
        assert_eq!(out.cost_factor_values.len(), 5);
        assert_eq!(out.matrix.len(), 5);
        assert_eq!(out.matrix[0].len(), 5);
        assert_eq!(out.base_case_position, (2, 2));
        assert_eq!(out.matrix[2][2], out.base_case_value);
    }

    #[test]
    fn test_grid_monotonic() {
        let out = evaluate_price_cost_grid(&grid_input()).unwrap().result;
        // Profit rises with price
        for i in 0..out.matrix.len() - 1 {
            assert!(out.matrix[i][0] < out.matrix[i + 1][0]);
        }
        // Profit falls with cost
        for j in 0..out.matrix[0].len() - 1 {
            assert!(out.matrix[0][j] > out.matrix[0][j + 1]);
        }
    }

    #[test]
    fn test_margin_metric() {
        let input = PriceCostGridInput {
            metric: GridMetric::NetProfitMargin,
            ..grid_input()
        };
        let out = evaluate_price_cost_grid(&input).unwrap().result;
        assert!(out.base_case_value.abs() < Decimal::ONE);
    }

    #[test]
    fn test_sweep_with_non_exact_step() {
        let var = SensitivityVariable {
            name: "test".into(),
            min: dec!(0),
            max: dec!(1),
            step: dec!(0.3),
        };
        let vals = generate_sweep_values(&var).unwrap();
        // 0, 0.3, 0.6, 0.9, 1.0 (max appended)
        assert_eq!(vals.len(), 5);
        assert_eq!(*vals.last().unwrap(), dec!(1));
    }

    #[test]
    fn test_invalid_step() {
        let mut input = grid_input();
        input.cost_factor.step = Decimal::ZERO;
        assert!(evaluate_price_cost_grid(&input).is_err());
    }

    #[test]
    fn test_oversized_sweep_rejected() {
        let mut input = grid_input();
        input.sales_price.step = dec!(1);
        assert!(evaluate_price_cost_grid(&input).is_err());
    }

    #[test]
    fn test_appended_max_counts_toward_point_cap() {
        // 0..=200 fills the cap; the trailing 200.5 would be point 202
        let var = SensitivityVariable {
            name: "test".into(),
            min: dec!(0),
            max: dec!(200.5),
            step: dec!(1),
        };
        assert!(matches!(
            generate_sweep_values(&var),
            Err(DealEconomicsError::InvalidInput { .. })
        ));

        let exact = SensitivityVariable {
            max: dec!(200),
            ..var
        };
        assert_eq!(generate_sweep_values(&exact).unwrap().len(), MAX_SWEEP_POINTS);
    }

    #[test]
    fn test_cost_factor_that_overflows_costs_is_rejected() {
        let mut input = grid_input();
        input.cost_factor.min = dec!(1);
        input.cost_factor.max = dec!(100000000);
        input.cost_factor.step = dec!(50000000);
        assert!(matches!(
            evaluate_price_cost_grid(&input),
            Err(DealEconomicsError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_huge_step_yields_single_point() {
        let var = SensitivityVariable {
            name: "test".into(),
            min: dec!(5),
            max: dec!(5),
            step: Decimal::MAX,
        };
        assert_eq!(generate_sweep_values(&var).unwrap(), vec![dec!(5)]);
    }

    #[test]
    fn test_base_outside_range_warns() {
        let mut input = grid_input();
        input.sales_price.min = dec!(500000);
        input.sales_price.max = dec!(600000);
        let result = evaluate_price_cost_grid(&input).unwrap();
        assert_eq!(result.warnings.len(), 1);
    }
}
