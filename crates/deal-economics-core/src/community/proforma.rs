use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::inputs::CommunityProformaInputs;
use super::phase1::{compute_phase1, Phase1Results};
use super::phase2::{compute_per_home, project_totals, Phase2PerHome, Phase2ProjectTotals};
use super::waterfall::{compute_lp_waterfall, LpWaterfall};
use crate::types::*;
use crate::DealResult;

/// Full two-phase community proforma.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityProformaResults {
    pub phase1: Phase1Results,
    pub phase2_per_home: Phase2PerHome,
    pub phase2_totals: Phase2ProjectTotals,
    pub lp_waterfall: LpWaterfall,
}

impl CommunityProformaResults {
    /// Run both phases and the waterfall. Total over any numeric input.
    pub fn compute(input: &CommunityProformaInputs) -> Self {
        let phase1 = compute_phase1(input);
        let phase2_per_home = compute_per_home(input);
        let phase2_totals = project_totals(&phase2_per_home, input.total_lots);
        let lp_waterfall = compute_lp_waterfall(input, &phase1, &phase2_totals);
        CommunityProformaResults {
            phase1,
            phase2_per_home,
            phase2_totals,
            lp_waterfall,
        }
    }
}

/// Model a multi-lot community from land development through home sales.
///
/// Phase 1 budgets horizontal development, splits it between bank debt and
/// LP equity and nets it against lot sales. Phase 2 prices one home on a
/// purchased lot with average-balance monthly construction interest and
/// scales it across the community. The LP waterfall pays the LP a flat
/// accruing return on the lot capital not covered by the GP's rolled margin.
pub fn calculate_community_proforma(
    input: &CommunityProformaInputs,
) -> DealResult<ComputationOutput<CommunityProformaResults>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.validate()?;

    let output = CommunityProformaResults::compute(input);

    if input.total_lots == 0 {
        warnings.push("Community has zero lots; all scaled figures are zero".into());
    }
    if output.phase1.gross_margin < Decimal::ZERO {
        warnings.push(format!(
            "Phase 1 gross margin is negative ({}); GP rolls forward no equity",
            output.phase1.gross_margin
        ));
    }
    if output.phase2_totals.total_profit < Decimal::ZERO {
        warnings.push("Phase 2 is loss-making across the community".into());
    }
    if output.lp_waterfall.remaining_to_gps < Decimal::ZERO {
        warnings.push("LP accrued return exceeds Phase 2 profit; GP residual is negative".into());
    }
    for warning in &warnings {
        tracing::warn!(%warning, "community proforma");
    }

    tracing::debug!(
        total_lots = input.total_lots,
        total_uses = %output.phase1.total_uses,
        gross_margin = %output.phase1.gross_margin,
        phase2_profit = %output.phase2_totals.total_profit,
        gp_share = %output.lp_waterfall.gp_share,
        "community proforma calculated"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Community Proforma (Horizontal + Vertical, Single-Tier LP Waterfall)",
        &serde_json::json!({
            "total_lots": input.total_lots,
            "bank_ltc": input.bank_ltc.to_string(),
            "bank_interest_rate": input.bank_interest_rate.to_string(),
            "interest_reserve": "average draw (0.5 x budget x rate)",
            "construction_interest": "average balance, months/12",
            "lp_accruing_return_rate": input.lp_accruing_return_rate.to_string(),
            "lp_investment_period_months": input.lp_investment_period_months,
            "gp_split_pct": input.gp_split_pct.to_string(),
            "lp_pref_return": input.lp_pref_return.to_string(),
            "lp_buyout_irr": input.lp_buyout_irr.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DealEconomicsError;
    use rust_decimal_macros::dec;

    fn community() -> CommunityProformaInputs {
        CommunityProformaInputs {
            total_lots: 40,
            land_value_per_lot: dec!(30000),
            horizontal_dev_per_lot: dec!(25000),
            ae_per_lot: dec!(2000),
            carry_cost_per_lot: dec!(3000),
            amenity_package: dec!(150000),
            monument_sign: dec!(25000),
            contingency_rate: dec!(0.05),
            cm_fee_per_lot: dec!(1000),
            developer_fee_per_lot: dec!(2000),
            lot_sales_price: dec!(85000),
            bank_ltc: dec!(0.60),
            bank_interest_rate: dec!(0.08),
            lp_pref_return: dec!(0.08),
            lp_buyout_irr: dec!(0.15),
            home_sales_price: dec!(450000),
            selling_cost_rate: dec!(0.06),
            seller_concession: dec!(5000),
            vertical_cost: dec!(280000),
            construction_interest_rate: dec!(0.09),
            construction_months: 8,
            lp_accruing_return_rate: dec!(0.10),
            lp_investment_period_months: 12,
            gp_split_pct: dec!(0.50),
        }
    }

    #[test]
    fn test_forty_lot_community() {
        let result = calculate_community_proforma(&community()).unwrap();
        let out = &result.result;

        assert_eq!(out.phase1.subtotal_hard, dec!(2575000));
        assert_eq!(out.phase1.contingency, dec!(128750));
        assert_eq!(out.phase1.interest_reserve, dec!(108150));
        assert_eq!(out.phase1.total_uses, dec!(2931900));
        assert_eq!(out.phase1.senior_debt, dec!(1759140));
        assert_eq!(out.phase1.lp_equity, dec!(1172760));
        assert_eq!(out.phase1.gross_margin, dec!(468100));

        assert_eq!(out.phase2_totals.total_profit, dec!(1784000));

        assert_eq!(out.lp_waterfall.gp_rolled_equity, dec!(468100));
        assert_eq!(out.lp_waterfall.sl_fund_lp_capital, dec!(2931900));
        assert_eq!(out.lp_waterfall.lp_accrued_return, dec!(293190));
        assert_eq!(out.lp_waterfall.total_lp_payout, dec!(3225090));
        assert_eq!(out.lp_waterfall.remaining_to_gps, dec!(1490810));
        assert_eq!(out.lp_waterfall.gp_share, dec!(745405));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unconsumed_fund_terms_do_not_move_results() {
        let base = CommunityProformaResults::compute(&community());
        let changed = CommunityProformaResults::compute(&CommunityProformaInputs {
            lp_pref_return: dec!(0.20),
            lp_buyout_irr: dec!(0.30),
            ..community()
        });
        assert_eq!(base, changed);
    }

    #[test]
    fn test_loss_warnings() {
        let input = CommunityProformaInputs {
            lot_sales_price: dec!(40000),
            home_sales_price: dec!(300000),
            ..community()
        };
        let result = calculate_community_proforma(&input).unwrap();
        assert!(result.warnings.len() >= 2);
        assert_eq!(result.result.lp_waterfall.gp_rolled_equity, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_rate() {
        let input = CommunityProformaInputs {
            gp_split_pct: dec!(1.5),
            ..community()
        };
        match calculate_community_proforma(&input).unwrap_err() {
            DealEconomicsError::InvalidInput { field, .. } => assert_eq!(field, "gp_split_pct"),
            other => panic!("Expected InvalidInput, got: {other:?}"),
        }
    }

    #[test]
    fn test_oversized_community_rejected() {
        let input = CommunityProformaInputs {
            total_lots: u32::MAX,
            ..community()
        };
        match calculate_community_proforma(&input).unwrap_err() {
            DealEconomicsError::InvalidInput { field, .. } => assert_eq!(field, "total_lots"),
            other => panic!("Expected InvalidInput, got: {other:?}"),
        }

        let input = CommunityProformaInputs {
            lp_investment_period_months: u32::MAX,
            ..community()
        };
        assert!(calculate_community_proforma(&input).is_err());
    }
}
