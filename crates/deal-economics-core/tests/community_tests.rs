use deal_economics_core::community::{
    calculate_community_proforma, CommunityProformaInputs, CommunityProformaResults,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn community(total_lots: u32) -> CommunityProformaInputs {
    CommunityProformaInputs {
        total_lots,
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

// ===========================================================================
// Phase 1
// ===========================================================================

#[test]
fn test_single_lot_total_uses_identity() {
    let out = calculate_community_proforma(&community(1)).unwrap().result;
    let p1 = &out.phase1;

    let per_lot = dec!(30000) + dec!(25000) + dec!(2000) + dec!(3000);
    let subtotal = per_lot + dec!(150000) + dec!(25000);
    let contingency = subtotal * dec!(0.05);
    let reserve = (subtotal + contingency) * dec!(0.08) * dec!(0.5);
    let expected = subtotal + contingency + dec!(1000) + dec!(2000) + reserve;

    assert_eq!(p1.total_uses, expected);
    assert_eq!(p1.senior_debt + p1.lp_equity, p1.total_uses);
}

#[test]
fn test_debt_equity_split_exact_across_sizes() {
    for lots in [1, 7, 40, 250] {
        let out = calculate_community_proforma(&community(lots)).unwrap().result;
        assert_eq!(out.phase1.senior_debt + out.phase1.lp_equity, out.phase1.total_uses);
        assert_eq!(
            out.phase1.gross_margin,
            out.phase1.lot_sales_proceeds - out.phase1.total_uses
        );
    }
}

// ===========================================================================
// Phase 2 and waterfall
// ===========================================================================

#[test]
fn test_totals_scale_with_lots() {
    let ten = calculate_community_proforma(&community(10)).unwrap().result;
    let twenty = calculate_community_proforma(&community(20)).unwrap().result;
    assert_eq!(ten.phase2_per_home, twenty.phase2_per_home);
    assert_eq!(
        twenty.phase2_totals.total_profit,
        ten.phase2_totals.total_profit * dec!(2)
    );
}

#[test]
fn test_gp_rolled_equity_never_negative() {
    // Tiny community: flat amenity costs swamp the lot sales
    let out = calculate_community_proforma(&community(1)).unwrap();
    assert!(out.result.phase1.gross_margin < Decimal::ZERO);
    assert_eq!(out.result.lp_waterfall.gp_rolled_equity, Decimal::ZERO);
    assert_eq!(out.result.lp_waterfall.sl_fund_lp_capital, dec!(85000));
    assert!(!out.warnings.is_empty());
}

#[test]
fn test_zero_lot_community_is_all_zero_downstream() {
    let out = calculate_community_proforma(&community(0)).unwrap();
    assert!(out.warnings.iter().any(|w| w.contains("zero lots")));

    let result = &out.result;
    assert_eq!(result.phase1.lot_sales_proceeds, Decimal::ZERO);
    assert_eq!(result.phase2_totals.total_profit, Decimal::ZERO);

    let w = &result.lp_waterfall;
    assert_eq!(w.gp_rolled_equity, Decimal::ZERO);
    assert_eq!(w.sl_fund_lp_capital, Decimal::ZERO);
    assert_eq!(w.lp_accrued_return, Decimal::ZERO);
    assert_eq!(w.gp_share, Decimal::ZERO);
    assert_eq!(w.lp_equity_multiple, Decimal::ZERO);
}

#[test]
fn test_waterfall_identities() {
    let w = calculate_community_proforma(&community(40))
        .unwrap()
        .result
        .lp_waterfall;
    assert_eq!(w.total_lp_payout, w.sl_fund_lp_capital + w.lp_accrued_return);
    assert_eq!(w.gp_share, w.remaining_to_gps * dec!(0.50));
    assert_eq!(w.total_lot_cost, w.sl_fund_lp_capital + w.gp_rolled_equity);
}

#[test]
fn test_results_round_trip_through_json() {
    let out = CommunityProformaResults::compute(&community(40));
    let json = serde_json::to_string(&out).unwrap();
    let back: CommunityProformaResults = serde_json::from_str(&json).unwrap();
    assert_eq!(out, back);
}
