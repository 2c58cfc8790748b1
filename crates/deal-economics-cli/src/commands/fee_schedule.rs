use clap::Args;
use serde_json::{json, Map, Value};

use deal_economics_core::fees::{fixed_per_house_fee, rules, FeeSchedule, OwnershipRelation};

use super::load_fee_schedule;

/// Arguments for inspecting the fee schedule
#[derive(Args)]
pub struct FeeScheduleArgs {
    /// Organisation fee schedule (JSON or YAML); the standard schedule when omitted
    #[arg(long)]
    pub fee_schedule: Option<String>,

    /// Include the asset-management fee charged to related-party owners
    #[arg(long)]
    pub related_party: bool,
}

pub fn run_fee_schedule(args: FeeScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule = load_fee_schedule(args.fee_schedule.as_deref())?.unwrap_or_default();
    let relation = OwnershipRelation::from(args.related_party);
    Ok(describe(&schedule, relation))
}

fn describe(schedule: &FeeSchedule, relation: OwnershipRelation) -> Value {
    let mut result = Map::new();
    for item in schedule.line_items(relation) {
        result.insert(item.name, json!(item.amount));
    }
    result.insert(
        "total_fixed_per_house".into(),
        json!(fixed_per_house_fee(schedule, relation)),
    );
    result.insert("builder_fee_floor".into(), json!(rules::FLOOR_BUILDER_FEE));
    result.insert("builder_fee_rate".into(), json!(rules::BUILDER_FEE_RATE));
    result.insert(
        "builder_fee_crossover".into(),
        json!(rules::builder_fee_crossover()),
    );
    result.insert("contingency_cap".into(), json!(rules::CONTINGENCY_CAP));
    result.insert("contingency_rate".into(), json!(rules::CONTINGENCY_RATE));
    result.insert(
        "contingency_crossover".into(),
        json!(rules::contingency_crossover()),
    );

    json!({
        "result": result,
        "methodology": "Fixed per-house schedule; builder fee max(floor, 10% of sections 1-5), contingency min(cap, 5% of sections 1-5)",
        "assumptions": { "ownership": relation },
        "warnings": [],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn amount(value: &Value, key: &str) -> Decimal {
        serde_json::from_value(value["result"][key].clone()).unwrap()
    }

    #[test]
    fn test_standard_schedule_totals() {
        let value = describe(&FeeSchedule::default(), OwnershipRelation::Independent);
        assert_eq!(amount(&value, "total_fixed_per_house"), dec!(35890));
        assert!(value["result"].get("Asset Management Fee").is_none());
        assert_eq!(amount(&value, "builder_fee_crossover"), dec!(250000));
        assert_eq!(amount(&value, "contingency_crossover"), dec!(200000));
    }

    #[test]
    fn test_related_party_adds_asset_management() {
        let value = describe(&FeeSchedule::default(), OwnershipRelation::RelatedParty);
        assert_eq!(amount(&value, "Asset Management Fee"), dec!(5000));
        assert_eq!(amount(&value, "total_fixed_per_house"), dec!(40890));
    }
}
