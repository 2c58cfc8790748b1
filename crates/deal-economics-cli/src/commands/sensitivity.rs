use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use deal_economics_core::sensitivity;

use super::DealSourceArgs;

/// Arguments for scenario sensitivity on a single deal
#[derive(Args)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub source: DealSourceArgs,

    /// Also solve the sale price needed for this net margin (e.g. 0.08)
    #[arg(long)]
    pub target_margin: Option<Decimal>,
}

pub fn run_sensitivity(args: SensitivityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let deal = args.source.load("sensitivity analysis")?;
    let result = sensitivity::run_sensitivity_analysis(&deal)?;
    let mut value = serde_json::to_value(result)?;

    if let Some(target) = args.target_margin {
        let price = sensitivity::solve_minimum_asp(&deal, target)?;
        if let Some(Value::Object(fields)) = value.get_mut("result") {
            fields.insert("target_margin".into(), serde_json::to_value(target)?);
            fields.insert("target_margin_asp".into(), serde_json::to_value(price)?);
        }
    }
    Ok(value)
}
