use clap::Args;
use serde_json::Value;

use deal_economics_core::deal_sheet;

use super::DealSourceArgs;

/// Arguments for a single-lot deal sheet
#[derive(Args)]
pub struct DealSheetArgs {
    #[command(flatten)]
    pub source: DealSourceArgs,
}

pub fn run_deal_sheet(args: DealSheetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let deal = args.source.load("deal sheet")?;
    let result = deal_sheet::calculate_deal_sheet(&deal)?;
    Ok(serde_json::to_value(result)?)
}
