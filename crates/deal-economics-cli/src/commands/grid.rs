use clap::Args;
use serde_json::Value;

use deal_economics_core::sensitivity::{self, PriceCostGridInput};

use super::load_fee_schedule;
use crate::input;

/// Arguments for the sale price x construction cost grid
#[derive(Args)]
pub struct GridArgs {
    /// Path to JSON or YAML grid input file (stdin when omitted)
    #[arg(long)]
    pub input: Option<String>,

    /// Organisation fee schedule (JSON or YAML) applied to the base deal
    #[arg(long)]
    pub fee_schedule: Option<String>,
}

pub fn run_grid(args: GridArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut grid: PriceCostGridInput = input::load(args.input.as_deref(), "price x cost grid")?;
    if let Some(schedule) = load_fee_schedule(args.fee_schedule.as_deref())? {
        grid.base_inputs.fee_schedule = schedule;
    }
    let result = sensitivity::evaluate_price_cost_grid(&grid)?;
    Ok(serde_json::to_value(result)?)
}
