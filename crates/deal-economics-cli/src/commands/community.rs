use clap::Args;
use serde_json::Value;

use deal_economics_core::community::{self, CommunityProformaInputs};

use crate::input;

/// Arguments for a multi-lot community proforma
#[derive(Args)]
pub struct CommunityArgs {
    /// Path to JSON or YAML community input file (stdin when omitted)
    #[arg(long)]
    pub input: Option<String>,

    /// Override the number of lots in the input
    #[arg(long)]
    pub lots: Option<u32>,
}

pub fn run_community(args: CommunityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut proforma: CommunityProformaInputs =
        input::load(args.input.as_deref(), "community proforma")?;
    if let Some(lots) = args.lots {
        proforma.total_lots = lots;
    }
    let result = community::calculate_community_proforma(&proforma)?;
    Ok(serde_json::to_value(result)?)
}
