pub mod community;
pub mod deal_sheet;
pub mod fee_schedule;
pub mod grid;
pub mod sensitivity;

use chrono::NaiveDate;
use clap::Args;

use deal_economics_core::deal_sheet::DealSheetInputs;
use deal_economics_core::fees::FeeSchedule;
use deal_economics_core::financing::actual_days_between;

use crate::input;

/// Where a single-deal command reads its inputs from, plus overrides.
#[derive(Args)]
pub struct DealSourceArgs {
    /// Path to JSON or YAML deal input file (stdin when omitted)
    #[arg(long)]
    pub input: Option<String>,

    /// Organisation fee schedule (JSON or YAML), replacing the one in the input
    #[arg(long)]
    pub fee_schedule: Option<String>,

    /// Lot close date (YYYY-MM-DD); with --end-date sets project_duration_days
    #[arg(long, requires = "end_date")]
    pub start_date: Option<NaiveDate>,

    /// Home sale date (YYYY-MM-DD)
    #[arg(long, requires = "start_date")]
    pub end_date: Option<NaiveDate>,
}

impl DealSourceArgs {
    /// Load the deal inputs and apply any fee schedule or date overrides.
    pub fn load(&self, what: &str) -> Result<DealSheetInputs, Box<dyn std::error::Error>> {
        let deal: DealSheetInputs = input::load(self.input.as_deref(), what)?;
        self.apply_overrides(deal)
    }

    pub fn apply_overrides(
        &self,
        mut deal: DealSheetInputs,
    ) -> Result<DealSheetInputs, Box<dyn std::error::Error>> {
        if let Some(schedule) = load_fee_schedule(self.fee_schedule.as_deref())? {
            deal.fee_schedule = schedule;
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            deal.project_duration_days = duration_days(start, end)?;
        }
        Ok(deal)
    }
}

/// Read and validate an organisation fee schedule, if a path was given.
pub fn load_fee_schedule(
    path: Option<&str>,
) -> Result<Option<FeeSchedule>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let schedule: FeeSchedule = input::file::read_input(path)?;
    schedule.validate()?;
    tracing::debug!(path, "fee schedule override");
    Ok(Some(schedule))
}

fn duration_days(start: NaiveDate, end: NaiveDate) -> Result<u32, Box<dyn std::error::Error>> {
    if end < start {
        return Err(format!("--end-date {end} precedes --start-date {start}").into());
    }
    Ok(actual_days_between(start, end))
}
