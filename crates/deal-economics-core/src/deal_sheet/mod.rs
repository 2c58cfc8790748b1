pub mod engine;
pub mod verdict;

pub use engine::{calculate_deal_sheet, DealSheetInputs, DealSheetResult};
pub use verdict::{land_verdict, profit_verdict, Verdict, VerdictScale};
