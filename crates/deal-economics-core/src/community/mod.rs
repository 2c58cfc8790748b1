pub mod inputs;
pub mod phase1;
pub mod phase2;
pub mod proforma;
pub mod waterfall;

pub use inputs::CommunityProformaInputs;
pub use phase1::Phase1Results;
pub use phase2::{Phase2PerHome, Phase2ProjectTotals};
pub use proforma::{calculate_community_proforma, CommunityProformaResults};
pub use waterfall::LpWaterfall;
