pub mod rules;
pub mod schedule;

pub use rules::{builder_fee, contingency};
pub use schedule::{fixed_per_house_fee, FeeLineItem, FeeSchedule, OwnershipRelation};
