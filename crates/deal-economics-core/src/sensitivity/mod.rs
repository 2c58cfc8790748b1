pub mod analyzer;
pub mod grid;
pub mod solver;

pub use analyzer::{run_sensitivity_analysis, ScenarioShock, SensitivityResult};
pub use grid::{evaluate_price_cost_grid, GridMetric, PriceCostGridInput, PriceCostGridOutput};
pub use solver::{solve_breakeven_asp, solve_minimum_asp, MINIMUM_ACCEPTABLE_MARGIN};
