pub mod accrual;
pub mod capital;

pub use accrual::{
    actual_days_between, AccrualConvention, Actual360Accrual, AverageBalanceMonthlyAccrual,
};
pub use capital::{average_draw_reserve, equity_required, loan_amount, AVERAGE_DRAW_FACTOR};
