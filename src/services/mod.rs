//! Service layer for MoneyFix
//!
//! The service layer holds the budget state and the rules for changing it:
//! derived totals, validation of edits, and the investment slider bounds.

pub mod budget;
pub mod invest;

pub use budget::BudgetController;
pub use invest::InvestmentPlanner;
