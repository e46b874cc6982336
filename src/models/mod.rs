//! Core data models for MoneyFix
//!
//! This module contains the data structures of the budgeting domain:
//! money amounts and the income/expense line items.

pub mod item;
pub mod money;

pub use item::{FinanceItem, ItemKind, ItemList};
pub use money::{Money, MoneyParseError};
