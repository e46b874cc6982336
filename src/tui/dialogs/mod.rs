//! Dialog modules for the TUI
//!
//! Contains modal dialogs for various operations

pub mod add_item;
pub mod edit_amount;
pub mod help;
