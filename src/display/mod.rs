//! Display formatting for terminal output
//!
//! Plain-text renditions of the budget for the non-interactive commands.

pub mod summary;

pub use summary::{format_config, format_item_table, format_summary};
