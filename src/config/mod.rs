//! Configuration module for MoneyFix
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Read-only user settings (month, seed items, slider step, export directory)

pub mod paths;
pub mod settings;

pub use paths::MoneyFixPaths;
pub use settings::Settings;
