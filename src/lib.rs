//! MoneyFix - Terminal-based monthly budget planner
//!
//! Record income and expense items, see what remains, plan how much of it
//! to invest, and export a one-page monthly overview as PDF.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and read-only settings
//! - `error`: Custom error types
//! - `models`: Money, budget items and item lists
//! - `format`: German currency formatting
//! - `services`: Budget controller and investment planner
//! - `reports`: The printable monthly overview
//! - `export`: Off-screen capture and PDF assembly
//! - `display`: Plain-text output for the CLI
//! - `logging`: Tracing setup
//! - `tui`: The interactive terminal UI
//!
//! # Example
//!
//! ```rust,ignore
//! use moneyfix::config::{MoneyFixPaths, Settings};
//! use moneyfix::services::BudgetController;
//!
//! let paths = MoneyFixPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let budget = BudgetController::from_settings(&settings);
//! println!("{}", budget.remaining());
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod format;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::{MoneyFixError, MoneyFixResult};
