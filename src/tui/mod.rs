//! Terminal User Interface module
//!
//! The single MoneyFix screen: income and expense lists, the remaining
//! balance, the investment planner, and PDF export, built on ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
