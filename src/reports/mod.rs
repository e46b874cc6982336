//! Reports module for MoneyFix
//!
//! Provides the printable monthly overview used as the export source.

pub mod monthly;

pub use monthly::{palette, MonthlyReport, ReportData};
