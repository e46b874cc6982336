//! User settings for MoneyFix
//!
//! Settings are read once at startup and never written back: budget items
//! edited during a session are not persisted. Every field has a default, so a
//! missing or partial settings file is fine.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use super::paths::MoneyFixPaths;
use crate::error::MoneyFixError;
use crate::models::{FinanceItem, Money};

/// German month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// User settings for MoneyFix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Month label shown in the header and report
    #[serde(default = "default_month")]
    pub month: String,

    /// Year shown in the header and report
    #[serde(default = "default_year")]
    pub year: i32,

    /// Planned investment at startup
    #[serde(default = "default_initial_invest")]
    pub initial_invest: Money,

    /// Fine step of the investment slider
    #[serde(default = "default_slider_step")]
    pub slider_step: Money,

    /// Where exported PDFs go (default: the download directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Income items the session starts with
    #[serde(default = "default_income")]
    pub initial_income: Vec<FinanceItem>,

    /// Expense items the session starts with
    #[serde(default = "default_expenses")]
    pub initial_expenses: Vec<FinanceItem>,
}

/// German name of a month (1-12)
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.clamp(1, 12) - 1) as usize]
}

fn default_month() -> String {
    month_name(Local::now().month()).to_string()
}

fn default_year() -> i32 {
    Local::now().year()
}

fn default_initial_invest() -> Money {
    Money::from_euros(500)
}

fn default_slider_step() -> Money {
    Money::from_euros(10)
}

fn seed(label: &str, euros: i64) -> FinanceItem {
    FinanceItem {
        label: label.to_string(),
        amount: Money::from_euros(euros),
    }
}

fn default_income() -> Vec<FinanceItem> {
    vec![seed("Gehalt", 4200), seed("Nebenprojekt", 350)]
}

fn default_expenses() -> Vec<FinanceItem> {
    vec![seed("Fixkosten", 1650), seed("Freizeit & Sonstiges", 1060)]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            month: default_month(),
            year: default_year(),
            initial_invest: default_initial_invest(),
            slider_step: default_slider_step(),
            export_dir: None,
            initial_income: default_income(),
            initial_expenses: default_expenses(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &MoneyFixPaths) -> Result<Self, MoneyFixError> {
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, MoneyFixError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| MoneyFixError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            MoneyFixError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject seed items with blank labels and seed totals out of range
    pub fn validate(&self) -> Result<(), MoneyFixError> {
        let blank = self
            .initial_income
            .iter()
            .chain(&self.initial_expenses)
            .any(|item| item.label.trim().is_empty());
        if blank {
            return Err(MoneyFixError::Config(
                "Seed items need a non-empty label".into(),
            ));
        }

        for (name, items) in [
            ("initial_income", &self.initial_income),
            ("initial_expenses", &self.initial_expenses),
        ] {
            if Money::checked_sum(items.iter().map(|item| item.amount)).is_none() {
                return Err(MoneyFixError::Config(format!(
                    "Total of {} exceeds {} euros",
                    name,
                    Money::MAX.euros()
                )));
            }
        }
        Ok(())
    }

    /// Directory exported files are written to
    ///
    /// Falls back to the user's download directory, then the current directory.
    pub fn resolved_export_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.export_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.initial_invest, Money::from_euros(500));
        assert_eq!(settings.slider_step, Money::from_euros(10));
        assert_eq!(settings.initial_income.len(), 2);
        assert_eq!(settings.initial_expenses[0].label, "Fixkosten");
        assert!(MONTH_NAMES.contains(&settings.month.as_str()));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFixPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.initial_invest, Money::from_euros(500));
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFixPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{ "month": "Januar", "year": 2026,
                 "initial_income": [{ "label": "Bonus", "amount": 99.5 }] }"#,
        )
        .unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.month, "Januar");
        assert_eq!(settings.year, 2026);
        assert_eq!(settings.initial_income.len(), 1);
        assert_eq!(settings.initial_income[0].amount, Money::from_cents(9950));
        assert_eq!(settings.initial_expenses.len(), 2);
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFixPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();
        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(MoneyFixError::Config(_))
        ));
    }

    #[test]
    fn test_blank_seed_label_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFixPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{ "initial_expenses": [{ "label": " ", "amount": 1 }] }"#,
        )
        .unwrap();
        assert!(Settings::load_or_default(&paths).is_err());
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyFixPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(
            paths.settings_file(),
            r#"{ "initial_income": [{ "label": "Zu viel", "amount": 9e16 }] }"#,
        )
        .unwrap();
        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(MoneyFixError::Config(_))
        ));

        std::fs::write(
            paths.settings_file(),
            r#"{ "initial_income": [
                   { "label": "A", "amount": 600000000 },
                   { "label": "B", "amount": 600000000 }
               ] }"#,
        )
        .unwrap();
        assert!(matches!(
            Settings::load_or_default(&paths),
            Err(MoneyFixError::Config(_))
        ));
    }

    #[test]
    fn test_explicit_export_dir() {
        let settings = Settings {
            export_dir: Some(PathBuf::from("/tmp/out")),
            ..Settings::default()
        };
        assert_eq!(settings.resolved_export_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "Januar");
        assert_eq!(month_name(3), "März");
        assert_eq!(month_name(12), "Dezember");
    }
}
