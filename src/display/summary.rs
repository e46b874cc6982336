//! Budget summary formatting
//!
//! Formats the budget for terminal output: one table per list plus totals.

use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::config::{MoneyFixPaths, Settings};
use crate::format::format_currency;
use crate::models::{FinanceItem, ItemKind};
use crate::reports::ReportData;

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Bezeichnung")]
    label: String,
    #[tabled(rename = "Betrag")]
    amount: String,
}

/// Format one item list as a table, or the empty placeholder
pub fn format_item_table(items: &[FinanceItem]) -> String {
    if items.is_empty() {
        return "Noch keine Einträge vorhanden".to_string();
    }

    let rows = items.iter().map(|item| ItemRow {
        label: item.label.clone(),
        amount: format_currency(item.amount),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string()
}

/// Format the full monthly summary
pub fn format_summary(report: &ReportData) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Money Fix Planer · {} {}\n\n",
        report.month, report.year
    ));

    for (kind, items, total) in [
        (ItemKind::Income, &report.income_items, report.total_income),
        (ItemKind::Expense, &report.expense_items, report.total_expenses),
    ] {
        output.push_str(&format!("{} ({})\n", kind.title(), format_currency(total)));
        output.push_str(&format_item_table(items));
        output.push_str("\n\n");
    }

    output.push_str(&format!(
        "Was mir bleibt:  {}\n",
        format_currency(report.remaining)
    ));
    output.push_str(&format!(
        "Investieren:     {} von {}\n",
        format_currency(report.invest_amount),
        format_currency(report.remaining)
    ));

    output
}

/// Format resolved paths and effective settings
pub fn format_config(paths: &MoneyFixPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Basisordner:     {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Einstellungen:   {}\n",
        paths.settings_file().display()
    ));
    output.push_str(&format!("Logs:            {}\n", paths.log_dir().display()));
    output.push_str(&format!(
        "Exportordner:    {}\n",
        settings.resolved_export_dir().display()
    ));
    output.push_str(&format!(
        "Monat:           {} {}\n",
        settings.month, settings.year
    ));
    output.push_str(&format!(
        "Investition:     {} (Schritt {})\n",
        format_currency(settings.initial_invest),
        format_currency(settings.slider_step)
    ));
    output
}
