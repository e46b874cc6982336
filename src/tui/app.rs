//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Budget data lives in the [`BudgetController`]; everything else here is
//! screen state: focus, selection, dialogs, notifications, export status.

use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::config::settings::Settings;
use crate::error::MoneyFixError;
use crate::export::{CaptureOptions, ExportError, ExportJob, ExportPipeline};
use crate::format::format_currency;
use crate::models::ItemKind;
use crate::services::BudgetController;

use super::dialogs::add_item::AddItemFormState;
use super::dialogs::edit_amount::EditAmountState;
use super::widgets::{ErrorInfo, Notification, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Income,
    Expenses,
    Planner,
}

impl FocusedPanel {
    pub fn next(self) -> Self {
        match self {
            Self::Income => Self::Expenses,
            Self::Expenses => Self::Planner,
            Self::Planner => Self::Income,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Income => Self::Planner,
            Self::Expenses => Self::Income,
            Self::Planner => Self::Expenses,
        }
    }

    /// The list this panel shows, if it is a list
    pub fn kind(self) -> Option<ItemKind> {
        match self {
            Self::Income => Some(ItemKind::Income),
            Self::Expenses => Some(ItemKind::Expense),
            Self::Planner => None,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddItem,
    EditAmount,
    Help,
    Error(ErrorInfo),
}

/// Main application state
pub struct App {
    /// The budget being edited
    pub budget: BudgetController,

    /// Month label shown in the header and report
    pub month: String,

    /// Year shown in the header and report
    pub year: i32,

    /// Where exports are written
    pub export_dir: PathBuf,

    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub active_dialog: ActiveDialog,

    pub selected_income_index: usize,

    pub selected_expense_index: usize,

    pub add_item_form: AddItemFormState,

    pub edit_amount_form: EditAmountState,

    pub notifications: NotificationQueue,

    pub export: ExportPipeline,

    /// Export handed out but not yet started by the event loop
    pending_export: Option<ExportJob>,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: &Settings, export_dir: PathBuf) -> Self {
        Self {
            budget: BudgetController::from_settings(settings),
            month: settings.month.clone(),
            year: settings.year,
            export_dir,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_income_index: 0,
            selected_expense_index: 0,
            add_item_form: AddItemFormState::new(),
            edit_amount_form: EditAmountState::default(),
            notifications: NotificationQueue::new(),
            export: ExportPipeline::new(CaptureOptions::default()),
            pending_export: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn focus_next(&mut self) {
        self.focused_panel = self.focused_panel.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused_panel = self.focused_panel.prev();
    }

    /// Selected row of a list
    pub fn selected_index(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Income => self.selected_income_index,
            ItemKind::Expense => self.selected_expense_index,
        }
    }

    fn selected_index_mut(&mut self, kind: ItemKind) -> &mut usize {
        match kind {
            ItemKind::Income => &mut self.selected_income_index,
            ItemKind::Expense => &mut self.selected_expense_index,
        }
    }

    /// Move selection up in the focused list
    pub fn move_up(&mut self) {
        if let Some(kind) = self.focused_panel.kind() {
            let index = self.selected_index_mut(kind);
            *index = index.saturating_sub(1);
        }
    }

    /// Move selection down in the focused list
    pub fn move_down(&mut self) {
        if let Some(kind) = self.focused_panel.kind() {
            let len = self.budget.list(kind).len();
            let index = self.selected_index_mut(kind);
            if *index < len.saturating_sub(1) {
                *index += 1;
            }
        }
    }

    /// Keep selections inside their lists after a deletion
    fn clamp_selection(&mut self, kind: ItemKind) {
        let len = self.budget.list(kind).len();
        let index = self.selected_index_mut(kind);
        *index = (*index).min(len.saturating_sub(1));
    }

    /// Open the add-item form for the focused list
    pub fn open_add_item(&mut self) {
        let Some(kind) = self.focused_panel.kind() else {
            return;
        };
        self.add_item_form.reset();
        self.budget.open_add(kind);
        self.open_dialog(ActiveDialog::AddItem);
    }

    /// Submit the add-item form; refused input keeps the form open
    pub fn submit_add_item(&mut self) {
        let item = match self.add_item_form.validate() {
            Ok(item) => item,
            Err(msg) => {
                self.add_item_form.set_error(msg);
                return;
            }
        };
        let label = item.label.clone();
        match self.budget.submit_item(item) {
            Ok(Some(kind)) => {
                let last = self.budget.list(kind).len().saturating_sub(1);
                *self.selected_index_mut(kind) = last;
                self.notify(Notification::success(format!("„{}“ hinzugefügt", label)));
            }
            Ok(None) => {}
            Err(MoneyFixError::Validation(msg)) => {
                self.add_item_form.set_error(msg);
                return;
            }
            Err(e) => {
                self.add_item_form.set_error(e.to_string());
                return;
            }
        }
        self.add_item_form.reset();
        self.close_dialog();
    }

    /// Close the add-item form without adding anything
    pub fn cancel_add_item(&mut self) {
        self.add_item_form.reset();
        self.budget.close_add();
        self.close_dialog();
    }

    /// Open the amount editor for the selected item
    pub fn open_edit_amount(&mut self) {
        let Some(kind) = self.focused_panel.kind() else {
            return;
        };
        let index = self.selected_index(kind);
        if let Some(item) = self.budget.list(kind).get(index) {
            self.edit_amount_form = EditAmountState::for_item(kind, index, item);
            self.open_dialog(ActiveDialog::EditAmount);
        }
    }

    /// Apply the amount editor; malformed input keeps the editor open
    pub fn submit_edit_amount(&mut self) {
        let kind = self.edit_amount_form.kind;
        let index = self.edit_amount_form.index;
        let text = self.edit_amount_form.input.value().to_string();
        match self.budget.update_amount(kind, index, &text) {
            Ok(_) => self.close_dialog(),
            Err(MoneyFixError::Validation(msg)) => self.edit_amount_form.set_error(msg),
            Err(e) => self.edit_amount_form.set_error(e.to_string()),
        }
    }

    /// Delete the selected item of the focused list
    pub fn delete_selected(&mut self) {
        let Some(kind) = self.focused_panel.kind() else {
            return;
        };
        let index = self.selected_index(kind);
        if let Some(item) = self.budget.delete_item(kind, index) {
            self.clamp_selection(kind);
            self.notify(Notification::info(format!("„{}“ gelöscht", item.label)));
        }
    }

    /// Visual confirmation for the planned investment; changes nothing
    pub fn commit_investment(&mut self) {
        let amount = format_currency(self.budget.invest_amount());
        self.notify(Notification::success(format!(
            "{} für Investments vorgemerkt",
            amount
        )));
    }

    pub fn is_exporting(&self) -> bool {
        self.export.is_exporting()
    }

    /// Start an export unless one is already running
    pub fn start_export(&mut self) {
        let report = self.budget.report_data(&self.month, self.year);
        if let Some(job) = self.export.begin(report, &self.export_dir) {
            self.pending_export = Some(job);
        }
    }

    /// Hand the pending export to whoever runs it
    pub fn take_pending_export(&mut self) -> Option<ExportJob> {
        self.pending_export.take()
    }

    /// Route the outcome of an export and return to idle
    pub fn finish_export(&mut self, result: Result<PathBuf, ExportError>) {
        self.export.finish();
        match result {
            Ok(path) => {
                info!(path = %path.display(), "export finished");
                self.notify(Notification::success(format!(
                    "PDF gespeichert: {}",
                    path.display()
                )));
            }
            Err(e) if !e.is_user_visible() => {
                debug!(error = %e, "export skipped");
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.open_dialog(ActiveDialog::Error(ErrorInfo::from_export_error(&e)));
            }
        }
    }
}
