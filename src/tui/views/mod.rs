//! TUI Views module
//!
//! Contains the header, balance card, item lists, investment planner and
//! status bar, plus dialog and notification overlays.

pub mod balance;
pub mod header;
pub mod items;
pub mod planner;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::{error_dialog_area, notification_area, ErrorDialog, NotificationWidget};
use crate::models::ItemKind;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    balance::render(frame, app, layout.balance);
    items::render(frame, app, layout.income, ItemKind::Income);
    items::render(frame, app, layout.expenses, ItemKind::Expense);
    planner::render(frame, app, layout.planner);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = notification_area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::AddItem => dialogs::add_item::render(frame, app),
        ActiveDialog::EditAmount => dialogs::edit_amount::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Error(info) => {
            let area = error_dialog_area(frame.area());
            frame.render_widget(ErrorDialog::new(info), area);
        }
        ActiveDialog::None => {}
    }
}
