//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or the focused panel, and
//! export results back into the app.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::MoneyFixError;

use super::app::{ActiveDialog, App, FocusedPanel};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::ExportFinished(result) => {
            app.finish_export(result);
            Ok(())
        }
        Event::InputLost(reason) => {
            Err(MoneyFixError::Tui(format!("terminal input failed: {}", reason)).into())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::AddItem => {
            dialogs::add_item::handle_key(app, key);
        }
        ActiveDialog::EditAmount => {
            dialogs::edit_amount::handle_key(app, key);
        }
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::Error(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys with no dialog open
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.start_export();
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.focused_panel = FocusedPanel::Income;
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.focused_panel = FocusedPanel::Expenses;
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.focused_panel = FocusedPanel::Planner;
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Income | FocusedPanel::Expenses => handle_list_key(app, key),
        FocusedPanel::Planner => handle_planner_key(app, key),
    }
    Ok(())
}

/// Keys for the income and expense lists
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_add_item(),
        KeyCode::Enter | KeyCode::Char('e') => app.open_edit_amount(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        _ => {}
    }
}

/// Keys for the investment slider
fn handle_planner_key(app: &mut App, key: KeyEvent) {
    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.budget.increase_invest(coarse),
        KeyCode::Char('h') | KeyCode::Left => app.budget.decrease_invest(coarse),
        KeyCode::Char('L') | KeyCode::PageUp => app.budget.increase_invest(true),
        KeyCode::Char('H') | KeyCode::PageDown => app.budget.decrease_invest(true),
        KeyCode::Char('0') | KeyCode::Home => app.budget.invest_nothing(),
        KeyCode::Char('m') | KeyCode::End => app.budget.invest_all(),
        KeyCode::Enter | KeyCode::Char('c') => app.commit_investment(),
        _ => {}
    }
}
