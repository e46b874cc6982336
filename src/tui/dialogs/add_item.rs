//! Add-item dialog
//!
//! Collects a label and an amount for a new income or expense item. The
//! target list is whatever the controller's active modal says; this form only
//! produces the item.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{FinanceItem, ItemKind, Money};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{render_input_with_cursor, TextField};

/// Which field is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddItemField {
    #[default]
    Label,
    Amount,
}

impl AddItemField {
    pub fn next(self) -> Self {
        match self {
            Self::Label => Self::Amount,
            Self::Amount => Self::Label,
        }
    }
}

/// State for the add-item dialog
#[derive(Debug, Clone, Default)]
pub struct AddItemFormState {
    pub focused_field: AddItemField,
    pub label: TextField,
    pub amount: TextField,
    pub error_message: Option<String>,
}

impl AddItemFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both fields and any message
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    fn focused_mut(&mut self) -> &mut TextField {
        match self.focused_field {
            AddItemField::Label => &mut self.label,
            AddItemField::Amount => &mut self.amount,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_mut().insert(c);
        self.error_message = None;
    }

    pub fn backspace(&mut self) {
        self.focused_mut().backspace();
        self.error_message = None;
    }

    pub fn move_left(&mut self) {
        self.focused_mut().move_left();
    }

    pub fn move_right(&mut self) {
        self.focused_mut().move_right();
    }

    pub fn clear_field(&mut self) {
        self.focused_mut().clear();
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Build the item, or explain why the input is refused
    pub fn validate(&self) -> Result<FinanceItem, String> {
        if self.label.is_blank() {
            return Err("Bitte eine Bezeichnung eingeben".to_string());
        }
        if self.amount.is_blank() {
            return Err("Bitte einen Betrag eingeben".to_string());
        }
        let amount = Money::parse(self.amount.value()).map_err(|e| e.to_string())?;
        FinanceItem::new(self.label.value(), amount).map_err(|e| e.to_string())
    }
}

/// Render the add-item dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.add_item_form;
    let kind = app.budget.active_modal().unwrap_or(ItemKind::Income);

    let area = centered_rect_fixed(50, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", kind.dialog_title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label label
            Constraint::Length(1), // Label input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Amount label
            Constraint::Length(1), // Amount input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let field_style = |field: AddItemField| {
        if state.focused_field == field {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        }
    };

    frame.render_widget(
        Paragraph::new(Span::styled("Bezeichnung:", field_style(AddItemField::Label))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(render_input_with_cursor(
            "",
            &state.label,
            state.focused_field == AddItemField::Label,
        )),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled("Betrag (€):", field_style(AddItemField::Amount))),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(render_input_with_cursor(
            "",
            &state.amount,
            state.focused_field == AddItemField::Amount,
        )),
        chunks[4],
    );

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[6],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Hinzufügen  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Abbrechen  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Feld"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[7]);
}

/// Handle key events for the add-item dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.cancel_add_item();
            true
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.add_item_form.next_field();
            true
        }

        KeyCode::Enter => {
            app.submit_add_item();
            true
        }

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.add_item_form.clear_field();
            true
        }

        KeyCode::Char(c) => {
            app.add_item_form.insert_char(c);
            true
        }

        KeyCode::Backspace => {
            app.add_item_form.backspace();
            true
        }

        KeyCode::Left => {
            app.add_item_form.move_left();
            true
        }

        KeyCode::Right => {
            app.add_item_form.move_right();
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(label: &str, amount: &str) -> AddItemFormState {
        AddItemFormState {
            label: TextField::with_value(label),
            amount: TextField::with_value(amount),
            ..AddItemFormState::default()
        }
    }

    #[test]
    fn test_valid_submission() {
        let item = form("  Bonus ", "200").validate().unwrap();
        assert_eq!(item.label, "Bonus");
        assert_eq!(item.amount, Money::from_euros(200));
    }

    #[test]
    fn test_decimal_comma() {
        let item = form("Zinsen", "12,50").validate().unwrap();
        assert_eq!(item.amount, Money::from_cents(1250));
    }

    #[test]
    fn test_refused_submissions() {
        assert_eq!(
            form(" ", "10").validate().unwrap_err(),
            "Bitte eine Bezeichnung eingeben"
        );
        assert_eq!(
            form("Miete", "").validate().unwrap_err(),
            "Bitte einen Betrag eingeben"
        );
        assert!(form("Miete", "zehn").validate().is_err());
    }

    #[test]
    fn test_typing_clears_error() {
        let mut state = form("", "");
        state.set_error("x");
        state.insert_char('a');
        assert!(state.error_message.is_none());
        assert_eq!(state.label.value(), "a");

        state.next_field();
        state.insert_char('5');
        assert_eq!(state.amount.value(), "5");
    }

    #[test]
    fn test_reset_clears_fields() {
        let mut state = form("Miete", "900");
        state.next_field();
        state.reset();
        assert!(state.label.value().is_empty());
        assert!(state.amount.value().is_empty());
        assert_eq!(state.focused_field, AddItemField::Label);
    }
}
