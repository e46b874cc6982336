//! Inline amount editor
//!
//! Edits the amount of the selected item. Malformed input is refused with a
//! message and leaves the item unchanged.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::format::format_plain;
use crate::models::{FinanceItem, ItemKind};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{render_input_with_cursor, TextField};

/// State for the amount editor
#[derive(Debug, Clone)]
pub struct EditAmountState {
    pub kind: ItemKind,
    pub index: usize,
    pub label: String,
    pub input: TextField,
    pub error_message: Option<String>,
}

impl Default for EditAmountState {
    fn default() -> Self {
        Self {
            kind: ItemKind::Income,
            index: 0,
            label: String::new(),
            input: TextField::new(),
            error_message: None,
        }
    }
}

impl EditAmountState {
    /// Start editing `item`, prefilled with its current amount
    pub fn for_item(kind: ItemKind, index: usize, item: &FinanceItem) -> Self {
        Self {
            kind,
            index,
            label: item.label.clone(),
            input: TextField::with_value(format_plain(item.amount)),
            error_message: None,
        }
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the amount editor
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.edit_amount_form;

    let area = centered_rect_fixed(46, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Betrag ändern: {} ", state.label))
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
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(render_input_with_cursor("€ ", &state.input, true)),
        chunks[0],
    );

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            chunks[2],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Speichern  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Abbrechen"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[3]);
}

/// Handle key events for the amount editor
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let state = &mut app.edit_amount_form;
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Enter => {
            app.submit_edit_amount();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.clear();
            state.error_message = None;
        }
        KeyCode::Char(c) => {
            state.input.insert(c);
            state.error_message = None;
        }
        KeyCode::Backspace => {
            state.input.backspace();
            state.error_message = None;
        }
        KeyCode::Delete => state.input.delete(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_start(),
        KeyCode::End => state.input.move_end(),
        _ => return false,
    }
    true
}
