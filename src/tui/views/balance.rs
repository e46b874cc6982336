//! Balance summary
//!
//! What remains after expenses; red when negative.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::format::format_currency;
use crate::tui::app::App;

/// Render the balance card
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let remaining = app.budget.remaining();
    let color = if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let block = Block::default()
        .title(" Was mir bleibt ")
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let lines = vec![
        Line::from(Span::styled(
            format_currency(remaining),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Einnahmen ", Style::default().fg(Color::Gray)),
            Span::raw(format_currency(app.budget.total_income())),
            Span::styled("  −  Ausgaben ", Style::default().fg(Color::Gray)),
            Span::raw(format_currency(app.budget.total_expenses())),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
