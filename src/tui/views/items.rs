//! Item list view
//!
//! One bordered table per list, with the running total in the title.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::format::format_currency;
use crate::models::ItemKind;
use crate::tui::app::App;

/// Shown for a list with no items
pub const EMPTY_PLACEHOLDER: &str = "Noch keine Einträge vorhanden";

/// Render the list for `kind`
pub fn render(frame: &mut Frame, app: &App, area: Rect, kind: ItemKind) {
    let is_focused = app.focused_panel.kind() == Some(kind);
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::White
    };
    let accent = match kind {
        ItemKind::Income => Color::Yellow,
        ItemKind::Expense => Color::LightRed,
    };

    let list = app.budget.list(kind);
    let block = Block::default()
        .title(format!(
            " {} · {} ",
            kind.title(),
            format_currency(list.total())
        ))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if list.is_empty() {
        let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let widths = [Constraint::Min(10), Constraint::Length(14)];

    let rows: Vec<Row> = list
        .items()
        .iter()
        .map(|item| {
            let amount_style = if item.amount.is_negative() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                Cell::from(item.label.clone()),
                Cell::from(
                    Line::from(format_currency(item.amount)).alignment(Alignment::Right),
                )
                .style(amount_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_index(kind)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
