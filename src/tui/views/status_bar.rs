//! Status bar view
//!
//! Focused panel, export state, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focus = match app.focused_panel {
        FocusedPanel::Income => "Einnahmen",
        FocusedPanel::Expenses => "Ausgaben",
        FocusedPanel::Planner => "Investieren",
    };

    let mut spans = vec![
        Span::styled(" Bereich: ", Style::default().fg(Color::White)),
        Span::styled(
            focus,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if app.is_exporting() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Exportiere...", Style::default().fg(Color::Yellow)));
    }

    let hints = " Tab:Bereich  a:Neu  d:Löschen  p:PDF  ?:Hilfe  q:Beenden ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
