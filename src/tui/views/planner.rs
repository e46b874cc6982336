//! Investment planner view
//!
//! The slider over `[0, remaining]` and the inert commit control.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::format::format_currency;
use crate::services::invest::COARSE_STEP;
use crate::tui::app::{App, FocusedPanel};

/// Render the planner
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Planner;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::White
    };

    let block = Block::default()
        .title(" Nächster Schritt: Investieren ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Slider
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Commit control
        ])
        .split(inner);

    let amount = Line::from(vec![
        Span::styled(
            format_currency(app.budget.invest_amount()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" von {}", format_currency(app.budget.remaining())),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(amount), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(app.budget.invest_ratio().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[1]);

    let commit_style = if is_focused {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::Green)
    };
    let commit = Line::from(vec![
        Span::styled(" [Enter] Für Investments vormerken ", commit_style),
        Span::styled(
            format!(
                "  h/l ±{}  H/L ±{}  0 nichts  m alles",
                format_currency(app.budget.invest_step()),
                format_currency(COARSE_STEP)
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(commit), chunks[3]);
}
