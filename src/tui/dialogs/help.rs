//! Help dialog
//!
//! Shows keyboard shortcuts, with the focused panel's keys listed first

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Hilfe ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.focused_panel))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn list_lines() -> Vec<Line<'static>> {
    vec![
        section("Einnahmen / Ausgaben"),
        key_line("j/k", "Eintrag auswählen"),
        key_line("a", "Eintrag hinzufügen"),
        key_line("Enter/e", "Betrag ändern"),
        key_line("d/Entf", "Eintrag löschen"),
    ]
}

fn planner_lines() -> Vec<Line<'static>> {
    vec![
        section("Investieren"),
        key_line("h/l", "Betrag um einen Schritt ändern"),
        key_line("H/L", "Betrag um 100 € ändern"),
        key_line("0", "Nichts investieren"),
        key_line("m", "Alles investieren"),
        key_line("Enter", "Für Investments vormerken"),
    ]
}

/// Help lines for the focused panel
fn help_lines(focus: FocusedPanel) -> Vec<Line<'static>> {
    let mut lines = match focus {
        FocusedPanel::Planner => planner_lines(),
        FocusedPanel::Income | FocusedPanel::Expenses => list_lines(),
    };
    lines.push(Line::from(""));
    lines.extend(match focus {
        FocusedPanel::Planner => list_lines(),
        FocusedPanel::Income | FocusedPanel::Expenses => planner_lines(),
    });
    lines.push(Line::from(""));
    lines.extend([
        section("Allgemein"),
        key_line("Tab", "Nächster Bereich"),
        key_line("1/2/3", "Einnahmen / Ausgaben / Investieren"),
        key_line("p", "Als PDF exportieren"),
        key_line("?", "Hilfe"),
        key_line("q", "Beenden"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Beliebige Taste zum Schließen",
            Style::default().fg(Color::DarkGray),
        )]),
    ]);
    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
