//! Error dialog widget
//!
//! Displays a blocking error with recovery suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::export::ExportError;

/// An error with details and suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub title: String,
    pub details: String,
    pub suggestions: Vec<String>,
    /// Underlying error text
    pub technical: Option<String>,
}

impl ErrorInfo {
    /// Create error info for a failed export
    pub fn from_export_error(error: &ExportError) -> Self {
        let mut info = Self::simple(
            "Export fehlgeschlagen",
            "PDF-Export fehlgeschlagen. Bitte erneut versuchen.",
        );
        info.technical = Some(error.to_string());
        if let ExportError::Io { .. } = error {
            info = info.with_suggestion("Schreibrechte im Exportordner prüfen");
        }
        info
    }

    pub fn simple(title: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: details.into(),
            suggestions: vec![],
            technical: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Details
                Constraint::Min(1),    // Suggestions and technical details
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let mut lines: Vec<Line> = Vec::new();
        for suggestion in &self.error.suggestions {
            lines.push(Line::from(vec![
                Span::raw("  - "),
                Span::raw(suggestion.as_str()),
            ]));
        }
        if let Some(ref technical) = self.error.technical {
            lines.push(Line::from(Span::styled(
                technical.as_str(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new("Esc oder Enter zum Schließen")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 70).min(parent.width);
    let height = (parent.height * 50 / 100).clamp(10, 14).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_info_from_export_error() {
        let info = ErrorInfo::from_export_error(&ExportError::Capture("boom".into()));

        assert_eq!(info.title, "Export fehlgeschlagen");
        assert_eq!(
            info.details,
            "PDF-Export fehlgeschlagen. Bitte erneut versuchen."
        );
        assert_eq!(info.technical.as_deref(), Some("Capture failed: boom"));
        assert!(info.suggestions.is_empty());
    }

    #[test]
    fn test_io_failure_suggests_permissions() {
        let error = ExportError::Io {
            path: "/nope/out.pdf".into(),
            reason: "permission denied".into(),
        };
        let info = ErrorInfo::from_export_error(&error);
        assert_eq!(info.suggestions, ["Schreibrechte im Exportordner prüfen"]);
    }

    #[test]
    fn test_dialog_area_fits_small_parent() {
        let area = error_dialog_area(Rect::new(0, 0, 30, 8));
        assert!(area.width <= 30 && area.height <= 8);
    }
}
