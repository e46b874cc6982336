//! Monthly overview report
//!
//! A static, full-page layout of the current budget. It has no state and no
//! interaction; the same [`ReportData`] at the same width always produces the
//! same cells, which is what makes it usable as an off-screen capture source.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use serde::Serialize;

use crate::format::format_currency;
use crate::models::{FinanceItem, Money};

/// Colors of the printed report
pub mod palette {
    use ratatui::style::Color;

    /// Page background (#f4f4f4)
    pub const PAGE: Color = Color::Rgb(244, 244, 244);
    /// Primary text
    pub const INK: Color = Color::Rgb(17, 24, 39);
    /// Secondary text
    pub const MUTED: Color = Color::Rgb(107, 114, 128);
    /// Faint captions
    pub const FAINT: Color = Color::Rgb(156, 163, 175);
    /// Balance card background
    pub const GREEN: Color = Color::Rgb(45, 106, 79);
    /// Income accent (#fdef84)
    pub const YELLOW: Color = Color::Rgb(253, 239, 132);
    /// Expense accent (#f7c6a9)
    pub const PEACH: Color = Color::Rgb(247, 198, 169);
    /// Investment card background
    pub const BEIGE: Color = Color::Rgb(239, 233, 225);
    /// Card border and separators (#e8dfd3)
    pub const LINE: Color = Color::Rgb(232, 223, 211);
    /// Text on the green card
    pub const ON_GREEN: Color = Color::Rgb(255, 255, 255);
}

/// Snapshot of everything the report shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    pub month: String,
    pub year: i32,
    pub total_income: Money,
    pub income_items: Vec<FinanceItem>,
    pub total_expenses: Money,
    pub expense_items: Vec<FinanceItem>,
    pub invest_amount: Money,
    pub remaining: Money,
}

const MARGIN_X: u16 = 6;
const HEADER_HEIGHT: u16 = 5;
const BALANCE_HEIGHT: u16 = 5;
const SECTION_HEAD_HEIGHT: u16 = 4;
const INVEST_HEIGHT: u16 = 7;
const FOOTER_HEIGHT: u16 = 4;
const SECTION_GAP: u16 = 4;
const MIN_SECTION_WIDTH: u16 = 12;

/// The monthly report widget
pub struct MonthlyReport<'a> {
    data: &'a ReportData,
}

impl<'a> MonthlyReport<'a> {
    /// Narrowest area the layout fits in; anything smaller renders blank
    pub const MIN_WIDTH: u16 = MARGIN_X * 2 + MIN_SECTION_WIDTH * 2 + SECTION_GAP;

    pub fn new(data: &'a ReportData) -> Self {
        Self { data }
    }

    /// Rows needed to lay out the whole report
    pub fn required_height(&self) -> u16 {
        let rows = self
            .data
            .income_items
            .len()
            .max(self.data.expense_items.len())
            .max(1) as u16;
        1 + HEADER_HEIGHT
            + BALANCE_HEIGHT
            + 1
            + SECTION_HEAD_HEIGHT
            + rows
            + 1
            + INVEST_HEIGHT
            + FOOTER_HEIGHT
            + 1
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        buf.set_string(
            area.x,
            area.y,
            "MONEY FIX PLANER",
            Style::default()
                .fg(palette::FAINT)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            area.x,
            area.y + 1,
            "Monatliche Finanzübersicht",
            Style::default()
                .fg(palette::INK)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            area.x,
            area.y + 2,
            format!("{} {}", self.data.month, self.data.year),
            Style::default().fg(palette::MUTED),
        );

        // Accent bars: long green, short yellow, short peach
        let y = area.y + 3;
        buf.set_string(area.x, y, "▀".repeat(12), Style::default().fg(palette::GREEN));
        buf.set_string(area.x + 13, y, "▀▀▀", Style::default().fg(palette::YELLOW));
        buf.set_string(area.x + 17, y, "▀▀▀", Style::default().fg(palette::PEACH));
    }

    fn render_balance(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::GREEN));
        let text = Style::default().fg(palette::ON_GREEN).bg(palette::GREEN);
        let inner_x = area.x + 3;
        let width = area.width.saturating_sub(6);

        buf.set_stringn(inner_x, area.y + 1, "Was mir bleibt", width as usize, text);
        buf.set_stringn(
            inner_x,
            area.y + 2,
            format_currency(self.data.remaining),
            width as usize,
            text.add_modifier(Modifier::BOLD),
        );
        buf.set_stringn(
            inner_x,
            area.y + 3,
            "Geld, das am Ende des Monats übrig ist",
            width as usize,
            text,
        );
    }

    fn render_section(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        total: Money,
        items: &[FinanceItem],
        accent: Color,
    ) {
        let width = area.width as usize;
        buf.set_string(area.x, area.y, "▀".repeat(width), Style::default().fg(accent));
        buf.set_string(
            area.x,
            area.y + 1,
            title.to_uppercase(),
            Style::default()
                .fg(palette::FAINT)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            area.x,
            area.y + 2,
            format_currency(total),
            Style::default()
                .fg(palette::INK)
                .add_modifier(Modifier::BOLD),
        );
        buf.set_string(area.x, area.y + 3, "─".repeat(width), Style::default().fg(palette::LINE));

        for (idx, item) in items.iter().enumerate() {
            let y = area.y + SECTION_HEAD_HEIGHT + idx as u16;
            if y >= area.bottom() {
                break;
            }
            let amount = format_currency(item.amount);
            let label_width = width.saturating_sub(amount.chars().count() + 1);
            buf.set_stringn(
                area.x,
                y,
                &item.label,
                label_width,
                Style::default().fg(palette::MUTED),
            );
            Line::from(Span::styled(
                amount,
                Style::default()
                    .fg(palette::INK)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right)
            .render(Rect::new(area.x, y, area.width, 1), buf);
        }
    }

    fn render_invest(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::BEIGE));
        let base = Style::default().bg(palette::BEIGE);
        let inner = Rect::new(area.x + 3, area.y, area.width.saturating_sub(6), area.height);

        buf.set_string(
            inner.x,
            inner.y + 1,
            "Nächster Schritt",
            base.fg(palette::INK).add_modifier(Modifier::BOLD),
        );
        buf.set_string(
            inner.x,
            inner.y + 2,
            "Wie viel davon hast du investiert?",
            base.fg(palette::MUTED),
        );
        Line::from(Span::styled("STATUS", base.fg(palette::FAINT).add_modifier(Modifier::BOLD)))
            .alignment(Alignment::Right)
            .render(Rect::new(inner.x, inner.y + 1, inner.width, 1), buf);
        Line::from(Span::styled(
            " Geplant ",
            Style::default()
                .fg(palette::INK)
                .bg(palette::PEACH)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .render(Rect::new(inner.x, inner.y + 2, inner.width, 1), buf);

        Line::from(vec![
            Span::styled(
                format_currency(self.data.invest_amount),
                base.fg(palette::INK).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  für Investments vorgesehen", base.fg(palette::FAINT)),
        ])
        .render(Rect::new(inner.x, inner.y + 4, inner.width, 1), buf);
        buf.set_stringn(
            inner.x,
            inner.y + 5,
            format!("Von {} verbleibend", format_currency(self.data.remaining)),
            inner.width as usize,
            base.fg(palette::FAINT).add_modifier(Modifier::ITALIC),
        );
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let y = area.y + 2;
        buf.set_string(
            area.x,
            y,
            "─".repeat(area.width as usize),
            Style::default().fg(palette::LINE),
        );
        Line::from(Span::styled(
            "MONEY FIX • MONATLICHE ZUSAMMENFASSUNG",
            Style::default().fg(palette::FAINT),
        ))
        .alignment(Alignment::Center)
        .render(Rect::new(area.x, y + 1, area.width, 1), buf);
    }
}

impl Widget for MonthlyReport<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::PAGE).fg(palette::INK));
        if area.width < Self::MIN_WIDTH || area.height < self.required_height() {
            // Too small for the fixed layout; leave the page blank
            return;
        }

        let x = area.x + MARGIN_X;
        let width = area.width.saturating_sub(MARGIN_X * 2);
        let mut y = area.y + 1;

        self.render_header(Rect::new(x, y, width, HEADER_HEIGHT), buf);
        y += HEADER_HEIGHT;

        self.render_balance(Rect::new(x, y, width, BALANCE_HEIGHT), buf);
        y += BALANCE_HEIGHT + 1;

        let rows = self
            .data
            .income_items
            .len()
            .max(self.data.expense_items.len())
            .max(1) as u16;
        let section_height = SECTION_HEAD_HEIGHT + rows;
        let gap = SECTION_GAP;
        let column = width.saturating_sub(gap) / 2;
        self.render_section(
            Rect::new(x, y, column, section_height),
            buf,
            "Einnahmen",
            self.data.total_income,
            &self.data.income_items,
            palette::YELLOW,
        );
        self.render_section(
            Rect::new(x + column + gap, y, column, section_height),
            buf,
            "Ausgaben",
            self.data.total_expenses,
            &self.data.expense_items,
            palette::PEACH,
        );
        y += section_height + 1;

        self.render_invest(Rect::new(x, y, width, INVEST_HEIGHT), buf);
        y += INVEST_HEIGHT;

        self.render_footer(Rect::new(x, y, width, FOOTER_HEIGHT), buf);
    }
}
