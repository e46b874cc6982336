//! Off-screen capture of the monthly report
//!
//! The report is rendered into a detached [`Buffer`] whose width comes from a
//! fixed reference width, never from the terminal, so the same budget always
//! yields the same capture.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use tracing::debug;

use super::ExportError;
use crate::reports::{MonthlyReport, ReportData};

/// Logical units covered by one cell horizontally
pub const CELL_WIDTH_UNITS: u16 = 8;
/// Logical units covered by one cell vertically
pub const CELL_HEIGHT_UNITS: u16 = 16;

/// Parameters of a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Upscale factor applied to the logical size
    pub scale: u16,
    /// Fill behind everything the report does not paint
    pub background: (u8, u8, u8),
    /// Layout width in logical units, independent of the screen
    pub reference_width: u16,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2,
            background: (0xf4, 0xf4, 0xf4),
            reference_width: 800,
        }
    }
}

impl CaptureOptions {
    /// Number of cell columns the reference width gives
    pub fn columns(&self) -> u16 {
        self.reference_width / CELL_WIDTH_UNITS
    }
}

/// A captured report: a grid of styled cells plus its capture parameters
#[derive(Debug, Clone)]
pub struct Raster {
    pub buffer: Buffer,
    pub scale: u16,
    pub background: (u8, u8, u8),
}

impl Raster {
    pub fn columns(&self) -> u16 {
        self.buffer.area.width
    }

    pub fn rows(&self) -> u16 {
        self.buffer.area.height
    }

    /// Size in device pixels: logical size times the scale factor
    pub fn pixel_size(&self) -> (u32, u32) {
        let scale = u32::from(self.scale);
        (
            u32::from(self.columns()) * u32::from(CELL_WIDTH_UNITS) * scale,
            u32::from(self.rows()) * u32::from(CELL_HEIGHT_UNITS) * scale,
        )
    }
}

/// Something that can turn the report into a raster
pub trait Rasterizer {
    fn capture(&self, report: &ReportData, options: &CaptureOptions) -> Result<Raster, ExportError>;
}

/// Renders the report widget into an off-screen buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferRasterizer;

impl Rasterizer for BufferRasterizer {
    fn capture(
        &self,
        report: &ReportData,
        options: &CaptureOptions,
    ) -> Result<Raster, ExportError> {
        let columns = options.columns();
        if columns < MonthlyReport::MIN_WIDTH {
            return Err(ExportError::NothingToExport(format!(
                "reference width {} gives {} columns, the report needs {}",
                options.reference_width,
                columns,
                MonthlyReport::MIN_WIDTH
            )));
        }
        if options.scale == 0 {
            return Err(ExportError::Capture("scale factor must be at least 1".into()));
        }

        let widget = MonthlyReport::new(report);
        let area = Rect::new(0, 0, columns, widget.required_height());
        let mut buffer = Buffer::empty(area);
        let (r, g, b) = options.background;
        buffer.set_style(area, Style::default().bg(Color::Rgb(r, g, b)));
        widget.render(area, &mut buffer);

        let raster = Raster {
            buffer,
            scale: options.scale,
            background: options.background,
        };
        let (width, height) = raster.pixel_size();
        debug!(columns, rows = raster.rows(), width, height, "captured report");
        Ok(raster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinanceItem, Money};

    fn report() -> ReportData {
        ReportData {
            month: "Januar".into(),
            year: 2026,
            total_income: Money::from_euros(4200),
            income_items: vec![FinanceItem::new("Gehalt", Money::from_euros(4200)).unwrap()],
            total_expenses: Money::zero(),
            expense_items: vec![],
            invest_amount: Money::zero(),
            remaining: Money::from_euros(4200),
        }
    }

    #[test]
    fn test_default_options() {
        let options = CaptureOptions::default();
        assert_eq!(options.scale, 2);
        assert_eq!(options.reference_width, 800);
        assert_eq!(options.columns(), 100);
    }

    #[test]
    fn test_capture_uses_reference_width() {
        let raster = BufferRasterizer
            .capture(&report(), &CaptureOptions::default())
            .unwrap();
        assert_eq!(raster.columns(), 100);
        assert_eq!(
            raster.rows(),
            MonthlyReport::new(&report()).required_height()
        );
        assert_eq!(raster.pixel_size(), (1600, u32::from(raster.rows()) * 32));
    }

    #[test]
    fn test_unmeasurable_target_is_nothing_to_export() {
        let options = CaptureOptions {
            reference_width: 4,
            ..CaptureOptions::default()
        };
        let err = BufferRasterizer.capture(&report(), &options).unwrap_err();
        assert!(matches!(err, ExportError::NothingToExport(_)));
    }

    #[test]
    fn test_widths_below_the_layout_are_nothing_to_export() {
        for reference_width in [96, 104, 112, 120, 127] {
            let options = CaptureOptions {
                reference_width,
                ..CaptureOptions::default()
            };
            let err = BufferRasterizer.capture(&report(), &options).unwrap_err();
            assert!(matches!(err, ExportError::NothingToExport(_)));
        }

        let options = CaptureOptions {
            reference_width: MonthlyReport::MIN_WIDTH * CELL_WIDTH_UNITS,
            ..CaptureOptions::default()
        };
        let raster = BufferRasterizer.capture(&report(), &options).unwrap();
        assert_eq!(raster.columns(), MonthlyReport::MIN_WIDTH);
    }

    #[test]
    fn test_zero_scale_fails() {
        let options = CaptureOptions {
            scale: 0,
            ..CaptureOptions::default()
        };
        let err = BufferRasterizer.capture(&report(), &options).unwrap_err();
        assert!(matches!(err, ExportError::Capture(_)));
    }
}
