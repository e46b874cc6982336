//! PDF assembly for captured reports
//!
//! The capture is stretched over the full A4 portrait page, ignoring its
//! aspect ratio. Backgrounds become filled rectangles and text runs are set
//! in Courier so every cell keeps its column.

use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, Color as PdfColor, IndirectFontRef, Mm, PdfDocument, PdfLayerReference,
    Rect as PdfRect, Rgb,
};
use ratatui::style::{Color, Modifier};
use tracing::debug;

use super::capture::Raster;
use super::ExportError;

/// A4 portrait width in millimetres
pub const PAGE_WIDTH_MM: f32 = 210.0;
/// A4 portrait height in millimetres
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const PT_PER_MM: f32 = 72.0 / 25.4;
/// Courier advance width relative to the font size
const COURIER_ADVANCE: f32 = 0.6;
const DOCUMENT_TITLE: &str = "Money Fix Planer";

/// Something that can persist a raster as a document
pub trait DocumentWriter {
    fn write(&self, raster: &Raster, path: &Path) -> Result<(), ExportError>;
}

/// Writes a single-page A4 PDF
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocumentWriter;

impl DocumentWriter for PdfDocumentWriter {
    fn write(&self, raster: &Raster, path: &Path) -> Result<(), ExportError> {
        let bytes = render_pdf(raster)?;
        std::fs::write(path, &bytes).map_err(|e| ExportError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote PDF");
        Ok(())
    }
}

/// Page geometry of one cell
#[derive(Debug, Clone, Copy)]
struct Grid {
    cell_w: f32,
    cell_h: f32,
}

impl Grid {
    fn new(columns: u16, rows: u16) -> Self {
        Self {
            cell_w: PAGE_WIDTH_MM / f32::from(columns),
            cell_h: PAGE_HEIGHT_MM / f32::from(rows),
        }
    }

    fn left(&self, x: u16) -> f32 {
        f32::from(x) * self.cell_w
    }

    /// PDF origin is bottom-left; rows count from the top
    fn bottom(&self, y: u16) -> f32 {
        PAGE_HEIGHT_MM - f32::from(y + 1) * self.cell_h
    }

    fn font_size(&self) -> f32 {
        let by_width = self.cell_w * PT_PER_MM / COURIER_ADVANCE;
        let by_height = self.cell_h * PT_PER_MM * 0.9;
        by_width.min(by_height)
    }
}

/// Build the PDF bytes for a raster
pub fn render_pdf(raster: &Raster) -> Result<Vec<u8>, ExportError> {
    let columns = raster.columns();
    let rows = raster.rows();
    if columns == 0 || rows == 0 {
        return Err(ExportError::Document("capture is empty".into()));
    }

    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Report",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let regular = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ExportError::Document(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::CourierBold)
        .map_err(|e| ExportError::Document(e.to_string()))?;

    let page_bg = raster.background;
    layer.set_fill_color(pdf_color(page_bg));
    layer.add_rect(PdfRect::new(
        Mm(0.0),
        Mm(0.0),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
    ));

    let grid = Grid::new(columns, rows);
    for y in 0..rows {
        paint_backgrounds(&layer, raster, grid, y);
        paint_glyphs(&layer, raster, grid, y);
        paint_text(&layer, raster, grid, y, &regular, &bold);
    }

    let mut writer = BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer)
        .map_err(|e| ExportError::Document(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Document(e.to_string()))
}

/// Fill runs of equal background color in one row
fn paint_backgrounds(layer: &PdfLayerReference, raster: &Raster, grid: Grid, y: u16) {
    let buf = &raster.buffer;
    let mut x = 0;
    while x < raster.columns() {
        let bg = rgb_of(buf[(x, y)].bg, raster.background);
        let start = x;
        while x < raster.columns() && rgb_of(buf[(x, y)].bg, raster.background) == bg {
            x += 1;
        }
        if bg == raster.background {
            continue;
        }
        layer.set_fill_color(pdf_color(bg));
        layer.add_rect(PdfRect::new(
            Mm(grid.left(start)),
            Mm(grid.bottom(y)),
            Mm(grid.left(x)),
            Mm(grid.bottom(y) + grid.cell_h),
        ));
    }
}

/// Block and rule characters become shapes instead of text
fn paint_glyphs(layer: &PdfLayerReference, raster: &Raster, grid: Grid, y: u16) {
    let buf = &raster.buffer;
    for x in 0..raster.columns() {
        let cell = &buf[(x, y)];
        let (lower, upper) = match cell.symbol() {
            "▀" => (0.5, 1.0),
            "▄" => (0.0, 0.5),
            "█" => (0.0, 1.0),
            "─" => (0.45, 0.55),
            _ => continue,
        };
        let fg = rgb_of(cell.fg, INK);
        let bottom = grid.bottom(y);
        layer.set_fill_color(pdf_color(fg));
        layer.add_rect(PdfRect::new(
            Mm(grid.left(x)),
            Mm(bottom + grid.cell_h * lower),
            Mm(grid.left(x + 1)),
            Mm(bottom + grid.cell_h * upper),
        ));
    }
}

/// Set runs of equally styled text in one row
fn paint_text(
    layer: &PdfLayerReference,
    raster: &Raster,
    grid: Grid,
    y: u16,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let buf = &raster.buffer;
    let size = grid.font_size();
    let baseline = grid.bottom(y) + grid.cell_h * 0.25;

    let mut x = 0;
    while x < raster.columns() {
        let cell = &buf[(x, y)];
        if is_shape(cell.symbol()) || cell.symbol().trim().is_empty() {
            x += 1;
            continue;
        }
        let fg = rgb_of(cell.fg, INK);
        let is_bold = cell.modifier.contains(Modifier::BOLD);
        let start = x;
        let mut text = String::new();
        while x < raster.columns() {
            let next = &buf[(x, y)];
            if is_shape(next.symbol())
                || rgb_of(next.fg, INK) != fg
                || next.modifier.contains(Modifier::BOLD) != is_bold
            {
                break;
            }
            text.push(printable(next.symbol()));
            x += 1;
        }
        let text = text.trim_end();
        if text.is_empty() {
            continue;
        }
        layer.set_fill_color(pdf_color(fg));
        let font = if is_bold { bold } else { regular };
        layer.use_text(text, size, Mm(grid.left(start)), Mm(baseline), font);
    }
}

const INK: (u8, u8, u8) = (17, 24, 39);

fn is_shape(symbol: &str) -> bool {
    matches!(symbol, "▀" | "▄" | "█" | "─")
}

/// Map a cell symbol to one character the builtin fonts can encode
fn printable(symbol: &str) -> char {
    let Some(c) = symbol.chars().next() else {
        return ' ';
    };
    match c {
        ' '..='~' | '\u{a0}'..='\u{ff}' | '€' | '•' | '–' | '—' | '…' => c,
        '│' | '┃' => '|',
        '┌' | '┐' | '└' | '┘' | '├' | '┤' | '┼' => '+',
        _ => '?',
    }
}

fn rgb_of(color: Color, fallback: (u8, u8, u8)) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::White => (255, 255, 255),
        Color::Gray => (128, 128, 128),
        Color::DarkGray => (64, 64, 64),
        Color::Red | Color::LightRed => (200, 40, 40),
        Color::Green | Color::LightGreen => (40, 150, 60),
        Color::Yellow | Color::LightYellow => (220, 180, 30),
        Color::Blue | Color::LightBlue => (40, 80, 200),
        _ => fallback,
    }
}

fn pdf_color((r, g, b): (u8, u8, u8)) -> PdfColor {
    PdfColor::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}
