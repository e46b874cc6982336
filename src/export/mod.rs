//! Export module for MoneyFix
//!
//! Turns the monthly report into a single-page A4 PDF:
//! - `capture`: renders the report off-screen at a fixed reference width
//! - `pdf`: stretches the capture over an A4 page and saves it
//! - `pipeline`: the idle/exporting state machine and the export job

pub mod capture;
pub mod pdf;
pub mod pipeline;

use std::path::PathBuf;

use thiserror::Error;

pub use capture::{BufferRasterizer, CaptureOptions, Raster, Rasterizer};
pub use pdf::{DocumentWriter, PdfDocumentWriter};
pub use pipeline::{ExportJob, ExportPipeline, ExportState, REPAINT_DELAY};

/// File name of every exported overview
pub const EXPORT_FILENAME: &str = "money-fix-planer-uebersicht.pdf";

/// Errors raised while exporting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The capture target cannot be measured; nothing is exported
    #[error("Nothing to export: {0}")]
    NothingToExport(String),

    /// Rendering the report off-screen failed
    #[error("Capture failed: {0}")]
    Capture(String),

    /// Building the PDF document failed
    #[error("Document assembly failed: {0}")]
    Document(String),

    /// Writing the file failed
    #[error("Could not save {}: {}", .path.display(), .reason)]
    Io { path: PathBuf, reason: String },
}

impl ExportError {
    /// Whether this failure should be shown to the user
    ///
    /// A missing capture target is skipped silently.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::NothingToExport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility() {
        assert!(!ExportError::NothingToExport("width 0".into()).is_user_visible());
        assert!(ExportError::Capture("x".into()).is_user_visible());
        assert!(ExportError::Document("x".into()).is_user_visible());
    }

    #[test]
    fn test_save_error_display() {
        let err = ExportError::Io {
            path: PathBuf::from("/tmp/a.pdf"),
            reason: "denied".into(),
        };
        assert_eq!(err.to_string(), "Could not save /tmp/a.pdf: denied");
    }
}
