//! Export state machine
//!
//! `Idle -> Exporting -> Idle`. A request while exporting is ignored; every
//! outcome, success or failure, returns the pipeline to idle.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, error, info};

use super::capture::{CaptureOptions, Rasterizer};
use super::pdf::DocumentWriter;
use super::{ExportError, EXPORT_FILENAME};
use crate::reports::ReportData;

/// Pause before capturing so the "exporting" state is painted first
pub const REPAINT_DELAY: Duration = Duration::from_millis(100);

/// Whether an export is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportState {
    #[default]
    Idle,
    Exporting,
}

/// Guards against concurrent exports and hands out jobs
#[derive(Debug, Clone, Default)]
pub struct ExportPipeline {
    state: ExportState,
    options: CaptureOptions,
}

impl ExportPipeline {
    pub fn new(options: CaptureOptions) -> Self {
        Self {
            state: ExportState::Idle,
            options,
        }
    }

    pub fn state(&self) -> ExportState {
        self.state
    }

    pub fn is_exporting(&self) -> bool {
        self.state == ExportState::Exporting
    }

    /// Start an export of `report` into `dir`
    ///
    /// Returns `None` when an export is already running.
    pub fn begin(&mut self, report: ReportData, dir: &Path) -> Option<ExportJob> {
        if self.is_exporting() {
            debug!("export already running, request ignored");
            return None;
        }
        self.state = ExportState::Exporting;
        let path = dir.join(EXPORT_FILENAME);
        info!(path = %path.display(), "export started");
        Some(ExportJob {
            report,
            options: self.options,
            path,
            delay: REPAINT_DELAY,
        })
    }

    /// Record the outcome of the running export
    pub fn finish(&mut self) {
        self.state = ExportState::Idle;
    }
}

/// One export: a frozen report snapshot and its destination
#[derive(Debug, Clone)]
pub struct ExportJob {
    report: ReportData,
    options: CaptureOptions,
    path: PathBuf,
    delay: Duration,
}

impl ExportJob {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn report(&self) -> &ReportData {
        &self.report
    }

    /// Skip the repaint pause (headless exports)
    pub fn without_delay(mut self) -> Self {
        self.delay = Duration::ZERO;
        self
    }

    /// Capture, assemble and save
    pub fn run<R, W>(&self, rasterizer: &R, writer: &W) -> Result<PathBuf, ExportError>
    where
        R: Rasterizer + ?Sized,
        W: DocumentWriter + ?Sized,
    {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let raster = rasterizer.capture(&self.report, &self.options)?;
        writer.write(&raster, &self.path)?;
        Ok(self.path.clone())
    }

    /// Run on a worker thread and hand the outcome to `on_done`
    ///
    /// `on_done` is called exactly once, also when capture or assembly
    /// panics; a panic is reported as [`ExportError::Capture`].
    pub fn spawn<R, W, F>(self, rasterizer: R, writer: W, on_done: F) -> JoinHandle<()>
    where
        R: Rasterizer + Send + 'static,
        W: DocumentWriter + Send + 'static,
        F: FnOnce(Result<PathBuf, ExportError>) + Send + 'static,
    {
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| self.run(&rasterizer, &writer)))
                .unwrap_or_else(|payload| {
                    let reason = panic_reason(payload.as_ref());
                    error!(%reason, "export worker panicked");
                    Err(ExportError::Capture(format!("export worker panicked: {}", reason)))
                });
            on_done(result);
        })
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::capture::{BufferRasterizer, Raster};
    use crate::export::pdf::PdfDocumentWriter;
    use crate::models::Money;
    use std::cell::RefCell;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn report() -> ReportData {
        ReportData {
            month: "Januar".into(),
            year: 2026,
            total_income: Money::from_euros(4550),
            income_items: vec![],
            total_expenses: Money::from_euros(2710),
            expense_items: vec![],
            invest_amount: Money::from_euros(500),
            remaining: Money::from_euros(1840),
        }
    }

    /// Counts saves instead of touching the disk
    #[derive(Default)]
    struct CountingWriter {
        saved: RefCell<Vec<PathBuf>>,
    }

    impl DocumentWriter for CountingWriter {
        fn write(&self, _raster: &Raster, path: &Path) -> Result<(), ExportError> {
            self.saved.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn capture(&self, _: &ReportData, _: &CaptureOptions) -> Result<Raster, ExportError> {
            Err(ExportError::Capture("renderer crashed".into()))
        }
    }

    struct PanickingRasterizer;

    impl Rasterizer for PanickingRasterizer {
        fn capture(&self, _: &ReportData, _: &CaptureOptions) -> Result<Raster, ExportError> {
            panic!("layout blew up");
        }
    }

    #[test]
    fn test_second_request_while_exporting_is_ignored() {
        let mut pipeline = ExportPipeline::default();
        let dir = PathBuf::from("/tmp");

        let job = pipeline.begin(report(), &dir).unwrap().without_delay();
        assert!(pipeline.is_exporting());
        assert!(pipeline.begin(report(), &dir).is_none());

        let writer = CountingWriter::default();
        job.run(&BufferRasterizer, &writer).unwrap();
        pipeline.finish();

        assert_eq!(writer.saved.borrow().len(), 1);
        assert_eq!(writer.saved.borrow()[0], dir.join(EXPORT_FILENAME));
        assert_eq!(pipeline.state(), ExportState::Idle);
    }

    #[test]
    fn test_failed_capture_saves_nothing_and_returns_to_idle() {
        let mut pipeline = ExportPipeline::default();
        let job = pipeline
            .begin(report(), Path::new("/tmp"))
            .unwrap()
            .without_delay();

        let writer = CountingWriter::default();
        let err = job.run(&FailingRasterizer, &writer).unwrap_err();
        pipeline.finish();

        assert_eq!(err, ExportError::Capture("renderer crashed".into()));
        assert!(writer.saved.borrow().is_empty());
        assert!(!pipeline.is_exporting());
        assert!(pipeline.begin(report(), Path::new("/tmp")).is_some());
    }

    #[test]
    fn test_job_uses_fixed_filename() {
        let mut pipeline = ExportPipeline::default();
        let job = pipeline.begin(report(), Path::new("/data/out")).unwrap();
        assert_eq!(
            job.path(),
            Path::new("/data/out/money-fix-planer-uebersicht.pdf")
        );
        assert_eq!(job.report().remaining, Money::from_euros(1840));
    }

    #[test]
    fn test_spawned_export_writes_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let mut pipeline = ExportPipeline::default();
        let job = pipeline.begin(report(), temp_dir.path()).unwrap();

        let (tx, rx) = mpsc::channel();
        job.spawn(BufferRasterizer, PdfDocumentWriter, move |result| {
            tx.send(result).unwrap();
        })
        .join()
        .unwrap();
        pipeline.finish();

        let path = rx.recv().unwrap().unwrap();
        assert!(path.exists());
        assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_panicking_capture_still_reports_once() {
        let mut pipeline = ExportPipeline::default();
        let job = pipeline
            .begin(report(), Path::new("/tmp"))
            .unwrap()
            .without_delay();

        let (tx, rx) = mpsc::channel();
        let handle = job.spawn(PanickingRasterizer, CountingWriter::default(), move |result| {
            tx.send(result).unwrap();
        });
        assert!(handle.join().is_ok());

        let results: Vec<_> = rx.iter().collect();
        assert_eq!(results.len(), 1);
        match &results[0] {
            Err(ExportError::Capture(reason)) => assert!(reason.contains("layout blew up")),
            other => panic!("unexpected result: {other:?}"),
        }

        pipeline.finish();
        assert_eq!(pipeline.state(), ExportState::Idle);
    }
}
