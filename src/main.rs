use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use moneyfix::config::settings::month_name;
use moneyfix::config::{MoneyFixPaths, Settings};
use moneyfix::display::{format_config, format_summary};
use moneyfix::export::{BufferRasterizer, CaptureOptions, ExportPipeline, PdfDocumentWriter};
use moneyfix::logging::{self, LogTarget};
use moneyfix::services::BudgetController;

#[derive(Parser)]
#[command(
    name = "moneyfix",
    version,
    about = "Terminal-based monthly budget planner",
    long_about = "MoneyFix keeps track of this month's income and expenses, shows \
                  what remains, helps you plan how much of it to invest, and \
                  exports a one-page overview as PDF."
)]
struct Cli {
    /// Month shown in the header and report (1-12)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    /// Year shown in the header and report
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print the budget and its totals
    Summary,

    /// Export the monthly overview as PDF
    Export {
        /// Directory to write the PDF to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MoneyFixPaths::new()?;
    let mut settings = Settings::load_or_default(&paths)?;
    if let Some(month) = cli.month {
        settings.month = month_name(month).to_string();
    }
    if let Some(year) = cli.year {
        settings.year = year;
    }

    let command = cli.command.unwrap_or(Commands::Tui);
    let target = match command {
        Commands::Tui => LogTarget::Tui,
        _ => LogTarget::Cli,
    };
    let _log_guard = logging::init(&paths, cli.verbose, target)?;

    match command {
        Commands::Tui => {
            moneyfix::tui::run_tui(&settings, settings.resolved_export_dir())?;
        }
        Commands::Summary => {
            let budget = BudgetController::from_settings(&settings);
            print!(
                "{}",
                format_summary(&budget.report_data(&settings.month, settings.year))
            );
        }
        Commands::Export { output_dir } => {
            let dir = output_dir.unwrap_or_else(|| settings.resolved_export_dir());
            if !dir.is_dir() {
                bail!("Export directory does not exist: {}", dir.display());
            }
            let budget = BudgetController::from_settings(&settings);
            let report = budget.report_data(&settings.month, settings.year);

            let mut pipeline = ExportPipeline::new(CaptureOptions::default());
            let job = pipeline
                .begin(report, &dir)
                .context("An export is already running")?
                .without_delay();
            let result = job.run(&BufferRasterizer, &PdfDocumentWriter);
            pipeline.finish();

            let path = result.context("PDF export failed")?;
            println!("PDF gespeichert: {}", path.display());
        }
        Commands::Config => {
            println!("MoneyFix Konfiguration");
            println!("======================");
            print!("{}", format_config(&paths, &settings));
        }
    }

    Ok(())
}
