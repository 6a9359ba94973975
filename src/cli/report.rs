//! Report command implementation for inspecting saved sessions.

use clap::Args;
use std::path::PathBuf;

use crate::report::{ReportStore, SessionReport};
use crate::Result;

/// Arguments for the report command
#[derive(Args)]
pub struct ReportArgs {
    /// Directory containing saved session reports
    #[arg(short, long, default_value = "./reports")]
    pub report_dir: PathBuf,

    /// List all available reports
    #[arg(short, long)]
    pub list: bool,

    /// Show the report with this session id
    #[arg(long)]
    pub id: Option<String>,

    /// Output format (json, summary)
    #[arg(long, default_value = "summary")]
    pub format: String,
}

/// Run the report command
pub async fn run(args: ReportArgs) -> Result<()> {
    let store = ReportStore::new(&args.report_dir);

    if args.list {
        list_reports(&store).await?;
        return Ok(());
    }

    if let Some(id) = args.id {
        let report = store.load(&id).await?;
        show_report(&report, &args.format)?;
        return Ok(());
    }

    // Default: show the most recent report
    match store.list().await?.into_iter().next() {
        Some(report) => show_report(&report, &args.format)?,
        None => println!("No reports found in {}", args.report_dir.display()),
    }

    Ok(())
}

async fn list_reports(store: &ReportStore) -> Result<()> {
    let reports = store.list().await?;

    if reports.is_empty() {
        println!("No reports found.");
        return Ok(());
    }

    println!(
        "{:<38} {:<20} {:<8} {:<8} {:<8} {:<8}",
        "Session ID", "Finished", "Ticks", "Passes", "Moved", "Removed"
    );
    println!("{}", "-".repeat(94));

    for report in reports {
        println!(
            "{:<38} {:<20} {:<8} {:<8} {:<8} {:<8}",
            report.id,
            report.finished.format("%Y-%m-%d %H:%M:%S"),
            report.ticks,
            report.passes,
            report.totals.moved,
            report.totals.removed
        );
    }

    Ok(())
}

fn show_report(report: &SessionReport, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        _ => {
            print_report_summary(report);
        }
    }
    Ok(())
}

fn print_report_summary(report: &SessionReport) {
    println!("Session Report");
    println!("==============\n");
    println!("Session ID:      {}", report.id);
    println!("Root:            {}", report.root.display());
    println!("Dedupe mode:     {:?}", report.mode);
    println!(
        "Started:         {}",
        report.started.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Finished:        {}",
        report.finished.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Duration:        {}s", report.duration_secs());
    println!("Ticks:           {}", report.ticks);
    println!("Passes:          {}", report.passes);
    println!("Files scanned:   {}", report.totals.scanned);
    println!("Files moved:     {}", report.totals.moved);
    println!("Backups created: {}", report.totals.backed_up);
    println!("Duplicates gone: {}", report.totals.removed);
    println!("Failures:        {}", report.totals.failed);
}
