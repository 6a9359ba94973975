//! Organize command implementation for one-shot runs.

use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

use crate::dedupe::DedupeMode;
use crate::organize::{Organizer, PassSummary};
use crate::report::{ReportStore, SessionReport};
use crate::Result;

/// Arguments for the organize command
#[derive(Args)]
pub struct OrganizeArgs {
    /// Directory to organize
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Duplicate detection strategy (pattern, content)
    #[arg(long, default_value = "pattern")]
    pub dedupe: String,

    /// Write a JSON session report into this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}

/// Run the organize command
pub async fn run(args: OrganizeArgs) -> Result<()> {
    let mode: DedupeMode = args.dedupe.parse()?;

    println!("Organizing directory: {}", args.path.display());

    let started = Utc::now();
    let organizer = Organizer::new(&args.path, mode)?;
    let summary = organizer.run_pass()?;

    print_summary(&summary);

    if let Some(dir) = args.report_dir {
        let report = SessionReport::new(
            organizer.root().to_path_buf(),
            mode,
            started,
            0,
            1,
            summary,
        );
        let store = ReportStore::new(&dir);
        let path = store.save(&report).await?;
        println!("Report saved: {}", path.display());
    }

    Ok(())
}

fn print_summary(summary: &PassSummary) {
    println!("\nPass finished:");
    println!("  Files scanned: {}", summary.scanned);
    println!("  Files moved: {}", summary.moved);
    println!("  Backups created: {}", summary.backed_up);
    println!("  Duplicates removed: {}", summary.removed);
    println!("  Failures: {}", summary.failed);
}
