//! Command-line interface for tidywatch.

use clap::{Parser, Subcommand};

pub mod organize;
pub mod report;
pub mod watch;

/// tidywatch keeps a downloads folder tidy by sorting files into
/// per-extension folders, backing up name collisions, and pruning
/// duplicates.
#[derive(Parser)]
#[command(name = "tidywatch")]
#[command(about = "Sort a directory's files into per-extension folders")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Watch a directory and organize new files until the runtime budget expires
    Watch(watch::WatchArgs),
    /// Run a single organize pass and exit
    Organize(organize::OrganizeArgs),
    /// List and inspect saved session reports
    Report(report::ReportArgs),
}
