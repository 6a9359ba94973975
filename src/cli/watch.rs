//! Watch command implementation.

use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

use crate::config::WatchConfig;
use crate::report::{ReportStore, SessionReport};
use crate::watch::{WatchSummary, Watcher};
use crate::Result;

/// Arguments for the watch command
#[derive(Args)]
pub struct WatchArgs {
    /// Directory to watch (defaults to the configured root)
    pub path: Option<PathBuf>,

    /// Total runtime budget in seconds
    #[arg(long)]
    pub max_runtime: Option<u64>,

    /// Sleep between polls in milliseconds
    #[arg(long)]
    pub poll_interval: Option<u64>,

    /// Duplicate detection strategy (pattern, content)
    #[arg(long)]
    pub dedupe: Option<String>,

    /// Read settings from a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a JSON session report into this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}

impl WatchArgs {
    /// Merge a config file (or defaults) with command-line overrides.
    pub fn build_config(&self) -> Result<WatchConfig> {
        let mut config = WatchConfig::load_or_default(self.config.as_deref())?;
        if let Some(path) = &self.path {
            config.root = path.clone();
        }
        if let Some(secs) = self.max_runtime {
            config.max_runtime_secs = secs;
        }
        if let Some(millis) = self.poll_interval {
            config.poll_interval_ms = millis;
        }
        if let Some(mode) = &self.dedupe {
            config.dedupe = mode.parse()?;
        }
        Ok(config)
    }
}

/// Run the watch command
pub async fn run(args: WatchArgs) -> Result<()> {
    let config = args.build_config()?;

    println!("Watching directory: {}", config.root.display());
    println!(
        "Runtime budget: {}s, poll interval: {}ms",
        config.max_runtime_secs, config.poll_interval_ms
    );

    let started = Utc::now();
    let watcher = Watcher::new(config)?;
    let summary = watcher.run().await?;

    print_summary(&summary);

    if let Some(dir) = args.report_dir {
        let report = SessionReport::from_summary(&summary, started);
        let store = ReportStore::new(&dir);
        let path = store.save(&report).await?;
        println!("Report saved: {}", path.display());
    }

    Ok(())
}

fn print_summary(summary: &WatchSummary) {
    println!("\nSession finished:");
    println!("  Ticks: {}", summary.ticks);
    println!("  Passes: {}", summary.passes);
    println!("  Files moved: {}", summary.totals.moved);
    println!("  Backups created: {}", summary.totals.backed_up);
    println!("  Duplicates removed: {}", summary.totals.removed);
    println!("  Failures: {}", summary.totals.failed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedupe::DedupeMode;
    use tempfile::TempDir;

    fn bare_args() -> WatchArgs {
        WatchArgs {
            path: None,
            max_runtime: None,
            poll_interval: None,
            dedupe: None,
            config: None,
            report_dir: None,
        }
    }

    #[test]
    fn test_build_config_defaults() {
        let config = bare_args().build_config().unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.max_runtime_secs, 10);
        assert_eq!(config.dedupe, DedupeMode::Pattern);
    }

    #[test]
    fn test_build_config_applies_overrides() {
        let mut args = bare_args();
        args.path = Some(PathBuf::from("/tmp/downloads"));
        args.max_runtime = Some(30);
        args.poll_interval = Some(250);
        args.dedupe = Some("content".to_string());

        let config = args.build_config().unwrap();
        assert_eq!(config.root, PathBuf::from("/tmp/downloads"));
        assert_eq!(config.max_runtime_secs, 30);
        assert_eq!(config.poll_interval_ms, 250);
        assert_eq!(config.dedupe, DedupeMode::Content);
    }

    #[test]
    fn test_config_file_root_survives_when_no_path_given() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("tidywatch.toml");
        let mut on_disk = WatchConfig::default();
        on_disk.root = PathBuf::from("/tmp/from-file");
        on_disk.max_runtime_secs = 42;
        on_disk.save(&file).unwrap();

        let mut args = bare_args();
        args.config = Some(file);

        let config = args.build_config().unwrap();
        assert_eq!(config.root, PathBuf::from("/tmp/from-file"));
        assert_eq!(config.max_runtime_secs, 42);
    }

    #[test]
    fn test_build_config_rejects_unknown_dedupe() {
        let mut args = bare_args();
        args.dedupe = Some("fuzzy".to_string());
        assert!(args.build_config().is_err());
    }
}
