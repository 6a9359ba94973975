//! Session reports.
//!
//! A finished session can be persisted as a JSON document named
//! `report-<id>.json`, then listed or inspected later through the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::dedupe::DedupeMode;
use crate::error::{Error, Result};
use crate::organize::PassSummary;
use crate::watch::WatchSummary;

/// Persistent record of one watch or organize session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub id: Uuid,
    /// Canonical root the session worked on
    pub root: PathBuf,
    /// Duplicate detection strategy in effect
    pub mode: DedupeMode,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    /// Polls performed; zero for one-shot organize runs
    pub ticks: u64,
    /// Organize passes that actually ran
    pub passes: u64,
    pub totals: PassSummary,
}

impl SessionReport {
    pub fn new(
        root: PathBuf,
        mode: DedupeMode,
        started: DateTime<Utc>,
        ticks: u64,
        passes: u64,
        totals: PassSummary,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            root,
            mode,
            started,
            finished: Utc::now(),
            ticks,
            passes,
            totals,
        }
    }

    /// Build a report from a finished watch session.
    pub fn from_summary(summary: &WatchSummary, started: DateTime<Utc>) -> Self {
        Self::new(
            summary.root.clone(),
            summary.mode,
            started,
            summary.ticks,
            summary.passes,
            summary.totals,
        )
    }

    pub fn duration_secs(&self) -> i64 {
        (self.finished - self.started).num_seconds()
    }

    fn file_name(id: &str) -> String {
        format!("report-{}.json", id)
    }
}

/// Reads and writes session reports in one directory.
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Write `report` as pretty JSON and return the file path.
    pub async fn save(&self, report: &SessionReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(SessionReport::file_name(&report.id.to_string()));
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&path, json).await?;
        debug!("report saved to {}", path.display());
        Ok(path)
    }

    /// List saved reports, newest first. Files that do not parse as
    /// reports are skipped.
    pub async fn list(&self) -> Result<Vec<SessionReport>> {
        let mut reports = Vec::new();

        if !self.dir.exists() {
            return Ok(reports);
        }

        let mut entries = fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.starts_with("report-") || !name.ends_with(".json") {
                continue;
            }
            let content = fs::read_to_string(entry.path()).await?;
            match serde_json::from_str::<SessionReport>(&content) {
                Ok(report) => reports.push(report),
                Err(e) => debug!("skipping unreadable report {}: {}", name, e),
            }
        }

        reports.sort_by(|a, b| b.finished.cmp(&a.finished));
        Ok(reports)
    }

    /// Load the report with the given session id.
    pub async fn load(&self, id: &str) -> Result<SessionReport> {
        let path = self.dir.join(SessionReport::file_name(id));
        if !path.exists() {
            return Err(Error::ReportNotFound { id: id.to_string() });
        }
        let content = fs::read_to_string(&path).await?;
        let report = serde_json::from_str(&content)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_report(finished_offset_secs: i64) -> SessionReport {
        let started = Utc::now();
        SessionReport {
            id: Uuid::new_v4(),
            root: PathBuf::from("/tmp/downloads"),
            mode: DedupeMode::Pattern,
            started,
            finished: started + chrono::Duration::seconds(finished_offset_secs),
            ticks: 10,
            passes: 3,
            totals: PassSummary {
                scanned: 5,
                moved: 5,
                backed_up: 1,
                removed: 2,
                failed: 0,
            },
        }
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = ReportStore::new(temp.path());
        let report = sample_report(10);

        let path = store.save(&report).await.unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("report-{}.json", report.id)
        );

        let loaded = store.load(&report.id.to_string()).await.unwrap();
        assert_eq!(loaded, report);
        assert_eq!(loaded.duration_secs(), 10);
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let temp = TempDir::new().unwrap();
        let store = ReportStore::new(temp.path());

        let older = sample_report(1);
        let newer = sample_report(60);
        store.save(&older).await.unwrap();
        store.save(&newer).await.unwrap();

        let reports = store.list().await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].id, newer.id);
        assert_eq!(reports[1].id, older.id);
    }

    #[tokio::test]
    async fn test_list_empty_when_dir_missing() {
        let temp = TempDir::new().unwrap();
        let store = ReportStore::new(&temp.path().join("absent"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_report() {
        let temp = TempDir::new().unwrap();
        let store = ReportStore::new(temp.path());
        let result = store.load("no-such-id").await;
        assert!(matches!(result, Err(Error::ReportNotFound { .. })));
    }
}
