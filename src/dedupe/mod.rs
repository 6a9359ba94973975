//! Duplicate detection and removal for extension folders.
//!
//! Two strategies are available: filename pattern matching (the default),
//! which removes numbered copies like `report(1).pdf`, and content hashing,
//! which removes byte-identical files regardless of name.

pub mod content;
pub mod pattern;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Strategy used to decide which files in a folder are duplicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedupeMode {
    /// Remove files whose name contains a numbered-copy marker like `(1)`
    Pattern,
    /// Remove byte-identical files, keeping the lexicographically first name
    Content,
}

impl Default for DedupeMode {
    fn default() -> Self {
        DedupeMode::Pattern
    }
}

impl FromStr for DedupeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pattern" => Ok(DedupeMode::Pattern),
            "content" => Ok(DedupeMode::Content),
            other => Err(Error::Configuration {
                reason: format!("unknown dedupe mode '{}', expected 'pattern' or 'content'", other),
            }),
        }
    }
}

/// Counters from a single pruning run over one folder
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Files deleted as duplicates
    pub removed: usize,
    /// Deletions that failed and were logged
    pub failed: usize,
}

/// Removes duplicates from extension folders according to a [`DedupeMode`].
///
/// Pruning never propagates errors: a folder that cannot be listed is
/// skipped, and a file that cannot be deleted is counted and left in place.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateRemover {
    mode: DedupeMode,
}

impl DuplicateRemover {
    pub fn new(mode: DedupeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> DedupeMode {
        self.mode
    }

    /// Prune duplicates among the direct files of `dir`.
    ///
    /// Subdirectories, including the `backup` folder, are never touched.
    pub fn prune_folder(&self, dir: &Path) -> PruneOutcome {
        match self.mode {
            DedupeMode::Pattern => pattern::prune(dir),
            DedupeMode::Content => content::prune(dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("pattern".parse::<DedupeMode>().unwrap(), DedupeMode::Pattern);
        assert_eq!("content".parse::<DedupeMode>().unwrap(), DedupeMode::Content);
        assert!("checksum".parse::<DedupeMode>().is_err());
    }

    #[test]
    fn test_default_mode_is_pattern() {
        assert_eq!(DedupeMode::default(), DedupeMode::Pattern);
    }

    #[test]
    fn test_pattern_remover_ignores_unique_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("report.pdf"), b"one").unwrap();
        fs::write(temp.path().join("report(1).pdf"), b"two").unwrap();

        let outcome = DuplicateRemover::new(DedupeMode::Pattern).prune_folder(temp.path());

        // Pattern mode deletes the numbered copy even though its bytes differ.
        assert_eq!(outcome.removed, 1);
        assert!(temp.path().join("report.pdf").exists());
        assert!(!temp.path().join("report(1).pdf").exists());
    }

    #[test]
    fn test_content_remover_keeps_unique_numbered_copy() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("report.pdf"), b"one").unwrap();
        fs::write(temp.path().join("report(1).pdf"), b"two").unwrap();

        let outcome = DuplicateRemover::new(DedupeMode::Content).prune_folder(temp.path());

        // Content mode sees two distinct byte sequences and deletes nothing.
        assert_eq!(outcome.removed, 0);
        assert!(temp.path().join("report.pdf").exists());
        assert!(temp.path().join("report(1).pdf").exists());
    }
}
