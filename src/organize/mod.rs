//! Sorting a directory's files into per-extension folders.
//!
//! A pass lists the direct regular files of the watched root, groups them
//! by normalized extension, and moves each group into an upper-cased
//! folder named after the extension. After moving a group, duplicates in
//! that folder are pruned. Subdirectories are never scanned, so already
//! sorted files and collision backups stay where they are.

pub mod mover;

pub use mover::{move_into, MoveOutcome, BACKUP_DIR, TIMESTAMP_FORMAT};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use walkdir::WalkDir;

use crate::dedupe::{DedupeMode, DuplicateRemover};
use crate::error::{Error, Result};

/// Folder for files without an extension
pub const NO_EXTENSION_DIR: &str = "NO_EXT";

/// Lower-cased extension of `path`, or an empty string when there is none.
pub fn normalized_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

/// Folder name for a normalized extension.
pub fn folder_name(extension: &str) -> String {
    if extension.is_empty() {
        NO_EXTENSION_DIR.to_string()
    } else {
        extension.to_uppercase()
    }
}

/// Group paths by normalized extension, keeping each group in listing order.
pub fn group_by_extension(paths: &[PathBuf]) -> BTreeMap<String, Vec<PathBuf>> {
    let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    for path in paths {
        groups
            .entry(normalized_extension(path))
            .or_default()
            .push(path.clone());
    }
    groups
}

/// Counters from one organize pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    /// Direct files seen in the root when the pass started
    pub scanned: usize,
    /// Files moved into extension folders
    pub moved: usize,
    /// Collisions resolved by relocating the incumbent into backup
    pub backed_up: usize,
    /// Duplicates deleted after moving
    pub removed: usize,
    /// Moves or deletions that failed and were logged
    pub failed: usize,
}

impl PassSummary {
    /// Fold another pass into this one.
    pub fn merge(&mut self, other: &PassSummary) {
        self.scanned += other.scanned;
        self.moved += other.moved;
        self.backed_up += other.backed_up;
        self.removed += other.removed;
        self.failed += other.failed;
    }
}

/// Runs organize passes over one directory.
pub struct Organizer {
    root: PathBuf,
    remover: DuplicateRemover,
}

impl Organizer {
    /// Create an organizer for `root`, which must exist.
    ///
    /// The path is canonicalized up front so that a missing or unreadable
    /// root fails here instead of on every pass.
    pub fn new(root: &Path, mode: DedupeMode) -> Result<Self> {
        let root = root.canonicalize().map_err(|source| Error::WatchRoot {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self {
            root,
            remover: DuplicateRemover::new(mode),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the direct regular files of the root.
    ///
    /// Subdirectories and symlinks are skipped, which keeps extension
    /// folders and their `backup` subfolders out of every pass.
    pub fn scan_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }
        Ok(files)
    }

    /// Run one organize pass and report what it did.
    ///
    /// Each extension group is handled independently and each file inside a
    /// group is moved independently, so a single failure is logged and
    /// counted without stopping the rest of the pass.
    pub fn run_pass(&self) -> Result<PassSummary> {
        let files = self.scan_files()?;
        let groups = group_by_extension(&files);

        let mut summary = PassSummary {
            scanned: files.len(),
            ..PassSummary::default()
        };

        for (extension, bucket) in &groups {
            let folder = self.root.join(folder_name(extension));
            debug!(
                "organizing {} file(s) into {}",
                bucket.len(),
                folder.display()
            );

            if let Err(e) = fs::create_dir_all(&folder) {
                error!("failed to create {}: {}", folder.display(), e);
                summary.failed += bucket.len();
                continue;
            }

            for path in bucket {
                match mover::move_into(path, &folder) {
                    Ok(MoveOutcome::Moved) => summary.moved += 1,
                    Ok(MoveOutcome::MovedWithBackup(_)) => {
                        summary.moved += 1;
                        summary.backed_up += 1;
                    }
                    Err(e) => {
                        error!("failed to move {}: {}", path.display(), e);
                        summary.failed += 1;
                    }
                }
            }

            let pruned = self.remover.prune_folder(&folder);
            summary.removed += pruned.removed;
            summary.failed += pruned.failed;
        }

        Ok(summary)
    }
}
