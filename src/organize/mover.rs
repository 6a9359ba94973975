//! Collision-safe file moves.
//!
//! Moving a file into a folder that already holds one with the same name
//! must never overwrite data. The incumbent is first relocated into a
//! `backup` subfolder under a timestamped name, then the incoming file
//! takes its place.

use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};

/// Name of the collision-backup subfolder inside each extension folder
pub const BACKUP_DIR: &str = "backup";

/// Timestamp layout used in backup file names, UTC
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// What a single move did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The destination was free and the file moved straight in
    Moved,
    /// An incumbent with the same name was relocated to the given backup path
    MovedWithBackup(PathBuf),
}

/// Move `source` into `target_dir`, keeping its file name.
///
/// The target directory is created if absent. When the destination name is
/// already taken, the incumbent is moved into `target_dir/backup` as
/// `backup_<name>_<timestamp>` before the source moves in, so the later
/// arrival always ends up under the plain name.
pub fn move_into(source: &Path, target_dir: &Path) -> Result<MoveOutcome> {
    let name = source.file_name().ok_or_else(|| Error::PathMapping {
        reason: format!("no file name in {}", source.display()),
    })?;

    fs::create_dir_all(target_dir)?;
    let destination = target_dir.join(name);

    let mut outcome = MoveOutcome::Moved;
    if destination.exists() {
        let backup_dir = target_dir.join(BACKUP_DIR);
        fs::create_dir_all(&backup_dir)?;

        let timestamp = Utc::now().format(TIMESTAMP_FORMAT);
        let backup_name = format!("backup_{}_{}", name.to_string_lossy(), timestamp);
        let backup_path = backup_dir.join(backup_name);

        move_file(&destination, &backup_path)?;
        info!("existing file backed up: {}", backup_path.display());
        outcome = MoveOutcome::MovedWithBackup(backup_path);
    }

    move_file(source, &destination)?;
    Ok(outcome)
}

/// Rename, falling back to copy plus remove when rename fails, as it does
/// across filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}
