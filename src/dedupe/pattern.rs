//! Filename-pattern duplicate detection.
//!
//! Downloaded duplicates typically carry a numbered suffix such as
//! `invoice(1).pdf` or `photo (2).jpg`. Any file whose name contains a
//! parenthesized number anywhere is treated as a duplicate of the
//! unnumbered original and removed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::PruneOutcome;

static NUMBERED_COPY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d+\)").expect("numbered copy regex is valid"));

/// Returns true if `name` carries a numbered-copy marker like `(3)`.
pub fn is_numbered_copy(name: &str) -> bool {
    NUMBERED_COPY.is_match(name)
}

/// Delete every direct file of `dir` whose name matches the numbered-copy
/// pattern. Listing or deletion failures are logged and the folder is left
/// as it is; subdirectories are never entered.
pub fn prune(dir: &Path) -> PruneOutcome {
    let mut outcome = PruneOutcome::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot list {} for pruning: {}", dir.display(), e);
            return outcome;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        if is_numbered_copy(name) {
            match fs::remove_file(&path) {
                Ok(()) => {
                    info!("removed numbered copy: {}", path.display());
                    outcome.removed += 1;
                }
                Err(e) => {
                    warn!("failed to remove {}: {}", path.display(), e);
                    outcome.failed += 1;
                }
            }
        }
    }

    outcome
}
