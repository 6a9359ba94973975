//! Content-hash duplicate detection.
//!
//! Files are fingerprinted with BLAKE3. Among byte-identical files the
//! lexicographically first name is kept and the rest are deleted, so the
//! survivor does not depend on listing order.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::PruneOutcome;
use crate::error::Result;

/// Compute the BLAKE3 digest of a file as a hex string.
pub fn file_digest(path: &Path) -> Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize().as_bytes()))
}

/// Delete direct files of `dir` whose bytes duplicate an earlier file.
///
/// Files that cannot be hashed are skipped and left in place. Listing or
/// deletion failures are logged; subdirectories are never entered.
pub fn prune(dir: &Path) -> PruneOutcome {
    let mut outcome = PruneOutcome::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot list {} for pruning: {}", dir.display(), e);
            return outcome;
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .collect();
    files.sort();

    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    for path in files {
        let digest = match file_digest(&path) {
            Ok(digest) => digest,
            Err(e) => {
                warn!("cannot hash {}: {}", path.display(), e);
                continue;
            }
        };

        match seen.get(&digest) {
            None => {
                seen.insert(digest, path);
            }
            Some(kept) => match fs::remove_file(&path) {
                Ok(()) => {
                    info!("removed duplicate of {}: {}", kept.display(), path.display());
                    outcome.removed += 1;
                }
                Err(e) => {
                    warn!("failed to remove {}: {}", path.display(), e);
                    outcome.failed += 1;
                }
            },
        }
    }

    outcome
}
