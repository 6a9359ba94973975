//! The poll loop that keeps a directory organized.
//!
//! A watcher ticks at a fixed interval until its runtime budget runs out.
//! Each tick lists the root, and when unseen files are present it runs one
//! organize pass. All session state lives in the [`Watcher`] itself: the
//! set of already-handled paths and the configuration that drives timing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::config::WatchConfig;
use crate::dedupe::DedupeMode;
use crate::error::Result;
use crate::organize::{Organizer, PassSummary};

/// What a single tick observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing unseen in the root, no pass ran
    Idle,
    /// Unseen files were present and a full pass ran
    Processed(PassSummary),
}

/// Aggregate results of one watch session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSummary {
    /// Canonical root that was watched
    pub root: PathBuf,
    /// Duplicate detection strategy in effect
    pub mode: DedupeMode,
    /// Polls performed before the runtime budget ran out
    pub ticks: u64,
    /// Ticks that found unseen files and ran a pass
    pub passes: u64,
    /// Counters folded over every pass
    pub totals: PassSummary,
}

/// Polls one directory and organizes it until the runtime budget expires.
pub struct Watcher {
    organizer: Organizer,
    config: WatchConfig,
    processed: HashSet<PathBuf>,
}

impl Watcher {
    /// Validate the configuration and resolve the watched root.
    ///
    /// A missing root or a zero budget is reported here, before the loop
    /// starts, rather than once per tick.
    pub fn new(config: WatchConfig) -> Result<Self> {
        config.validate()?;
        let organizer = Organizer::new(&config.root, config.dedupe)?;
        Ok(Self {
            organizer,
            config,
            processed: HashSet::new(),
        })
    }

    /// Drive the poll loop to completion and return the session summary.
    ///
    /// The loop checks its deadline before every tick and sleeps for the
    /// poll interval after every tick, so it terminates once the runtime
    /// budget has elapsed even while new files keep arriving. Tick errors
    /// are logged and the loop carries on.
    pub async fn run(mut self) -> Result<WatchSummary> {
        let deadline = Instant::now() + self.config.max_runtime();
        info!(
            "watching {} for up to {} second(s)",
            self.organizer.root().display(),
            self.config.max_runtime_secs
        );

        let mut summary = WatchSummary {
            root: self.organizer.root().to_path_buf(),
            mode: self.config.dedupe,
            ticks: 0,
            passes: 0,
            totals: PassSummary::default(),
        };

        while Instant::now() < deadline {
            summary.ticks += 1;
            match self.tick() {
                Ok(TickOutcome::Idle) => {}
                Ok(TickOutcome::Processed(pass)) => {
                    summary.passes += 1;
                    summary.totals.merge(&pass);
                    info!(
                        "pass complete: {} moved, {} backed up, {} removed, {} failed",
                        pass.moved, pass.backed_up, pass.removed, pass.failed
                    );
                }
                Err(e) => error!("tick failed: {}", e),
            }
            tokio::time::sleep(self.config.poll_interval()).await;
        }

        info!(
            "runtime budget of {} second(s) reached, stopping",
            self.config.max_runtime_secs
        );
        Ok(summary)
    }

    /// Poll once: list the root and run a pass if anything unseen showed up.
    fn tick(&mut self) -> Result<TickOutcome> {
        let visible = self.organizer.scan_files()?;
        let unseen: Vec<PathBuf> = visible
            .into_iter()
            .filter(|path| !self.processed.contains(path))
            .collect();

        if unseen.is_empty() {
            return Ok(TickOutcome::Idle);
        }

        debug!("{} unseen file(s) in {}", unseen.len(), self.organizer.root().display());
        let pass = self.organizer.run_pass()?;
        self.mark_departed(unseen);
        Ok(TickOutcome::Processed(pass))
    }

    /// Record which of the candidate paths actually left the root.
    ///
    /// A file whose move failed is still present, stays unmarked, and is
    /// picked up again on the next tick.
    fn mark_departed(&mut self, candidates: Vec<PathBuf>) {
        for path in candidates {
            if !path.exists() {
                self.processed.insert(path);
            }
        }
    }
}
