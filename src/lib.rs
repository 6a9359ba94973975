//! # tidywatch
//!
//! A small directory organizer. tidywatch polls a watched directory,
//! sorts its direct files into upper-cased per-extension folders, backs
//! up name collisions under timestamped names instead of overwriting,
//! and prunes duplicates inside each folder.
//!
//! ## Features
//!
//! - **Watch mode**: poll a directory at a fixed interval until a runtime
//!   budget expires, organizing new files as they appear
//! - **One-shot mode**: run a single organize pass over a directory
//! - **Collision-safe moves**: an incumbent file is relocated into a
//!   `backup` subfolder as `backup_<name>_<timestamp>` before the new
//!   arrival takes its name
//! - **Duplicate pruning**: numbered copies like `report(1).pdf` by
//!   default, or byte-identical files via BLAKE3 content hashing
//! - **Session reports**: JSON records of what a session did
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tidywatch::{DedupeMode, Organizer};
//!
//! fn main() -> tidywatch::Result<()> {
//!     let organizer = Organizer::new(Path::new("./downloads"), DedupeMode::Pattern)?;
//!     let summary = organizer.run_pass()?;
//!     println!("moved {} file(s)", summary.moved);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod logging;
pub mod organize;
pub mod report;
pub mod watch;

pub use config::WatchConfig;
pub use dedupe::{DedupeMode, DuplicateRemover};
pub use error::{Error, Result};
pub use organize::{Organizer, PassSummary};
pub use report::{ReportStore, SessionReport};
pub use watch::{WatchSummary, Watcher};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
