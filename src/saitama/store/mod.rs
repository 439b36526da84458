//! # Storage Layer
//!
//! The [`DataStore`] trait is the whole persistence surface commands depend on:
//! read the collection, write the collection. Everything else (where the file
//! lives, backups, migration, atomic replacement) is an implementation detail
//! of [`fs::FileStore`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single JSON file
//!   - Missing or empty file reads as an empty collection
//!   - Records without `date_added` are stamped on load and written back
//!   - Saves snapshot the previous file, then write a temp file and rename it
//!     over the canonical one
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! saitama/
//! ├── problems.json
//! └── .saitama_backups/
//!     ├── problems_20240101_120000.json
//!     └── problems_20240101_120512.json
//! ```

use crate::error::Result;
use crate::model::Problem;
use std::path::PathBuf;

pub mod backup;
pub mod fs;
pub mod memory;

/// Outcome of a successful save.
///
/// Backup problems never fail a save; they are reported here instead.
#[derive(Debug, Default)]
pub struct SaveReport {
    pub snapshot: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Abstract interface for problem storage.
pub trait DataStore {
    /// Read the full collection, in stored order.
    fn load(&self) -> Result<Vec<Problem>>;

    /// Replace the stored collection with `problems`.
    fn save(&mut self, problems: &[Problem]) -> Result<SaveReport>;
}
