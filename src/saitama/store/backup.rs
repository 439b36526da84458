//! Snapshots of the canonical file, taken before every overwrite.
//!
//! Snapshots are named `<prefix>_<YYYYMMDD_HHMMSS>.json` using UTC so that the
//! lexical order of the names is their chronological order. Two snapshots in
//! the same second get a sequence suffix (`<prefix>_<stamp>_01.json`) instead
//! of overwriting each other. Pruning sorts on that (stamp, sequence) key; the
//! order `read_dir` yields entries in is never relied upon.

use crate::error::{Result, SaitamaError};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SNAPSHOT_EXT: &str = "json";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const STAMP_LEN: usize = 15;

#[derive(Debug, Clone)]
pub struct BackupManager {
    dir: PathBuf,
    prefix: String,
    max_backups: usize,
}

/// A snapshot written by [`BackupManager::create_backup`].
#[derive(Debug)]
pub struct Snapshot {
    pub path: PathBuf,
    pub pruned: PruneReport,
}

#[derive(Debug, Default)]
pub struct PruneReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
    /// Set when the backup directory could not be listed; nothing was removed.
    pub list_error: Option<String>,
}

impl BackupManager {
    pub fn new(dir: PathBuf, prefix: impl Into<String>, max_backups: usize) -> Self {
        Self {
            dir,
            prefix: prefix.into(),
            max_backups,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_backups(&self) -> usize {
        self.max_backups
    }

    /// Copies `data_path` into the backup directory and prunes old snapshots.
    ///
    /// Returns `Ok(None)` when there is nothing to back up yet.
    pub fn create_backup(&self, data_path: &Path) -> Result<Option<Snapshot>> {
        self.create_backup_at(data_path, Utc::now())
    }

    pub fn create_backup_at(&self, data_path: &Path, at: DateTime<Utc>) -> Result<Option<Snapshot>> {
        if !data_path.exists() {
            return Ok(None);
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            SaitamaError::Backup(format!(
                "could not create backup directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let data = fs::read(data_path).map_err(|e| {
            SaitamaError::Backup(format!("could not read {}: {}", data_path.display(), e))
        })?;

        let target = self.next_snapshot_path(&at.format(STAMP_FORMAT).to_string());
        fs::write(&target, data).map_err(|e| {
            SaitamaError::Backup(format!("could not write {}: {}", target.display(), e))
        })?;
        debug!(snapshot = %target.display(), "created backup");

        let pruned = self.prune_keeping(Some(&target));
        Ok(Some(Snapshot {
            path: target,
            pruned,
        }))
    }

    /// All snapshot files, oldest first.
    pub fn list_snapshots(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| {
            SaitamaError::Backup(format!("could not list {}: {}", self.dir.display(), e))
        })?;

        let mut snapshots = Vec::new();
        for entry in entries {
            let entry = entry.map_err(SaitamaError::Io)?;
            let path = entry.path();
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some(SNAPSHOT_EXT) {
                snapshots.push(path);
            }
        }

        snapshots.sort_by_cached_key(|p| self.sort_key(p));
        Ok(snapshots)
    }

    /// Removes the oldest snapshots beyond the retention limit.
    ///
    /// A snapshot that cannot be removed is recorded in the report and the
    /// remaining candidates are still attempted.
    pub fn prune(&self) -> PruneReport {
        self.prune_keeping(None)
    }

    /// Like [`BackupManager::prune`], but `keep` is never removed, whatever
    /// its name sorts as. It still counts towards the limit.
    pub fn prune_keeping(&self, keep: Option<&Path>) -> PruneReport {
        let mut report = PruneReport::default();
        let snapshots = match self.list_snapshots() {
            Ok(snapshots) => snapshots,
            Err(e) => {
                warn!(error = %e, "could not list backups for pruning");
                report.list_error = Some(e.to_string());
                return report;
            }
        };
        if snapshots.len() <= self.max_backups {
            return report;
        }

        let excess = snapshots.len() - self.max_backups;
        let candidates = snapshots
            .into_iter()
            .filter(|p| keep.map_or(true, |k| p.as_path() != k));
        for path in candidates.take(excess) {
            match fs::remove_file(&path) {
                Ok(()) => {
                    debug!(snapshot = %path.display(), "pruned backup");
                    report.removed.push(path);
                }
                Err(e) => {
                    warn!(snapshot = %path.display(), error = %e, "could not remove old backup");
                    report.failed.push((path, e.to_string()));
                }
            }
        }
        report
    }

    fn next_snapshot_path(&self, stamp: &str) -> PathBuf {
        let base = self
            .dir
            .join(format!("{}_{}.{}", self.prefix, stamp, SNAPSHOT_EXT));
        if !base.exists() {
            return base;
        }
        (1u32..)
            .map(|seq| {
                self.dir
                    .join(format!("{}_{}_{:02}.{}", self.prefix, stamp, seq, SNAPSHOT_EXT))
            })
            .find(|candidate| !candidate.exists())
            .unwrap_or(base)
    }

    /// (timestamp, sequence, file name) for a snapshot path.
    fn sort_key(&self, path: &Path) -> (String, u32, String) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rest = stem
            .strip_prefix(&self.prefix)
            .and_then(|s| s.strip_prefix('_'))
            .unwrap_or(&stem);

        if rest.len() >= STAMP_LEN && rest.is_char_boundary(STAMP_LEN) {
            let (stamp, suffix) = rest.split_at(STAMP_LEN);
            let seq = match suffix.strip_prefix('_') {
                Some(digits) => digits.parse().ok(),
                None if suffix.is_empty() => Some(0),
                None => None,
            };
            if let Some(seq) = seq {
                return (stamp.to_string(), seq, name);
            }
        }
        (rest.to_string(), 0, name)
    }
}
