use super::backup::BackupManager;
use super::{DataStore, SaveReport};
use crate::config::StoreConfig;
use crate::error::{Result, SaitamaError};
use crate::model::Problem;
use crate::paths;
use chrono::Utc;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    data_path: PathBuf,
    backups: BackupManager,
}

/// A fully written temp file that has not yet replaced the canonical file.
#[derive(Debug)]
pub struct StagedWrite {
    path: PathBuf,
}

impl StagedWrite {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileStore {
    pub fn new(data_path: PathBuf, backup_dir: PathBuf, config: &StoreConfig) -> Self {
        Self {
            data_path,
            backups: BackupManager::new(backup_dir, &config.snapshot_prefix, config.max_backups),
        }
    }

    /// Store rooted in the per-user config directory.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let data_path = paths::resolve_data_path(config)?;
        let backup_dir = paths::resolve_backup_dir(config)?;
        Ok(Self::new(data_path, backup_dir, config))
    }

    /// Store rooted in an explicit directory, laid out like the default one.
    pub fn in_dir(dir: &Path, config: &StoreConfig) -> Self {
        Self::new(
            dir.join(&config.data_filename),
            dir.join(&config.backup_dirname),
            config,
        )
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn backups(&self) -> &BackupManager {
        &self.backups
    }

    fn data_dir(&self) -> &Path {
        self.data_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    fn read(&self) -> Result<Vec<Problem>> {
        let bytes = match fs::read(&self.data_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SaitamaError::Io(e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| SaitamaError::CorruptStore {
            path: self.data_path.clone(),
            source,
        })
    }

    /// Serializes `problems` into a temp file next to the canonical file.
    ///
    /// The canonical file is untouched until [`FileStore::commit`].
    pub fn stage(&self, problems: &[Problem]) -> Result<StagedWrite> {
        let dir = self.data_dir();
        paths::ensure_dir(dir)?;

        let content = serde_json::to_string_pretty(problems).map_err(SaitamaError::Serialization)?;
        let file_name = self
            .data_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        if let Err(source) = write_synced(&tmp_path, content.as_bytes()) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SaitamaError::Write {
                path: tmp_path,
                source,
            });
        }
        Ok(StagedWrite { path: tmp_path })
    }

    /// Renames a staged temp file over the canonical file.
    pub fn commit(&self, staged: StagedWrite) -> Result<()> {
        if let Err(source) = fs::rename(&staged.path, &self.data_path) {
            let _ = fs::remove_file(&staged.path);
            return Err(SaitamaError::Replace {
                path: self.data_path.clone(),
                source,
            });
        }
        Ok(())
    }

    fn persist(&self, problems: &[Problem]) -> Result<SaveReport> {
        let mut report = SaveReport::default();

        match self.backups.create_backup(&self.data_path) {
            Ok(Some(snapshot)) => {
                if let Some(error) = &snapshot.pruned.list_error {
                    report
                        .warnings
                        .push(format!("Could not prune old backups: {}", error));
                }
                for (path, error) in &snapshot.pruned.failed {
                    report.warnings.push(format!(
                        "Could not remove old backup {}: {}",
                        path.display(),
                        error
                    ));
                }
                report.snapshot = Some(snapshot.path);
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "backup failed, saving anyway");
                report
                    .warnings
                    .push(format!("Failed to create backup: {}", e));
            }
        }

        let staged = self.stage(problems)?;
        self.commit(staged)?;
        debug!(path = %self.data_path.display(), count = problems.len(), "saved problems");
        Ok(report)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Problem>> {
        let mut problems = self.read()?;

        let now = Utc::now();
        let mut migrated = 0;
        for problem in problems.iter_mut() {
            if problem.ensure_added(now) {
                migrated += 1;
            }
        }

        if migrated > 0 {
            debug!(count = migrated, "stamped missing date_added");
            // The returned records are correct either way; a failed write-back
            // is retried on the next load.
            if let Err(e) = self.persist(&problems) {
                warn!(error = %e, "could not persist migrated problems");
            }
        }

        Ok(problems)
    }

    fn save(&mut self, problems: &[Problem]) -> Result<SaveReport> {
        self.persist(problems)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::in_dir(temp.path(), &StoreConfig::default());
        (temp, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_temp, store) = setup();
        assert!(store.load().unwrap().is_empty());
        assert!(!store.data_path().exists());
    }

    #[test]
    fn empty_file_loads_empty() {
        let (_temp, store) = setup();
        fs::write(store.data_path(), "").unwrap();
        assert!(store.load().unwrap().is_empty());

        fs::write(store.data_path(), "  \n").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error_and_left_alone() {
        let (_temp, store) = setup();
        fs::write(store.data_path(), "[{\"id\": ").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, SaitamaError::CorruptStore { .. }));
        assert_eq!(fs::read_to_string(store.data_path()).unwrap(), "[{\"id\": ");
        assert!(store.backups().list_snapshots().unwrap().is_empty());
    }

    #[test]
    fn first_save_has_no_snapshot() {
        let (_temp, mut store) = setup();
        let report = store.save(&[Problem::new("LC1", "Two Sum", vec![])]).unwrap();
        assert!(report.snapshot.is_none());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn save_writes_two_space_indented_json() {
        let (_temp, mut store) = setup();
        let mut p = Problem::new("LC1", "Two Sum", vec!["array".into()]);
        p.date_added = None;
        store.save(&[p]).unwrap();

        let on_disk = fs::read_to_string(store.data_path()).unwrap();
        assert_eq!(
            on_disk,
            "[\n  {\n    \"id\": \"LC1\",\n    \"name\": \"Two Sum\",\n    \"tags\": [\n      \"array\"\n    ]\n  }\n]"
        );
    }

    #[test]
    fn second_save_snapshots_previous_content() {
        let (_temp, mut store) = setup();
        store.save(&[Problem::new("LC1", "Two Sum", vec![])]).unwrap();
        let before = fs::read(store.data_path()).unwrap();

        let report = store
            .save(&[Problem::new("LC2", "Add Two Numbers", vec![])])
            .unwrap();

        let snapshot = report.snapshot.unwrap();
        assert_eq!(fs::read(snapshot).unwrap(), before);
    }

    #[test]
    fn stage_without_commit_leaves_canonical_untouched() {
        let (temp, mut store) = setup();
        store.save(&[Problem::new("LC1", "Two Sum", vec![])]).unwrap();
        let before = fs::read(store.data_path()).unwrap();

        let staged = store
            .stage(&[Problem::new("LC2", "Add Two Numbers", vec![])])
            .unwrap();
        assert!(staged.path().starts_with(temp.path()));
        assert!(staged.path().to_string_lossy().ends_with(".tmp"));

        assert_eq!(fs::read(store.data_path()).unwrap(), before);
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "LC1");
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let (temp, _) = setup();
        // A non-empty directory at the canonical path makes rename fail.
        let blocked = temp.path().join("problems.json");
        fs::create_dir_all(blocked.join("inner")).unwrap();
        let mut store = FileStore::in_dir(temp.path(), &StoreConfig::default());

        let err = store.save(&[Problem::new("LC1", "Two Sum", vec![])]).unwrap_err();
        assert!(matches!(err, SaitamaError::Replace { .. }));
        assert!(blocked.join("inner").is_dir());

        for entry in fs::read_dir(temp.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().into_owned();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn backup_failure_does_not_fail_save() {
        let (temp, _) = setup();
        // A file where the backup directory should be.
        fs::write(temp.path().join(".saitama_backups"), "in the way").unwrap();
        let mut store = FileStore::in_dir(temp.path(), &StoreConfig::default());

        store.save(&[Problem::new("LC1", "Two Sum", vec![])]).unwrap();
        let report = store
            .save(&[Problem::new("LC2", "Add Two Numbers", vec![])])
            .unwrap();

        assert!(report.snapshot.is_none());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(store.load().unwrap()[0].id, "LC2");
    }

    #[test]
    fn failed_migration_write_back_still_returns_stamped_problems() {
        let temp = TempDir::new().unwrap();
        // Short enough to exist, too long once the temp file decorations are added.
        let data_path = temp.path().join(format!("{}.json", "p".repeat(230)));
        let store = FileStore::new(
            data_path.clone(),
            temp.path().join(".saitama_backups"),
            &StoreConfig::default(),
        );
        let legacy = r#"[{"id":"LC1","name":"Two Sum","tags":["array"]}]"#;
        fs::write(&data_path, legacy).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].date_added.is_some());

        // Nothing was replaced, so the next load tries again.
        assert_eq!(fs::read_to_string(&data_path).unwrap(), legacy);
        assert!(store.load().unwrap()[0].date_added.is_some());
    }

    #[test]
    fn zero_retention_keeps_snapshot_of_previous_save() {
        let temp = TempDir::new().unwrap();
        let config = StoreConfig::default().with_max_backups(0);
        let mut store = FileStore::in_dir(temp.path(), &config);

        store.save(&[Problem::new("LC1", "Two Sum", vec![])]).unwrap();
        let before = fs::read(store.data_path()).unwrap();
        let report = store
            .save(&[Problem::new("LC2", "Add Two Numbers", vec![])])
            .unwrap();

        let snapshot = report.snapshot.unwrap();
        assert!(snapshot.exists());
        assert_eq!(fs::read(snapshot).unwrap(), before);
    }
}
