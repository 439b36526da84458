use crate::commands::{save_problems, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::normalize_id;
use crate::store::DataStore;
use crate::transfer::import_from;
use chrono::Utc;
use std::collections::HashSet;
use std::path::Path;

/// Merges the problems in `path` into the store.
///
/// The file is validated as a whole first. IDs are upper-cased like every
/// other command's; problems whose ID is already stored (or appeared earlier
/// in the same file) are skipped.
pub fn run<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let imported = import_from(path)?;
    let mut problems = store.load()?;

    let mut seen: HashSet<String> = problems.iter().map(|p| normalize_id(&p.id)).collect();
    let now = Utc::now();
    let mut added = Vec::new();
    let mut skipped = 0;

    for mut problem in imported {
        problem.id = normalize_id(&problem.id);
        if !seen.insert(problem.id.clone()) {
            skipped += 1;
            continue;
        }
        problem.ensure_added(now);
        added.push(problem);
    }

    let mut result = CmdResult::default();
    if added.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing new to import from {} ({} already present)",
            path.display(),
            skipped
        )));
        return Ok(result);
    }

    problems.extend(added.iter().cloned());
    save_problems(store, &problems, &mut result)?;

    result.add_message(CmdMessage::success(format!(
        "Imported {} new problem{} from {}",
        added.len(),
        if added.len() == 1 { "" } else { "s" },
        path.display()
    )));
    if skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "Skipped {} already present",
            skipped
        )));
    }
    Ok(result.with_affected_problems(added))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaitamaError;
    use crate::model::Problem;
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("import.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn merges_new_and_skips_existing() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[
                {"id": "LC1", "name": "Two Sum (dup)", "tags": []},
                {"id": "LC2", "name": "Add Two Numbers", "tags": ["list"]},
                {"id": "LC2", "name": "Add Two Numbers (dup)", "tags": []}
            ]"#,
        );
        let mut store = InMemoryStore::with_problems(vec![Problem::new("LC1", "Two Sum", vec![])]);

        let result = run(&mut store, &path).unwrap();
        assert_eq!(result.affected_problems.len(), 1);

        let stored = store.load().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].name, "Two Sum");
        assert_eq!(stored[1].id, "LC2");
        assert!(stored[1].date_added.is_some());
    }

    #[test]
    fn invalid_file_merges_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[
                {"id": "LC2", "name": "Add Two Numbers", "tags": []},
                {"id": "LC3", "name": "", "tags": []}
            ]"#,
        );
        let mut store = InMemoryStore::with_problems(vec![Problem::new("LC1", "Two Sum", vec![])]);

        let err = run(&mut store, &path).unwrap_err();
        assert!(matches!(err, SaitamaError::InvalidRecord { index: 1, .. }));
        assert_eq!(store.saves(), 0);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn all_duplicates_does_not_save() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, r#"[{"id": "LC1", "name": "Two Sum", "tags": []}]"#);
        let mut store = InMemoryStore::with_problems(vec![Problem::new("LC1", "Two Sum", vec![])]);

        let result = run(&mut store, &path).unwrap();
        assert!(result.affected_problems.is_empty());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn ids_are_upper_cased_before_dedup() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            r#"[
                {"id": "lc1", "name": "Two Sum (lower)", "tags": []},
                {"id": " cf4a ", "name": "Watermelon", "tags": []},
                {"id": "CF4A", "name": "Watermelon (dup)", "tags": []}
            ]"#,
        );
        let mut store = InMemoryStore::with_problems(vec![Problem::new("LC1", "Two Sum", vec![])]);

        run(&mut store, &path).unwrap();

        let stored = store.load().unwrap();
        let ids: Vec<&str> = stored.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["LC1", "CF4A"]);
        assert_eq!(stored[0].name, "Two Sum");
        assert_eq!(stored[1].name, "Watermelon");
    }
}
