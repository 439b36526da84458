//! Import and export of problem lists at arbitrary paths.
//!
//! These never touch the canonical store: no backups, no migration, no merge.
//! Merging imported problems into the collection is the import command's job.

use crate::error::{Result, SaitamaError};
use crate::model::Problem;
use std::fs;
use std::path::Path;

/// Writes `problems` to `path` as indented JSON, replacing any existing file.
pub fn export_to(problems: &[Problem], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(problems).map_err(SaitamaError::Serialization)?;
    fs::write(path, content).map_err(|source| SaitamaError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a problem list from `path`.
///
/// Every record needs a non-blank id and name; the first one that does not
/// fails the whole import.
pub fn import_from(path: &Path) -> Result<Vec<Problem>> {
    let bytes = fs::read(path).map_err(SaitamaError::Io)?;
    let problems: Vec<Problem> =
        serde_json::from_slice(&bytes).map_err(|source| SaitamaError::CorruptImport {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, problem) in problems.iter().enumerate() {
        validate(index, problem)?;
    }
    Ok(problems)
}

fn validate(index: usize, problem: &Problem) -> Result<()> {
    let missing = match (problem.id.trim().is_empty(), problem.name.trim().is_empty()) {
        (true, true) => "ID and name are empty",
        (true, false) => "ID is empty",
        (false, true) => "name is empty",
        (false, false) => return Ok(()),
    };
    Err(SaitamaError::InvalidRecord {
        index,
        reason: missing.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn export_then_import() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.json");
        let mut p = Problem::new("LC1", "Two Sum", vec!["array".into()]);
        p.difficulty = "easy".into();
        let problems = vec![p, Problem::new("LC2", "Add Two Numbers", vec![])];

        export_to(&problems, &path).unwrap();
        assert_eq!(import_from(&path).unwrap(), problems);
    }

    #[test]
    fn export_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.json");
        fs::write(&path, "old content that is much longer than the new one").unwrap();

        export_to(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope").join("out.json");
        let err = export_to(&[], &path).unwrap_err();
        assert!(matches!(err, SaitamaError::Write { .. }));
    }

    #[test]
    fn empty_name_rejects_everything() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.json");
        fs::write(
            &path,
            r#"[
                {"id": "LC1", "name": "Two Sum", "tags": []},
                {"id": "LC2", "name": "", "tags": []},
                {"id": "LC3", "name": "Longest Substring", "tags": []}
            ]"#,
        )
        .unwrap();

        match import_from(&path) {
            Err(SaitamaError::InvalidRecord { index, reason }) => {
                assert_eq!(index, 1);
                assert_eq!(reason, "name is empty");
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn missing_id_field_is_reported_by_index() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.json");
        fs::write(&path, r#"[{"name": "No Id"}]"#).unwrap();

        let err = import_from(&path).unwrap_err();
        assert!(matches!(err, SaitamaError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("in.json");
        fs::write(&path, "{not json").unwrap();

        let err = import_from(&path).unwrap_err();
        assert!(matches!(err, SaitamaError::CorruptImport { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = import_from(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SaitamaError::Io(_)));
    }
}
