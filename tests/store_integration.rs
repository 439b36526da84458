use saitama::config::StoreConfig;
use saitama::error::SaitamaError;
use saitama::model::Problem;
use saitama::store::fs::FileStore;
use saitama::store::DataStore;
use saitama::transfer;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let temp = TempDir::new().unwrap();
    let store = FileStore::in_dir(temp.path(), &StoreConfig::default());
    (temp, store)
}

fn problems(n: usize) -> Vec<Problem> {
    (1..=n)
        .map(|i| Problem::new(format!("LC{}", i), format!("Problem {}", i), vec!["array".into()]))
        .collect()
}

fn snapshot_count(store: &FileStore) -> usize {
    store.backups().list_snapshots().unwrap().len()
}

#[test]
fn round_trips_zero_one_and_many() {
    for n in [0, 1, 25] {
        let (_temp, mut store) = setup();
        let list = problems(n);
        store.save(&list).unwrap();
        assert_eq!(store.load().unwrap(), list, "round trip of {} records", n);
    }
}

#[test]
fn missing_and_empty_files_load_as_empty() {
    let (_temp, store) = setup();
    assert!(store.load().unwrap().is_empty());

    fs::write(store.data_path(), "").unwrap();
    assert!(store.load().unwrap().is_empty());
    assert_eq!(snapshot_count(&store), 0);
}

#[test]
fn corrupt_file_is_reported_and_left_alone() {
    let (_temp, store) = setup();
    fs::write(store.data_path(), "{ not json").unwrap();

    assert!(matches!(
        store.load(),
        Err(SaitamaError::CorruptStore { .. })
    ));
    assert_eq!(fs::read_to_string(store.data_path()).unwrap(), "{ not json");
}

#[test]
fn staged_write_does_not_touch_canonical_file() {
    let (_temp, mut store) = setup();
    let before = problems(2);
    store.save(&before).unwrap();
    let on_disk = fs::read(store.data_path()).unwrap();

    let staged = store.stage(&problems(9)).unwrap();
    assert!(staged.path().exists());
    assert_eq!(fs::read(store.data_path()).unwrap(), on_disk);
    assert_eq!(store.load().unwrap(), before);

    store.commit(staged).unwrap();
    assert_eq!(store.load().unwrap().len(), 9);
}

#[test]
fn migration_stamps_once_and_persists() {
    let (_temp, store) = setup();
    fs::write(
        store.data_path(),
        r#"[{"id":"LC1","name":"Two Sum","tags":["array"]}]"#,
    )
    .unwrap();

    let first = store.load().unwrap();
    assert_eq!(first.len(), 1);
    let stamped = first[0].date_added.expect("date_added stamped");
    assert!(stamped.timestamp() > 0);
    assert_eq!(snapshot_count(&store), 1);

    let second = store.load().unwrap();
    assert_eq!(second[0].date_added, Some(stamped));
    assert_eq!(snapshot_count(&store), 1);
}

#[test]
fn migration_snapshot_holds_legacy_content() {
    let (_temp, store) = setup();
    let legacy = r#"[{"id":"LC1","name":"Two Sum","tags":null,"date_added":"0001-01-01T00:00:00Z"}]"#;
    fs::write(store.data_path(), legacy).unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded[0].tags.is_empty());
    assert!(loaded[0].date_added.is_some());

    let snapshots = store.backups().list_snapshots().unwrap();
    assert_eq!(fs::read_to_string(&snapshots[0]).unwrap(), legacy);
}

#[test]
fn retention_keeps_newest_five() {
    let (_temp, mut store) = setup();

    let mut states = Vec::new();
    for i in 1..=8 {
        let list = problems(i);
        store.save(&list).unwrap();
        states.push(fs::read_to_string(store.data_path()).unwrap());
    }

    // The first save had nothing to back up.
    let snapshots = store.backups().list_snapshots().unwrap();
    assert_eq!(snapshots.len(), 5);

    let newest = snapshots.last().unwrap();
    assert_eq!(fs::read_to_string(newest).unwrap(), states[6]);

    let oldest = snapshots.first().unwrap();
    assert_eq!(fs::read_to_string(oldest).unwrap(), states[2]);
}

#[test]
fn import_rejects_invalid_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("import.json");
    fs::write(
        &path,
        r#"[{"id":"LC1","name":"Two Sum"},{"id":"  ","name":"Blank"}]"#,
    )
    .unwrap();

    match transfer::import_from(&path) {
        Err(SaitamaError::InvalidRecord { index, reason }) => {
            assert_eq!(index, 1);
            assert_eq!(reason, "ID is empty");
        }
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
}

#[test]
fn export_matches_store_format() {
    let (temp, mut store) = setup();
    let list = problems(3);
    store.save(&list).unwrap();

    let out = temp.path().join("export.json");
    transfer::export_to(&list, &out).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fs::read_to_string(store.data_path()).unwrap()
    );
    assert_eq!(transfer::import_from(&out).unwrap(), list);
}
