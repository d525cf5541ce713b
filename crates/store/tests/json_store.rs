//! Integration tests: JSON file store persistence.

use cyclecast_calendar::parse_date;
use cyclecast_cycle::{EntryId, predict_next};
use cyclecast_store::{EntryStore, JsonFileStore, NewEntry, StoreError};

fn new_entry(start: &str) -> NewEntry {
    NewEntry::new(parse_date(start).unwrap())
}

#[test]
fn missing_file_opens_empty() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("entries.json");
    let store = JsonFileStore::open(&path).expect("open succeeds");
    assert!(store.list().unwrap().is_empty());
    assert!(!path.exists(), "opening must not create the file");
}

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("entries.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.create(new_entry("2024-01-01")).unwrap();
    store
        .create(
            new_entry("2024-01-29")
                .with_end_date(Some(parse_date("2024-02-02").unwrap()))
                .with_notes(Some("heavy".to_string())),
        )
        .unwrap();
    drop(store);

    let reopened = JsonFileStore::open(&path).unwrap();
    let entries = reopened.list().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].start_date().to_string(), "2024-01-29");
    assert_eq!(entries[0].notes(), "heavy");
    assert_eq!(entries[1].start_date().to_string(), "2024-01-01");

    let next = predict_next(&entries, 28).unwrap().unwrap();
    assert_eq!(next.to_string(), "2024-02-26");
}

#[test]
fn delete_persists_and_ids_continue() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("entries.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    let first = store.create(new_entry("2024-01-01")).unwrap();
    store.delete(first.id()).unwrap();
    drop(store);

    let mut reopened = JsonFileStore::open(&path).unwrap();
    assert!(reopened.list().unwrap().is_empty());
    let second = reopened.create(new_entry("2024-02-01")).unwrap();
    assert_eq!(second.id(), EntryId::new(2));
}

#[test]
fn delete_unknown_is_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut store = JsonFileStore::open(dir.path().join("entries.json")).unwrap();
    let err = store.delete(EntryId::new(3)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id } if id == EntryId::new(3)));
}

#[test]
fn invalid_end_date_is_rejected_and_not_written() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("entries.json");
    let mut store = JsonFileStore::open(&path).unwrap();
    let bad = new_entry("2024-03-10").with_end_date(Some(parse_date("2024-03-01").unwrap()));
    assert!(matches!(store.create(bad), Err(StoreError::Entry(_))));
    assert!(!path.exists());
}

#[test]
fn hand_written_document_is_read() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("entries.json");
    std::fs::write(
        &path,
        r#"{"entries": [
            {"id": 4, "start_date": "2024-05-01"},
            {"id": 9, "start_date": "2024-04-03", "end_date": null, "notes": "spotting"}
        ]}"#,
    )
    .unwrap();

    let mut store = JsonFileStore::open(&path).unwrap();
    let entries = store.list().unwrap();
    assert_eq!(entries[0].id(), EntryId::new(4));
    assert_eq!(entries[1].notes(), "spotting");

    let created = store.create(new_entry("2024-05-29")).unwrap();
    assert_eq!(created.id(), EntryId::new(10));
}

#[test]
fn timestamp_dates_are_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("entries.json");
    std::fs::write(
        &path,
        r#"{"next_id": 2, "entries": [{"id": 1, "start_date": "2024-05-01T00:00:00Z"}]}"#,
    )
    .unwrap();
    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Serialization { .. }));
}

#[test]
fn document_with_largest_id_opens_and_refuses_new_ids() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("entries.json");
    std::fs::write(
        &path,
        r#"{"entries":[{"id":18446744073709551615,"start_date":"2024-01-01"}]}"#,
    )
    .unwrap();

    let mut store = JsonFileStore::open(&path).expect("open succeeds");
    assert_eq!(store.list().unwrap()[0].id(), EntryId::new(u64::MAX));

    let err = store.create(new_entry("2024-01-29")).unwrap_err();
    assert!(matches!(err, StoreError::IdsExhausted));
    assert_eq!(store.list().unwrap().len(), 1);

    store.delete(EntryId::new(u64::MAX)).unwrap();
    assert!(matches!(
        store.create(new_entry("2024-01-29")),
        Err(StoreError::IdsExhausted)
    ));
}
