use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use weekplan_core::db::migrations::latest_version;
use weekplan_core::db::{open_db, open_db_in_memory};
use weekplan_core::{
    EntryStore, KvStorage, SqliteStorage, StorageError, TimeOfDay, TimedEntry,
};

fn friday_noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 21)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn lunch_entry() -> TimedEntry {
    TimedEntry::new(
        "plan-1",
        "Lunch",
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap(),
        TimeOfDay::parse("12:00 PM").unwrap(),
        TimeOfDay::parse("1:00 PM").unwrap(),
    )
}

#[test]
fn migrations_apply_on_open() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() > 0);
}

#[test]
fn adapter_rejects_unbootstrapped_connections() {
    let conn = Connection::open_in_memory().unwrap();
    let err = SqliteStorage::try_new(&conn).unwrap_err();
    assert!(matches!(err, StorageError::Schema(_)));
}

#[test]
fn set_get_remove_round_trip() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();

    assert_eq!(storage.get("k").unwrap(), None);

    storage.set("k", "v1").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v1"));

    storage.set("k", "v2").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));

    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
}

#[test]
fn entry_store_works_over_the_sqlite_adapter() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let store = EntryStore::new(storage);

    let entry = lunch_entry();
    store.add_at(&entry, friday_noon()).unwrap();

    let loaded = store.load("plan-1").unwrap();
    assert_eq!(loaded, vec![entry.clone()]);

    store.remove("plan-1", entry.id).unwrap();
    assert!(store.load("plan-1").unwrap().is_empty());
}

#[test]
fn file_backed_database_persists_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weekplan.db");

    {
        let conn = open_db(&path).unwrap();
        let storage = SqliteStorage::try_new(&conn).unwrap();
        let store = EntryStore::new(storage);
        store.add_at(&lunch_entry(), friday_noon()).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let storage = SqliteStorage::try_new(&conn).unwrap();
    let store = EntryStore::new(storage);
    assert_eq!(store.load("plan-1").unwrap().len(), 1);
}

#[test]
fn open_rejects_databases_from_a_newer_binary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let raw = Connection::open(&path).unwrap();
        raw.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = open_db(&path).unwrap_err();
    assert!(err.to_string().contains("newer than supported"));
}
