//! Search history persisted to a JSON file.

use kumono_search::{
    JsonFileStore, KeyValueStore, SearchHistory, StoreError, HISTORY_KEY, MAX_HISTORY,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_history_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state").join("history.json");

    let mut history = SearchHistory::load(JsonFileStore::open(&path).unwrap());
    history.submit("kyoto");
    history.submit("osaka");
    history.submit("kyoto");
    drop(history);

    let reopened = SearchHistory::load(JsonFileStore::open(&path).unwrap());
    assert_eq!(reopened.entries(), ["kyoto", "osaka"]);
}

#[test]
fn test_file_holds_json_array_under_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    let mut history = SearchHistory::load(JsonFileStore::open(&path).unwrap());
    history.submit("kumono park");

    let on_disk: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[HISTORY_KEY], "[\"kumono park\"]");
}

#[test]
fn test_cap_holds_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    for batch in [["1", "2", "3"], ["4", "5", "6"]] {
        let mut history = SearchHistory::load(JsonFileStore::open(&path).unwrap());
        for q in batch {
            history.submit(q);
        }
    }

    let history = SearchHistory::load(JsonFileStore::open(&path).unwrap());
    assert_eq!(history.len(), MAX_HISTORY);
    assert_eq!(history.entries(), ["6", "5", "4", "3", "2"]);
}

#[test]
fn test_clear_removes_key_but_keeps_other_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("other_key", "keep me").unwrap();

    let mut history = SearchHistory::load(store);
    history.submit("kyoto");
    history.clear();
    assert!(history.is_empty());

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
    assert_eq!(store.get("other_key").unwrap().as_deref(), Some("keep me"));
}

#[test]
fn test_garbage_value_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, format!("{{\"{}\": \"not json at all\"}}", HISTORY_KEY)).unwrap();

    let history = SearchHistory::load(JsonFileStore::open(&path).unwrap());
    assert!(history.is_empty());
}

#[test]
fn test_non_object_file_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Corrupt(_))));
}
