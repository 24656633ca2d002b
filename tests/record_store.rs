//! Record store behavior against a real temporary data root.

use recordstore::{ErrorKind, RecordStore, StoreConfig};
use serde_json::{json, Value};
use tempfile::tempdir;

#[tokio::test]
async fn create_then_read_back_is_deep_equal() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    let duck = json!({
        "id": "a",
        "name": "larry",
        "color": "blue",
        "feathers": "15",
        "tags": ["pond", {"nested": true}],
        "weight": 1.5,
    });
    let stored = store.create_item("duck", duck.clone()).await.unwrap();
    assert_eq!(stored, duck);

    let fetched = store.fetch_item("duck", "a").await.unwrap();
    assert_eq!(fetched, duck);
}

#[tokio::test]
async fn second_create_overwrites_first() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    store
        .create_item("duck", json!({"id": "a", "name": "larry"}))
        .await
        .unwrap();
    store
        .create_item("duck", json!({"id": "a", "name": "steve"}))
        .await
        .unwrap();

    let fetched = store.fetch_item("duck", "a").await.unwrap();
    assert_eq!(fetched["name"], "steve");
    assert_eq!(store.list_ids("duck").await.unwrap(), vec!["a"]);
}

#[tokio::test]
async fn update_uses_same_upsert() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    // No prior file: update creates it.
    store
        .update_item("duck", json!({"id": "b", "name": "larry", "color": "blue"}))
        .await
        .unwrap();
    let updated = store
        .update_item("duck", json!({"id": "b", "name": "steve", "color": "yellow"}))
        .await
        .unwrap();
    assert_eq!(updated["color"], "yellow");

    let fetched = store.fetch_item("duck", "b").await.unwrap();
    assert_eq!(fetched["name"], "steve");
    assert_eq!(fetched["color"], "yellow");
}

#[tokio::test]
async fn empty_schema_is_invalid_regardless_of_item() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    for item in [json!({"id": "a"}), Value::Null, json!({})] {
        let err = store.create_item("", item).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.kind().status_code(), 400);
    }
}

#[tokio::test]
async fn null_item_is_invalid_regardless_of_schema() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    for schema in ["duck", "goose", "brand-new"] {
        let err = store.create_item(schema, Value::Null).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "expected an item");
    }
    assert!(store.list_ids("duck").await.unwrap().is_empty());
}

#[tokio::test]
async fn first_write_creates_schema_dir_and_second_reuses_it() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path().join("data"));

    store.create_item("duck", json!({"id": "a"})).await.unwrap();
    assert!(dir.path().join("data").join("duck").is_dir());

    store.create_item("duck", json!({"id": "b"})).await.unwrap();
    assert_eq!(store.list_ids("duck").await.unwrap(), vec!["a", "b"]);
}

#[tokio::test]
async fn concurrent_first_writes_both_succeed() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create_item("duck", json!({"id": format!("d{:02}", i), "n": i}))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let ids = store.list_ids("duck").await.unwrap();
    assert_eq!(ids.len(), 16);
    assert_eq!(ids[0], "d00");
    assert_eq!(ids[15], "d15");
}

#[tokio::test]
async fn fetch_and_delete_missing_are_not_found() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    let err = store.fetch_item("duck", "not-exist").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.kind().status_code(), 404);

    let err = store.delete_item("duck", "not-exist").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn delete_removes_record_but_keeps_schema_dir() {
    let dir = tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    store
        .create_item("duck", json!({"id": "a", "name": "larry"}))
        .await
        .unwrap();
    store.delete_item("duck", "a").await.unwrap();

    let err = store.fetch_item("duck", "a").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(dir.path().join("duck").is_dir());
    assert!(store.list_ids("duck").await.unwrap().is_empty());
}

#[tokio::test]
async fn store_from_config_uses_data_root() {
    let dir = tempdir().unwrap();
    let config = StoreConfig {
        data_root: dir.path().join("configured"),
    };
    let store = RecordStore::from_config(&config);
    assert_eq!(store.root(), config.data_root.as_path());

    store.create_item("duck", json!({"id": "a"})).await.unwrap();
    assert!(dir.path().join("configured").join("duck").join("a.json").exists());
}
