//! Contact store behaviour against a real file in a temp directory.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use landing_api::models::contact::{ContactStatus, ContactStore};

mod common;
use common::{new_contact, setup_store};

#[tokio::test]
async fn test_fresh_store_is_empty() {
    let (_dir, store) = setup_store();
    assert!(store.get_all().await.is_empty());
    assert!(store.get_by_id(1).await.is_none());
    assert!(!store.path().exists(), "reads must not create the file");
}

#[tokio::test]
async fn test_submit_returns_entry_verbatim() {
    let (_dir, store) = setup_store();
    let entry = store
        .submit(new_contact(" Ada ", "Ada@Example.com", "Hi there"))
        .await
        .expect("submit");

    assert_eq!(entry.name, " Ada ");
    assert_eq!(entry.email, "Ada@Example.com");
    assert_eq!(entry.message, "Hi there");
    assert_eq!(entry.status, ContactStatus::New);
    assert!(entry.id > 0);
    assert!(entry.timestamp.ends_with('Z'), "timestamp should be UTC: {}", entry.timestamp);
    assert!(chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
}

#[tokio::test]
async fn test_submit_then_lookup_round_trip() {
    let (_dir, store) = setup_store();
    store.submit(new_contact("First", "f@x.io", "one")).await.expect("submit 1");
    let second = store.submit(new_contact("Second", "s@x.io", "two")).await.expect("submit 2");

    let found = store.get_by_id(second.id).await.expect("found");
    assert_eq!(found, second);

    let all = store.get_all().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "First");
    assert_eq!(all.last(), Some(&second));
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let (_dir, store) = setup_store();
    store.submit(new_contact("Ada", "ada@example.com", "Hi")).await.expect("submit");
    assert_eq!(store.get_all().await, store.get_all().await);
}

#[tokio::test]
async fn test_ids_are_unique_and_increasing() {
    let (_dir, store) = setup_store();
    let mut ids = Vec::new();
    for i in 0..20 {
        let e = store
            .submit(new_contact("N", "n@x.io", &format!("msg {i}")))
            .await
            .expect("submit");
        ids.push(e.id);
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids: {ids:?}");
}

#[tokio::test]
async fn test_concurrent_submits_lose_nothing() {
    let (_dir, store) = setup_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .submit(new_contact(&format!("User {i}"), "u@x.io", "hello"))
                    .await
                    .expect("submit")
            })
        })
        .collect();
    for h in handles {
        h.await.expect("join");
    }

    let all = store.get_all().await;
    assert_eq!(all.len(), 16);
    let mut ids: Vec<i64> = all.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16, "duplicate ids");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_see_whole_collections_during_writes() {
    const WRITES: usize = 100;

    let (_dir, store) = setup_store();
    let store = Arc::new(store);
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let store = Arc::clone(&store);
        let done = Arc::clone(&done);
        tokio::spawn(async move {
            let mut snapshots: Vec<Vec<i64>> = Vec::new();
            while !done.load(Ordering::Acquire) {
                let ids = store.get_all().await.iter().map(|c| c.id).collect();
                snapshots.push(ids);
                tokio::task::yield_now().await;
            }
            snapshots
        })
    };

    for i in 0..WRITES {
        store
            .submit(new_contact("Writer", "w@x.io", &format!("msg {i}")))
            .await
            .expect("submit");
    }
    done.store(true, Ordering::Release);
    let snapshots = reader.await.expect("join reader");

    let final_ids: Vec<i64> = store.get_all().await.iter().map(|c| c.id).collect();
    assert_eq!(final_ids.len(), WRITES);

    let mut last_len = 0;
    for ids in &snapshots {
        // A torn file would parse as empty and show up as a shrinking read.
        assert!(ids.len() >= last_len, "read went from {last_len} to {} entries", ids.len());
        assert_eq!(ids[..], final_ids[..ids.len()], "read is not a prefix of the final list");
        last_len = ids.len();
    }
}

#[tokio::test]
async fn test_corrupt_file_reads_empty_and_submit_recovers() {
    let (_dir, store) = setup_store();
    std::fs::write(store.path(), "{ not json").expect("write garbage");

    assert!(store.get_all().await.is_empty());

    let entry = store.submit(new_contact("Ada", "ada@example.com", "Hi")).await.expect("submit");
    let all = store.get_all().await;
    assert_eq!(all, vec![entry]);
}

#[tokio::test]
async fn test_file_is_pretty_json_array() {
    let (_dir, store) = setup_store();
    let entry = store.submit(new_contact("Ada", "ada@example.com", "Hi")).await.expect("submit");

    let raw = std::fs::read_to_string(store.path()).expect("read");
    assert!(raw.contains('\n'), "file should be human-readable");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value[0]["id"], entry.id);
    assert_eq!(value[0]["status"], "new");
    assert!(!store.path().with_extension("json.tmp").exists());
}

#[tokio::test]
async fn test_write_failure_surfaces() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    // Data directory that does not exist: reads degrade, writes fail.
    let store = ContactStore::new(dir.path().join("missing"));

    assert!(store.get_all().await.is_empty());
    let result = store.submit(new_contact("Ada", "ada@example.com", "Hi")).await;
    assert!(result.is_err(), "submit must not report success when the write fails");
    assert!(store.get_all().await.is_empty());
}
