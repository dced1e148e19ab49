use super::*;

#[test]
fn get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("nope").unwrap(), None);
}

#[test]
fn set_then_get_returns_value() {
    let store = MemoryStore::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_deletes_and_tolerates_missing() {
    let store = MemoryStore::new();
    store.set("k", "v").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();
    assert!(store.is_empty());
}

#[test]
fn rejected_key_fails_writes_but_not_others() {
    let store = MemoryStore::new();
    store.reject_writes_to("full");
    assert!(matches!(store.set("full", "x"), Err(StorageError::Write { .. })));
    assert!(store.set("other", "x").is_ok());
    assert_eq!(store.get("full").unwrap(), None);
}

#[test]
fn unreadable_key_fails_reads_but_still_accepts_writes() {
    let store = MemoryStore::new();
    store.reject_reads_to("blocked");
    store.set("blocked", "x").unwrap();
    assert!(matches!(store.get("blocked"), Err(StorageError::Read { .. })));
    assert_eq!(store.get("open").unwrap(), None);
}
