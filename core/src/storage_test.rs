use super::*;

#[test]
fn memory_storage_reads_back_written_value() {
    let storage = MemoryStorage::new();
    storage.set_item("token", "abc").expect("set");
    assert_eq!(storage.get_item("token").as_deref(), Some("abc"));
}

#[test]
fn memory_storage_clones_share_state() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set_item("user", "{}").expect("set");
    assert_eq!(other.get_item("user").as_deref(), Some("{}"));
    other.remove_item("user");
    assert!(storage.get_item("user").is_none());
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove_item("missing");
    assert!(storage.keys().is_empty());
}
