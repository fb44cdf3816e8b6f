use super::*;

#[test]
fn memory_store_reads_absent_for_unknown_key() {
    let store = MemoryStore::new();
    assert_eq!(store.get("missing"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_store_set_replaces_previous_value() {
    let store = MemoryStore::new();
    store.set("k", "one");
    store.set("k", "two");
    assert_eq!(store.get("k").as_deref(), Some("two"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_is_noop_for_missing_key() {
    let store = MemoryStore::new();
    store.set("a", "1");
    store.remove("b");
    assert_eq!(store.len(), 1);
    store.remove("a");
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_backing_map() {
    let store = MemoryStore::new();
    let other = store.clone();
    other.set("shared", "yes");
    assert_eq!(store.get("shared").as_deref(), Some("yes"));
}
