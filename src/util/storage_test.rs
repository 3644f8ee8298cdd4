use super::*;

#[test]
fn memory_store_round_trips() {
    let mut store = MemoryTokenStore::default();
    assert!(store.load().is_none());

    store.save("tok-1");
    assert_eq!(store.load().as_deref(), Some("tok-1"));

    store.save("tok-2");
    assert_eq!(store.load().as_deref(), Some("tok-2"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let mut store = MemoryTokenStore::with_token("tok");
    store.clear();
    store.clear();
    assert!(store.load().is_none());
}

#[test]
fn browser_store_is_inert_off_the_browser() {
    // Featureless host build: no window, so every call is a no-op.
    let mut store = BrowserTokenStore;
    store.save("tok");
    assert!(store.load().is_none());
    store.clear();
}
