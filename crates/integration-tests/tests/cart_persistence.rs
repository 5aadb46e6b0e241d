//! Debounce timing and storage degradation behavior.

use std::time::Duration;

use golden_fig_cart::storage;
use golden_fig_core::ProductId;
use golden_fig_integration_tests::{probe_store, test_product};

#[tokio::test(flavor = "multi_thread")]
async fn test_rapid_mutation_burst_writes_once() {
    let (store, storage) = probe_store(40);

    // Simulated +/- clicking on a quantity stepper.
    store.add_item(test_product("fig-jam", 9), 1);
    for quantity in 2..=8 {
        store.set_quantity(&ProductId::new("fig-jam"), quantity);
    }
    store.set_quantity(&ProductId::new("fig-jam"), 3);

    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(storage.write_count(), 1);
    let persisted = storage::load(storage.as_ref());
    assert_eq!(persisted.first().map(|l| l.quantity), Some(3));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quiet_gap_between_mutations_writes_twice() {
    let (store, storage) = probe_store(20);

    store.add_item(test_product("fig-jam", 9), 1);
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(storage.write_count(), 1);

    store.add_item(test_product("fig-bar", 3), 1);
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(storage.write_count(), 2);

    let persisted = storage::load(storage.as_ref());
    assert_eq!(persisted.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_write_failures_leave_store_authoritative() {
    let (store, storage) = probe_store(10);
    storage.fail_writes();

    store.add_item(test_product("fig-jam", 9), 2);
    tokio::time::sleep(Duration::from_millis(150)).await;

    // Persistence failed silently; in-memory state is unaffected.
    assert_eq!(storage.write_count(), 0);
    assert_eq!(store.snapshot().total_quantity, 2);

    // And the store keeps working, including later successful saves.
    store.add_item(test_product("fig-bar", 3), 1);
    assert_eq!(store.snapshot().total_quantity, 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_clear_persists_empty_state() {
    let (store, storage) = probe_store(10);

    store.add_item(test_product("fig-jam", 9), 2);
    store.clear();
    tokio::time::sleep(Duration::from_millis(150)).await;

    let persisted = storage::load(storage.as_ref());
    assert!(persisted.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_noop_mutations_never_reach_storage() {
    let (store, storage) = probe_store(10);

    store.remove_item(&ProductId::new("ghost"));
    store.set_quantity(&ProductId::new("ghost"), 4);
    store.add_item(test_product("", 1), 1);
    store.clear();
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(storage.write_count(), 0);
}
