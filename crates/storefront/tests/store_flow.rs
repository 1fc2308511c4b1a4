//! End-to-end flows across the cart store, auth gate, and flag page, the way
//! the demo pages exercise them: shared storage, reloads, and the intended
//! tampering path.

use gizmo_depot_core::{ProductId, Role};
use gizmo_depot_storefront::admin::reveal_flag;
use gizmo_depot_storefront::auth::{AdminCredentials, AuthGate};
use gizmo_depot_storefront::cart::CartStore;
use gizmo_depot_storefront::catalog::Catalog;
use gizmo_depot_storefront::storage::{FileStorage, MemoryStorage, Storage, keys};
use rust_decimal::Decimal;

#[test]
fn cart_survives_a_page_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("local-storage.json");

    // First "page load": add a few things.
    {
        let store = CartStore::new(FileStorage::new(&path), Catalog::demo());
        store.add(ProductId::new(1));
        store.add(ProductId::new(1));
        store.add(ProductId::new(3));
    }

    // Second "page load": fresh store over the same file.
    let store = CartStore::new(FileStorage::new(&path), Catalog::demo());
    let cart = store.load();
    assert_eq!(cart.item_count(), 3);
    assert_eq!(
        cart.total(),
        Decimal::new(24900, 2) * Decimal::from(2) + Decimal::new(9999, 2)
    );

    // Checkout wipes it for the next load too.
    store.checkout();
    let store = CartStore::new(FileStorage::new(&path), Catalog::demo());
    assert!(store.load().is_empty());
}

#[test]
fn corrupt_storage_file_degrades_to_empty_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("local-storage.json");
    std::fs::write(&path, "definitely not json").expect("corrupt");

    let store = CartStore::new(FileStorage::new(&path), Catalog::demo());
    assert!(store.load().is_empty());
}

#[test]
fn cart_and_auth_share_one_storage_without_colliding() {
    let storage = MemoryStorage::new();
    let store = CartStore::new(&storage, Catalog::demo());
    let gate = AuthGate::with_credentials(
        &storage,
        AdminCredentials::from_plaintext("admin", "hunter2"),
    );

    store.add(ProductId::new(5));
    gate.login("alice", "pw");
    store.add(ProductId::new(5));

    assert_eq!(store.load().item_count(), 2);
    let user = gate.current_user().expect("logged in");
    assert_eq!((user.username.as_str(), user.role), ("alice", Role::User));

    // Logout leaves the cart alone.
    gate.logout();
    assert_eq!(store.load().item_count(), 2);
}

#[test]
fn the_intended_solve_storage_tampering_reveals_the_flag() {
    let storage = MemoryStorage::new();
    let gate = AuthGate::new(&storage);

    // Front door: unknown credentials only get the user role.
    gate.login("player", "guess");
    assert_eq!(reveal_flag(&gate), None);

    // Side door: the role lives in client-writable storage.
    storage
        .set(keys::USER, r#"{"username":"player","role":"admin"}"#)
        .expect("tamper");

    let flag = reveal_flag(&gate).expect("gate trusts the forged record");
    assert!(flag.starts_with("NFSUCTF{"));
    assert!(flag.ends_with('}'));
}

#[test]
fn full_shopping_session() {
    let storage = MemoryStorage::new();
    let store = CartStore::new(&storage, Catalog::demo());

    // Browse, add, change mind, check out.
    let cart = store.add(ProductId::new(6));
    assert_eq!(cart.line(ProductId::new(6)).expect("line").qty, 1);

    store.add(ProductId::new(8));
    store.add(ProductId::new(8));
    let cart = store.remove(ProductId::new(6));

    let ids: Vec<i32> = cart.lines().iter().map(|l| l.id.as_i32()).collect();
    assert_eq!(ids, vec![8]);
    assert_eq!(cart.total(), Decimal::new(3599, 2) * Decimal::from(2));

    let cart = store.checkout();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Decimal::ZERO);
}
