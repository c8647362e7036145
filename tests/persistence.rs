use std::fs;
use stockpile::error::{Rejection, StockError};
use stockpile::inventory::{Inventory, WriteStatus};
use stockpile::model::NewProduct;
use stockpile::store::json::JsonBackend;
use stockpile::store::text::TextBackend;
use stockpile::store::{IssueKind, StorageBackend};
use tempfile::TempDir;

fn fill<B: StorageBackend>(inv: &mut Inventory<B>) {
    inv.add(NewProduct::new("1", "Laptop", 5, 899.99)).unwrap();
    inv.add(NewProduct::new("2", "Mouse", 15, 29.99)).unwrap();
    inv.add(NewProduct::new("10", "Monitor Stand", 0, 0.0))
        .unwrap();
}

fn tuples<B: StorageBackend>(inv: &Inventory<B>) -> Vec<(String, String, u64, f64)> {
    let mut all: Vec<_> = inv
        .list_all()
        .into_iter()
        .map(|p| (p.id().to_string(), p.name().to_string(), p.quantity(), p.price()))
        .collect();
    all.sort_by(|a, b| a.0.cmp(&b.0));
    all
}

#[test]
fn json_round_trip_preserves_products() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut inv = Inventory::open(JsonBackend::new(&path));
    fill(&mut inv);
    inv.update_price("2", 24.5).unwrap();
    let before = tuples(&inv);

    let reopened = Inventory::open(JsonBackend::new(&path));
    assert_eq!(tuples(&reopened), before);
    assert!(reopened.load_issues().is_empty());
}

#[test]
fn text_round_trip_preserves_products() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.txt");

    let mut inv = Inventory::open(TextBackend::new(&path));
    fill(&mut inv);
    inv.remove("1").unwrap();
    let before = tuples(&inv);

    let reopened = Inventory::open(TextBackend::new(&path));
    assert_eq!(tuples(&reopened), before);
}

#[test]
fn unwritable_target_degrades_to_memory() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "plain file").unwrap();

    let mut inv = Inventory::open(JsonBackend::new(blocker.join("inventory.json")));
    let receipt = inv.add(NewProduct::new("1", "Laptop", 5, 899.99)).unwrap();

    assert!(matches!(receipt.write, WriteStatus::Degraded(_)));
    assert_eq!(inv.len(), 1);
    assert_eq!(inv.aggregate().count, 1);
}

#[test]
fn unreadable_store_starts_empty_and_keeps_working() {
    let dir = TempDir::new().unwrap();

    // A directory where the file should be cannot be read or written.
    let mut inv = Inventory::open(JsonBackend::new(dir.path()));
    assert!(inv.is_empty());
    assert!(matches!(
        inv.load_issues()[0].kind,
        IssueKind::Unreadable(_)
    ));

    let receipt = inv.add(NewProduct::new("1", "Pen", 1, 1.0)).unwrap();
    assert!(receipt.is_degraded());
    assert!(inv.get("1").is_some());
}

#[test]
fn corrupt_json_opens_empty_then_recovers_on_write() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, "[{ broken").unwrap();

    let mut inv = Inventory::open(JsonBackend::new(&path));
    assert!(inv.is_empty());
    assert!(matches!(
        inv.load_issues()[0].kind,
        IssueKind::CorruptDocument(_)
    ));

    inv.add(NewProduct::new("1", "Pen", 1, 1.0)).unwrap();
    let reopened = Inventory::open(JsonBackend::new(&path));
    assert_eq!(reopened.len(), 1);
    assert!(reopened.load_issues().is_empty());
}

#[test]
fn text_store_refuses_comment_like_id_and_keeps_the_rest() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.txt");

    let mut inv = Inventory::open(TextBackend::new(&path));
    fill(&mut inv);
    let before = fs::read_to_string(&path).unwrap();

    let err = inv.add(NewProduct::new("#5", "Widget", 2, 3.0)).unwrap_err();
    assert!(matches!(
        err,
        StockError::Rejected(Rejection::UnstorableId { .. })
    ));
    assert!(inv.get("#5").is_none());
    assert_eq!(fs::read_to_string(&path).unwrap(), before);

    let receipt = inv.add(NewProduct::new("5#", "Widget", 2, 3.0)).unwrap();
    assert_eq!(receipt.write, WriteStatus::Persisted);

    let reopened = Inventory::open(TextBackend::new(&path));
    assert_eq!(tuples(&reopened), tuples(&inv));
    assert!(reopened.load_issues().is_empty());
}

#[test]
fn json_store_accepts_comment_like_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let mut inv = Inventory::open(JsonBackend::new(&path));
    inv.add(NewProduct::new("#5", "Widget", 2, 3.0)).unwrap();

    let reopened = Inventory::open(JsonBackend::new(&path));
    assert_eq!(reopened.get("#5").unwrap().name(), "Widget");
}

#[test]
fn bad_utf8_line_does_not_cost_the_rest_of_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.txt");
    let mut content = b"1,Laptop,5,899.99\n".to_vec();
    content.extend_from_slice(b"2,Mo\xffuse,15,29.99\n");
    fs::write(&path, content).unwrap();

    let mut inv = Inventory::open(TextBackend::new(&path));
    assert_eq!(inv.len(), 1);
    assert!(matches!(
        inv.load_issues()[0].kind,
        IssueKind::MalformedEntry(_)
    ));

    inv.update_quantity("1", 4).unwrap();
    let reopened = Inventory::open(TextBackend::new(&path));
    assert_eq!(reopened.get("1").unwrap().quantity(), 4);
}
