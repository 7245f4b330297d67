use crate::core::errors::SplitroomError;
use crate::core::models::payment::PaymentRecord;
use crate::core::models::room::Member;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use crate::tests::{pay, seed_room};

#[tokio::test]
async fn test_ledger_is_grouped_by_member_in_join_order() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b", "c"]).await;
    pay(&storage, "r1", "p1", "b", 10.0, "HUF").await;
    pay(&storage, "r1", "p2", "a", 20.0, "EUR").await;
    pay(&storage, "r1", "p3", "b", -4.0, "HUF").await;

    let ledger = storage.get_ledger("r1").await.unwrap();
    let rows: Vec<(&str, &str)> = ledger.iter().map(|r| (r.member_id.as_str(), r.id.as_str())).collect();
    assert_eq!(rows, vec![("a", "p2"), ("b", "p1"), ("b", "p3"), ("c", "zero-c")]);
    assert_eq!(ledger[3].amount, 0.0);
    assert_eq!(ledger[3].currency, "HUF");
}

#[tokio::test]
async fn test_ledger_skips_inactive_payments() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a"]).await;
    pay(&storage, "r1", "p1", "a", 10.0, "HUF").await;
    storage.deactivate_payment("r1", "p1").await.unwrap();

    let ledger = storage.get_ledger("r1").await.unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].id, "zero-a");
}

#[tokio::test]
async fn test_payment_requires_room_member() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a"]).await;
    let result = storage
        .save_payment("r1", PaymentRecord::new("p1", "stranger", 5.0, "HUF"))
        .await;
    assert!(matches!(result, Err(SplitroomError::MemberNotFound(id)) if id == "stranger"));

    let result = storage
        .add_member(Member {
            id: "x".to_string(),
            room_id: "missing".to_string(),
            alias: "X".to_string(),
        })
        .await;
    assert!(matches!(result, Err(SplitroomError::RoomNotFound(_))));
}

#[tokio::test]
async fn test_writes_bump_last_modified() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a"]).await;
    let before = storage.get_room("r1").await.unwrap().unwrap().last_modified;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    pay(&storage, "r1", "p1", "a", 10.0, "HUF").await;
    let after = storage.get_room("r1").await.unwrap().unwrap().last_modified;
    assert!(after > before);
}

#[test]
fn test_room_defaults() {
    let room = crate::core::models::room::Room::with_defaults("r9".to_string(), "Flat".to_string());
    assert!(room.rounding > 0.0);
    assert!(!room.default_currency.is_empty());
}
