use crate::constants::constants::{DEBTS_REFRESHED, ROUNDING_CHANGED};
use crate::core::errors::SplitroomError;
use crate::infrastructure::rates::fixed::StaticRateSource;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use crate::tests::{create_test_service, pay, seed_room, test_rates, transfer, transfers};

#[tokio::test]
async fn test_refresh_debts_persists_plan() {
    let _ = env_logger::try_init();
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b", "c"]).await;
    pay(&storage, "r1", "p1", "a", 90.0, "HUF").await;
    let service = create_test_service(&storage, StaticRateSource::new(test_rates()));

    let debts = service.refresh_debts("r1").await.unwrap();
    assert_eq!(transfers(&debts), vec![transfer("b", "a", 30.0), transfer("c", "a", 30.0)]);
    assert!(debts.iter().all(|d| d.currency == "HUF" && !d.arranged));
    assert_eq!(service.get_debts("r1").await.unwrap(), debts);

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, DEBTS_REFRESHED);
    assert_eq!(logs[0].room_id.as_deref(), Some("r1"));
    assert_eq!(logs[0].details["instructions"], 2);
}

#[tokio::test]
async fn test_refresh_converts_into_room_currency_with_one_fetch() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b", "c"]).await;
    pay(&storage, "r1", "p1", "a", 10.0, "EUR").await;
    pay(&storage, "r1", "p2", "b", 4000.0, "HUF").await;
    let service = create_test_service(&storage, StaticRateSource::new(test_rates()));

    let debts = service.refresh_debts("r1").await.unwrap();
    assert_eq!(
        transfers(&debts),
        vec![transfer("c", "a", 1333.0), transfer("c", "b", 1333.0)]
    );
    assert_eq!(service.rate_source().fetch_count(), 1);

    // Each run takes a fresh snapshot.
    service.get_net_balances("r1").await.unwrap();
    assert_eq!(service.rate_source().fetch_count(), 2);
}

#[tokio::test]
async fn test_single_currency_room_never_fetches_rates() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b"]).await;
    pay(&storage, "r1", "p1", "a", 50.0, "HUF").await;
    let service = create_test_service(&storage, StaticRateSource::unavailable());

    let debts = service.refresh_debts("r1").await.unwrap();
    assert_eq!(transfers(&debts), vec![transfer("b", "a", 25.0)]);
    assert_eq!(service.rate_source().fetch_count(), 0);
}

#[tokio::test]
async fn test_failed_conversion_keeps_previous_debts() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b"]).await;
    pay(&storage, "r1", "p1", "a", 50.0, "HUF").await;
    let service = create_test_service(&storage, StaticRateSource::new(test_rates()));
    let before = service.refresh_debts("r1").await.unwrap();

    pay(&storage, "r1", "p2", "b", 20.0, "XYZ").await;
    let result = service.refresh_debts("r1").await;
    assert!(matches!(result, Err(SplitroomError::UnknownCurrency(c)) if c == "XYZ"));
    assert_eq!(storage.get_debts("r1").await.unwrap(), before);
    assert_eq!(service.get_app_logs().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_rates_abort_refresh() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b"]).await;
    pay(&storage, "r1", "p1", "a", 50.0, "EUR").await;
    let service = create_test_service(&storage, StaticRateSource::unavailable());

    let result = service.refresh_debts("r1").await;
    assert!(matches!(result, Err(SplitroomError::RateFetch(_))));
    assert!(storage.get_debts("r1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_settled_room_stores_empty_list() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b"]).await;
    pay(&storage, "r1", "p1", "a", 50.0, "HUF").await;
    let service = create_test_service(&storage, StaticRateSource::new(test_rates()));
    assert_eq!(service.refresh_debts("r1").await.unwrap().len(), 1);

    storage.deactivate_payment("r1", "p1").await.unwrap();
    assert!(service.refresh_debts("r1").await.unwrap().is_empty());
    assert!(service.get_debts("r1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_net_balances_include_members_without_payments() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b"]).await;
    pay(&storage, "r1", "p1", "b", 2.0, "EUR").await;
    let service = create_test_service(&storage, StaticRateSource::new(test_rates()));

    let balances = service.get_net_balances("r1").await.unwrap();
    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].member_id, "a");
    assert_eq!(balances[0].amount, 0.0);
    assert_eq!(balances[1].amount, 800.0);
}

#[tokio::test]
async fn test_set_rounding_validates_and_applies() {
    let storage = InMemoryStorage::new();
    seed_room(&storage, "r1", "HUF", &["a", "b"]).await;
    pay(&storage, "r1", "p1", "a", 47.0, "HUF").await;
    let service = create_test_service(&storage, StaticRateSource::new(test_rates()));

    for invalid in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let result = service.set_rounding("r1", invalid).await;
        assert!(matches!(result, Err(SplitroomError::InvalidInput(field, _)) if field == "rounding"));
    }

    let room = service.set_rounding("r1", 10.0).await.unwrap();
    assert_eq!(room.rounding, 10.0);
    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, ROUNDING_CHANGED);

    // 23.5 owed, expressed in tens.
    let debts = service.refresh_debts("r1").await.unwrap();
    assert_eq!(transfers(&debts), vec![transfer("b", "a", 20.0)]);
}

#[tokio::test]
async fn test_unknown_room() {
    let storage = InMemoryStorage::new();
    let service = create_test_service(&storage, StaticRateSource::new(test_rates()));

    assert!(matches!(service.refresh_debts("nope").await, Err(SplitroomError::RoomNotFound(id)) if id == "nope"));
    assert!(matches!(service.get_debts("nope").await, Err(SplitroomError::RoomNotFound(_))));
    assert!(matches!(service.set_rounding("nope", 1.0).await, Err(SplitroomError::RoomNotFound(_))));
    assert!(service.get_room("nope").await.unwrap().is_none());
}
