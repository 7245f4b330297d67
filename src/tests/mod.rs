mod service_tests;
mod storage_tests;

use crate::core::models::{
    balance::NetBalance,
    debt::DebtInstruction,
    payment::PaymentRecord,
    rates::RateTable,
    room::{Member, Room},
};
use crate::core::services::SplitroomService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::rates::fixed::StaticRateSource;
use crate::infrastructure::storage::{Storage, in_memory::InMemoryStorage};
use std::collections::HashMap;

pub type TestService = SplitroomService<InMemoryLogging, InMemoryStorage, StaticRateSource>;

pub fn balances(entries: &[(&str, f64)]) -> Vec<NetBalance> {
    entries.iter().map(|(id, amount)| NetBalance::new(id, *amount)).collect()
}

pub fn transfers(debts: &[DebtInstruction]) -> Vec<(String, String, f64)> {
    debts
        .iter()
        .map(|d| (d.from_member_id.clone(), d.to_member_id.clone(), d.amount))
        .collect()
}

pub fn transfer(from: &str, to: &str, amount: f64) -> (String, String, f64) {
    (from.to_string(), to.to_string(), amount)
}

/// EUR-pivoted table: 1 EUR = 400 HUF = 1.1 USD.
pub fn test_rates() -> RateTable {
    RateTable::new(
        "EUR",
        HashMap::from([
            ("EUR".to_string(), 1.0),
            ("HUF".to_string(), 400.0),
            ("USD".to_string(), 1.1),
        ]),
    )
}

pub fn create_test_service(storage: &InMemoryStorage, rates: StaticRateSource) -> TestService {
    SplitroomService::new(storage.clone(), InMemoryLogging::new(), rates)
}

pub async fn seed_room(storage: &InMemoryStorage, room_id: &str, currency: &str, members: &[&str]) {
    storage
        .save_room(Room::new(room_id.to_string(), "Trip".to_string(), 1.0, currency.to_string()))
        .await
        .unwrap();
    for id in members {
        storage
            .add_member(Member {
                id: id.to_string(),
                room_id: room_id.to_string(),
                alias: id.to_uppercase(),
            })
            .await
            .unwrap();
    }
}

pub async fn pay(storage: &InMemoryStorage, room_id: &str, id: &str, member_id: &str, amount: f64, currency: &str) {
    storage
        .save_payment(room_id, PaymentRecord::new(id, member_id, amount, currency))
        .await
        .unwrap();
}
