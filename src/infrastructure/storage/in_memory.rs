use crate::core::errors::SplitroomError;
use crate::core::models::{
    debt::DebtInstruction,
    payment::PaymentRecord,
    room::{Member, Room},
};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Debug)]
struct StoredPayment {
    record: PaymentRecord,
    active: bool,
}

#[derive(Clone)]
pub struct InMemoryStorage {
    rooms: Arc<RwLock<HashMap<String, Room>>>,
    members: Arc<RwLock<HashMap<String, Vec<Member>>>>,
    payments: Arc<RwLock<HashMap<String, Vec<StoredPayment>>>>,
    debts: Arc<RwLock<HashMap<String, Vec<DebtInstruction>>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            rooms: Arc::new(RwLock::new(HashMap::new())),
            members: Arc::new(RwLock::new(HashMap::new())),
            payments: Arc::new(RwLock::new(HashMap::new())),
            debts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn touch(&self, room_id: &str) {
        if let Some(room) = self.rooms.write().await.get_mut(room_id) {
            room.last_modified = Utc::now();
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_room(&self, room: Room) -> Result<(), SplitroomError> {
        let mut rooms = self.rooms.write().await;
        rooms.insert(room.id.clone(), room);
        Ok(())
    }

    async fn get_room(&self, room_id: &str) -> Result<Option<Room>, SplitroomError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(room_id).cloned())
    }

    async fn set_rounding(&self, room_id: &str, rounding: f64) -> Result<(), SplitroomError> {
        let mut rooms = self.rooms.write().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| SplitroomError::RoomNotFound(room_id.to_string()))?;
        room.rounding = rounding;
        room.last_modified = Utc::now();
        Ok(())
    }

    async fn add_member(&self, member: Member) -> Result<(), SplitroomError> {
        if !self.rooms.read().await.contains_key(&member.room_id) {
            return Err(SplitroomError::RoomNotFound(member.room_id));
        }
        let mut members = self.members.write().await;
        let room_id = member.room_id.clone();
        members.entry(room_id.clone()).or_default().push(member);
        drop(members);
        self.touch(&room_id).await;
        Ok(())
    }

    async fn save_payment(&self, room_id: &str, payment: PaymentRecord) -> Result<(), SplitroomError> {
        let members = self.members.read().await;
        let is_member = members
            .get(room_id)
            .is_some_and(|m| m.iter().any(|m| m.id == payment.member_id));
        if !is_member {
            return Err(SplitroomError::MemberNotFound(payment.member_id));
        }
        let mut payments = self.payments.write().await;
        payments.entry(room_id.to_string()).or_default().push(StoredPayment {
            record: payment,
            active: true,
        });
        drop(payments);
        drop(members);
        self.touch(room_id).await;
        Ok(())
    }

    async fn deactivate_payment(&self, room_id: &str, payment_id: &str) -> Result<(), SplitroomError> {
        let mut payments = self.payments.write().await;
        let stored = payments
            .get_mut(room_id)
            .and_then(|p| p.iter_mut().find(|p| p.record.id == payment_id))
            .ok_or_else(|| SplitroomError::StorageError(format!("Payment {} not found", payment_id)))?;
        stored.active = false;
        drop(payments);
        self.touch(room_id).await;
        Ok(())
    }

    async fn get_ledger(&self, room_id: &str) -> Result<Vec<PaymentRecord>, SplitroomError> {
        let rooms = self.rooms.read().await;
        let room = rooms
            .get(room_id)
            .ok_or_else(|| SplitroomError::RoomNotFound(room_id.to_string()))?;
        let members = self.members.read().await;
        let payments = self.payments.read().await;
        let active: Vec<&PaymentRecord> = payments
            .get(room_id)
            .map(|p| p.iter().filter(|p| p.active).map(|p| &p.record).collect())
            .unwrap_or_default();

        let mut ledger = Vec::new();
        for member in members.get(room_id).into_iter().flatten() {
            let before = ledger.len();
            ledger.extend(
                active
                    .iter()
                    .filter(|p| p.member_id == member.id)
                    .map(|p| (*p).clone()),
            );
            // Members without payments still share the cost.
            if ledger.len() == before {
                ledger.push(PaymentRecord::new(
                    &format!("zero-{}", member.id),
                    &member.id,
                    0.0,
                    &room.default_currency,
                ));
            }
        }
        Ok(ledger)
    }

    async fn replace_debts(&self, room_id: &str, debts: Vec<DebtInstruction>) -> Result<(), SplitroomError> {
        let mut rooms = self.rooms.write().await;
        let room = rooms
            .get_mut(room_id)
            .ok_or_else(|| SplitroomError::RoomNotFound(room_id.to_string()))?;
        let mut stored = self.debts.write().await;
        stored.insert(room_id.to_string(), debts);
        room.last_modified = Utc::now();
        Ok(())
    }

    async fn get_debts(&self, room_id: &str) -> Result<Vec<DebtInstruction>, SplitroomError> {
        let debts = self.debts.read().await;
        Ok(debts.get(room_id).cloned().unwrap_or_default())
    }
}
