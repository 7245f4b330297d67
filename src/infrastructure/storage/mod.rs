use crate::core::errors::SplitroomError;
use crate::core::models::{
    debt::DebtInstruction,
    payment::PaymentRecord,
    room::{Member, Room},
};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_room(&self, room: Room) -> Result<(), SplitroomError>;
    async fn get_room(&self, room_id: &str) -> Result<Option<Room>, SplitroomError>;
    async fn set_rounding(&self, room_id: &str, rounding: f64) -> Result<(), SplitroomError>;
    async fn add_member(&self, member: Member) -> Result<(), SplitroomError>;
    async fn save_payment(&self, room_id: &str, payment: PaymentRecord) -> Result<(), SplitroomError>;
    async fn deactivate_payment(&self, room_id: &str, payment_id: &str) -> Result<(), SplitroomError>;
    /// Active records of the room, each member's rows contiguous, members in join order.
    async fn get_ledger(&self, room_id: &str) -> Result<Vec<PaymentRecord>, SplitroomError>;
    /// Atomically replaces every stored debt of the room. An empty list means settled.
    async fn replace_debts(&self, room_id: &str, debts: Vec<DebtInstruction>) -> Result<(), SplitroomError>;
    async fn get_debts(&self, room_id: &str) -> Result<Vec<DebtInstruction>, SplitroomError>;
}

pub mod in_memory;
