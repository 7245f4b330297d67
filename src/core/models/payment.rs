use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One materialized ledger row. Split-derived rows carry negative amounts and
/// point at their originating record through `parent_id`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PaymentRecord {
    pub id: String,
    pub member_id: String,
    pub amount: f64,
    pub currency: String,
    pub parent_id: Option<String>,
}

impl PaymentRecord {
    pub fn new(id: &str, member_id: &str, amount: f64, currency: &str) -> Self {
        PaymentRecord {
            id: id.to_string(),
            member_id: member_id.to_string(),
            amount,
            currency: currency.to_string(),
            parent_id: None,
        }
    }

    pub fn derived_from(mut self, parent_id: &str) -> Self {
        self.parent_id = Some(parent_id.to_string());
        self
    }
}
