use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DebtInstruction {
    pub from_member_id: String,
    pub to_member_id: String,
    pub amount: f64,
    pub currency: String,
    /// `false` for planner output; set later once a matching payment is recorded
    pub arranged: bool,
}
