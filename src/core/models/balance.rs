use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Total contribution of a member in the room currency. Positive means the
/// member paid more than the others.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NetBalance {
    pub member_id: String,
    pub amount: f64,
}

impl NetBalance {
    pub fn new(member_id: &str, amount: f64) -> Self {
        NetBalance {
            member_id: member_id.to_string(),
            amount,
        }
    }
}
