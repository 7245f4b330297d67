use crate::config::CONFIG;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: String,
    pub room_id: String,
    pub alias: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Smallest unit a transfer is expressed in, e.g. `1.0` for whole forints
    pub rounding: f64,
    pub default_currency: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub last_modified: DateTime<Utc>,
}

impl Room {
    pub fn new(id: String, name: String, rounding: f64, default_currency: String) -> Self {
        Room {
            id,
            name,
            rounding,
            default_currency,
            last_modified: Utc::now(),
        }
    }

    /// A room using the configured default rounding unit and currency.
    pub fn with_defaults(id: String, name: String) -> Self {
        Room::new(id, name, CONFIG.default_rounding, CONFIG.default_currency.clone())
    }
}
