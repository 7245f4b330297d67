use crate::constants::constants::{DEBTS_REFRESHED, ROUNDING_CHANGED};
use crate::core::aggregator::BalanceAggregator;
use crate::core::currency::RunConverter;
use crate::core::errors::{FieldError, SplitroomError};
use crate::core::models::{audit::AppLog, balance::NetBalance, debt::DebtInstruction, room::Room};
use crate::core::planner::SettlementPlanner;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::rates::RateSource;
use crate::infrastructure::storage::Storage;
use log::{debug, info, warn};
use serde_json::json;

pub struct SplitroomService<L: LoggingService, S: Storage, R: RateSource> {
    storage: S,
    logging: L,
    rates: R,
}

impl<L: LoggingService, S: Storage, R: RateSource> SplitroomService<L, S, R> {
    pub fn new(storage: S, logging: L, rates: R) -> Self {
        info!("Initializing SplitroomService");
        SplitroomService {
            storage,
            logging,
            rates,
        }
    }

    async fn load_room(&self, room_id: &str) -> Result<Room, SplitroomError> {
        self.storage
            .get_room(room_id)
            .await?
            .ok_or_else(|| SplitroomError::RoomNotFound(room_id.to_string()))
    }

    async fn log_and_audit(
        &self,
        room_id: Option<&str>,
        action: &str,
        details: serde_json::Value,
    ) -> Result<(), SplitroomError> {
        self.logging.log_action(action, details, room_id).await
    }

    fn validate_rounding(&self, rounding: f64) -> Result<(), SplitroomError> {
        if !rounding.is_finite() {
            return Err(SplitroomError::InvalidInput(
                "rounding".to_string(),
                FieldError {
                    field: "rounding".to_string(),
                    title: "Invalid Rounding".to_string(),
                    description: "Rounding must be a finite number".to_string(),
                },
            ));
        }
        if rounding <= 0.0 {
            return Err(SplitroomError::InvalidInput(
                "rounding".to_string(),
                FieldError {
                    field: "rounding".to_string(),
                    title: "Invalid Rounding".to_string(),
                    description: "Rounding must be greater than 0".to_string(),
                },
            ));
        }
        Ok(())
    }

    async fn aggregate(&self, room: &Room) -> Result<Vec<NetBalance>, SplitroomError> {
        let ledger = self.storage.get_ledger(&room.id).await?;
        debug!("Ledger of room {} has {} active records", room.id, ledger.len());
        let converter = RunConverter::new(&self.rates);
        BalanceAggregator::aggregate(&ledger, &room.default_currency, &converter).await
    }

    pub fn rate_source(&self) -> &R {
        &self.rates
    }

    pub async fn get_room(&self, room_id: &str) -> Result<Option<Room>, SplitroomError> {
        self.storage.get_room(room_id).await
    }

    pub async fn get_net_balances(&self, room_id: &str) -> Result<Vec<NetBalance>, SplitroomError> {
        let room = self.load_room(room_id).await?;
        self.aggregate(&room).await
    }

    /// Recomputes the room's transfer instructions and replaces the stored ones.
    ///
    /// Nothing is written unless aggregation and planning both succeed.
    pub async fn refresh_debts(&self, room_id: &str) -> Result<Vec<DebtInstruction>, SplitroomError> {
        info!("Refreshing debts for room {}", room_id);
        let room = self.load_room(room_id).await?;
        self.validate_rounding(room.rounding)?;

        let balances = self.aggregate(&room).await.inspect_err(|e| {
            warn!("Settlement of room {} aborted: {}", room.id, e);
        })?;
        let debts = SettlementPlanner::new(room.rounding, &room.default_currency).plan(&balances);
        let total: f64 = debts.iter().map(|d| d.amount).sum();

        self.storage.replace_debts(&room.id, debts.clone()).await?;
        debug!("Stored {} debts for room {}", debts.len(), room.id);

        self.log_and_audit(
            Some(&room.id),
            DEBTS_REFRESHED,
            json!({
                "members": balances.len(),
                "instructions": debts.len(),
                "total": total,
                "currency": room.default_currency,
                "rounding": room.rounding,
            }),
        )
        .await?;

        Ok(debts)
    }

    pub async fn get_debts(&self, room_id: &str) -> Result<Vec<DebtInstruction>, SplitroomError> {
        let room = self.load_room(room_id).await?;
        self.storage.get_debts(&room.id).await
    }

    pub async fn set_rounding(&self, room_id: &str, rounding: f64) -> Result<Room, SplitroomError> {
        info!("Setting rounding of room {} to {}", room_id, rounding);
        self.validate_rounding(rounding).inspect_err(|_| {
            warn!("Rejected rounding {} for room {}", rounding, room_id);
        })?;
        let previous = self.load_room(room_id).await?.rounding;
        self.storage.set_rounding(room_id, rounding).await?;

        self.log_and_audit(
            Some(room_id),
            ROUNDING_CHANGED,
            json!({ "previous": previous, "rounding": rounding }),
        )
        .await?;

        self.load_room(room_id).await
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SplitroomError> {
        self.logging.get_logs().await
    }
}
