//! Currency conversion for a single settlement run.

use crate::core::errors::SplitroomError;
use crate::core::models::rates::RateTable;
use crate::infrastructure::rates::RateSource;
use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::OnceCell;

#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, SplitroomError>;
}

#[async_trait]
impl CurrencyConverter for RateTable {
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, SplitroomError> {
        self.convert_amount(amount, from, to)
    }
}

/// Converter scoped to one settlement run.
///
/// The rate table is fetched on the first conversion that actually needs it and
/// every later conversion of the run reads that same snapshot. Same-currency
/// conversions never trigger a fetch. Drop the converter when the run ends;
/// it is never shared between runs.
pub struct RunConverter<'a, R: RateSource + ?Sized> {
    source: &'a R,
    snapshot: OnceCell<RateTable>,
}

impl<'a, R: RateSource + ?Sized> RunConverter<'a, R> {
    pub fn new(source: &'a R) -> Self {
        RunConverter {
            source,
            snapshot: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.initialized()
    }

    async fn rates(&self) -> Result<&RateTable, SplitroomError> {
        self.snapshot
            .get_or_try_init(|| async {
                info!("Fetching exchange rates for settlement run");
                let table = self.source.fetch_rates().await?;
                debug!("Loaded {} rates against {}", table.rates.len(), table.pivot);
                Ok::<RateTable, SplitroomError>(table)
            })
            .await
    }
}

#[async_trait]
impl<'a, R: RateSource + ?Sized> CurrencyConverter for RunConverter<'a, R> {
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, SplitroomError> {
        if from == to {
            return Ok(amount);
        }
        self.rates().await?.convert_amount(amount, from, to)
    }
}
