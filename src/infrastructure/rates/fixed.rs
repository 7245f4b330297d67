use crate::core::errors::SplitroomError;
use crate::core::models::rates::RateTable;
use crate::infrastructure::rates::RateSource;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves a fixed rate table. Counts fetches so callers can check how often
/// a run went to the source.
pub struct StaticRateSource {
    table: Option<RateTable>,
    fetches: AtomicUsize,
}

impl StaticRateSource {
    pub fn new(table: RateTable) -> Self {
        StaticRateSource {
            table: Some(table),
            fetches: AtomicUsize::new(0),
        }
    }

    /// A source whose every fetch fails, standing in for an unreachable provider.
    pub fn unavailable() -> Self {
        StaticRateSource {
            table: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateSource for StaticRateSource {
    async fn fetch_rates(&self) -> Result<RateTable, SplitroomError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.table
            .clone()
            .ok_or_else(|| SplitroomError::RateFetch("No rate table configured".to_string()))
    }
}
