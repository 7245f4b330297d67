pub mod fixer;
pub mod fixed;

use crate::core::errors::SplitroomError;
use crate::core::models::rates::RateTable;
use async_trait::async_trait;

#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self) -> Result<RateTable, SplitroomError>;
}
