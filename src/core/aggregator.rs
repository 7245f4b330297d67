use crate::core::currency::CurrencyConverter;
use crate::core::errors::SplitroomError;
use crate::core::models::{balance::NetBalance, payment::PaymentRecord};
use futures::future::try_join_all;
use log::{debug, warn};

pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Folds a ledger snapshot into one balance per member, in `target` currency.
    ///
    /// `records` must hold each member's rows contiguously; the output follows the
    /// order in which member groups first appear. A failed conversion aborts the
    /// whole aggregation and no balance is returned.
    pub async fn aggregate<C: CurrencyConverter + ?Sized>(
        records: &[PaymentRecord],
        target: &str,
        converter: &C,
    ) -> Result<Vec<NetBalance>, SplitroomError> {
        if records.is_empty() {
            debug!("No payment records to aggregate");
            return Ok(Vec::new());
        }

        let converted = try_join_all(
            records
                .iter()
                .map(|record| converter.convert(record.amount, &record.currency, target)),
        )
        .await
        .inspect_err(|e| warn!("Aggregation into {} aborted: {}", target, e))?;

        let mut balances: Vec<NetBalance> = Vec::new();
        for (record, amount) in records.iter().zip(converted) {
            match balances.last_mut() {
                Some(current) if current.member_id == record.member_id => current.amount += amount,
                _ => balances.push(NetBalance::new(&record.member_id, amount)),
            }
        }

        debug!(
            "Aggregated {} records into {} balances ({})",
            records.len(),
            balances.len(),
            target
        );
        Ok(balances)
    }
}
