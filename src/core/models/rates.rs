use crate::core::errors::SplitroomError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exchange rates quoted against a single pivot currency: `rates[c]` is the
/// number of `c` units one pivot unit buys.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateTable {
    pub pivot: String,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(pivot: &str, rates: HashMap<String, f64>) -> Self {
        RateTable {
            pivot: pivot.to_string(),
            rates,
        }
    }

    /// Cross rate `from -> to`, hopping through the pivot when neither side is it.
    pub fn rate(&self, from: &str, to: &str) -> Result<f64, SplitroomError> {
        if from == to {
            return Ok(1.0);
        }
        if from == self.pivot {
            return self.pivot_rate(to);
        }
        if to == self.pivot {
            return Ok(1.0 / self.pivot_rate(from)?);
        }
        Ok(self.rate(from, &self.pivot)? * self.rate(&self.pivot, to)?)
    }

    pub fn convert_amount(&self, amount: f64, from: &str, to: &str) -> Result<f64, SplitroomError> {
        Ok(amount * self.rate(from, to)?)
    }

    fn pivot_rate(&self, currency: &str) -> Result<f64, SplitroomError> {
        match self.rates.get(currency) {
            Some(rate) if rate.is_finite() && *rate > 0.0 => Ok(*rate),
            _ => Err(SplitroomError::UnknownCurrency(currency.to_string())),
        }
    }
}
