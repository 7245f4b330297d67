use crate::constants::constants::{DEFAULT_CURRENCY, DEFAULT_PIVOT_CURRENCY, DEFAULT_RATES_URL, DEFAULT_ROUNDING};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub rates_url: String,
    pub rates_access_key: String,
    pub pivot_currency: String,
    pub default_currency: String,
    pub default_rounding: f64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("rates_url", &self.rates_url)
            .field("rates_access_key", &"<redacted>")
            .field("pivot_currency", &self.pivot_currency)
            .field("default_currency", &self.default_currency)
            .field("default_rounding", &self.default_rounding)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rates_url: env::var("RATES_URL").unwrap_or_else(|_| DEFAULT_RATES_URL.to_string()),
            rates_access_key: env::var("RATES_ACCESS_KEY").unwrap_or_default(),
            pivot_currency: env::var("PIVOT_CURRENCY").unwrap_or_else(|_| DEFAULT_PIVOT_CURRENCY.to_string()),
            default_currency: env::var("DEFAULT_CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
            default_rounding: env::var("DEFAULT_ROUNDING")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|r: &f64| r.is_finite() && *r > 0.0)
                .unwrap_or(DEFAULT_ROUNDING),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
