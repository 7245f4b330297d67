pub const DEBTS_REFRESHED: &str = "DEBTS_REFRESHED";
pub const ROUNDING_CHANGED: &str = "ROUNDING_CHANGED";

pub const DEFAULT_ROUNDING: f64 = 1.0;
pub const DEFAULT_CURRENCY: &str = "HUF";
pub const DEFAULT_PIVOT_CURRENCY: &str = "EUR";
pub const DEFAULT_RATES_URL: &str = "http://data.fixer.io/api/latest";
