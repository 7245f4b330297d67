pub mod logging;
pub mod rates;
pub mod storage;
