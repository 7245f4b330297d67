pub mod audit;
pub mod balance;
pub mod debt;
pub mod payment;
pub mod rates;
pub mod room;
