pub mod aggregator;
pub mod currency;
pub mod errors;
pub mod models;
pub mod planner;
pub mod services;
