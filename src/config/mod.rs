pub mod config;

pub use self::config::{CONFIG, Config};
