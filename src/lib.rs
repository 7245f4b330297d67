pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::SplitroomError;
pub use crate::core::services::SplitroomService;

#[cfg(test)]
mod tests;
