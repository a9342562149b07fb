pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod query;
pub mod rate_limit;
pub mod service;
pub mod store;
pub mod validate;

pub use error::RosterError;
pub use service::RosterService;
pub use store::in_memory::InMemoryStore;

#[cfg(test)]
mod tests;
