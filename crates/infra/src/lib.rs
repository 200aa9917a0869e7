//! Infrastructure layer: the in-memory entity store, its sample seed and
//! process configuration.

pub mod config;
pub mod seed;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use store::{EntityStore, StoreSnapshot};
