//! Otawatch app: configuration and process wiring for one run.
pub mod config;

pub use config::Config;
