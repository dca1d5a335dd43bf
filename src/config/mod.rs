//! Configuration module
//!
//! Plugin settings loaded from `config.toml`.

pub mod config;

pub use config::Config;
