//! # Configuration DTOs
//!
//! Data structures mapped from the TOML configuration file. Loading the file
//! and resolving platform paths happens in the bootstrap layer.

pub mod review_config;

pub use review_config::{ConfigError, ReviewConfig};
