// src/config/mod.rs
//! Key configuration for sealkit
//!
//! Lazy-loaded global config: TOML file named by `SEALKIT_CONFIG`
//! (default `sealkit.toml`), built-in empty defaults when missing.

pub use app::{config_path, load, Config, Identity};

mod app;
mod defaults;
