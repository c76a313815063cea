// src/config/defaults.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::app::Config;
use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};

pub fn default_config() -> Config {
    Config {
        identity: None,
        peers: BTreeMap::new(),
        keys: BTreeMap::new(),
    }
}

pub fn default_config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
