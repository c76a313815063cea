// src/config/app.rs
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use super::defaults::{default_config, default_config_path};
use crate::aliases::SecretText;
use crate::error::ConfigError;
use crate::key_ops::decode_key;
use crate::keys::{KeyMaterial, KeyPair, PrivateKey, PublicKey, SharedKey};

/// Key material as written in the TOML file. Every value is base64 text and
/// is only decoded when asked for. Secret values stay redacted under `Debug`
/// and are zeroized when the config is dropped.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub identity: Option<Identity>,
    /// Public keys of other parties, by name
    #[serde(default)]
    pub peers: BTreeMap<String, String>,
    /// Shared secret keys, by name
    #[serde(default)]
    pub keys: BTreeMap<String, SecretText>,
}

/// This party's own key pair
#[derive(Debug, Deserialize)]
pub struct Identity {
    pub public_key: String,
    pub private_key: SecretText,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Decode the `[identity]` pair
    pub fn identity(&self) -> Result<KeyPair, ConfigError> {
        let identity = self.identity.as_ref().ok_or(ConfigError::MissingIdentity)?;
        Ok(KeyPair {
            public: decode_key(&identity.public_key)?,
            private: decode_key(identity.private_key.expose_secret())?,
        })
    }

    /// Decode the public key of a named peer
    pub fn peer(&self, name: &str) -> Result<PublicKey, ConfigError> {
        lookup(self.peers.get(name).map(String::as_str), name)
    }

    /// Decode a named shared key
    pub fn shared_key(&self, name: &str) -> Result<SharedKey, ConfigError> {
        lookup(self.keys.get(name).map(SecretText::expose_secret), name)
    }

    /// Decode this party's private key only
    pub fn private_key(&self) -> Result<PrivateKey, ConfigError> {
        let identity = self.identity.as_ref().ok_or(ConfigError::MissingIdentity)?;
        Ok(decode_key(identity.private_key.expose_secret())?)
    }
}

fn lookup<K: KeyMaterial>(text: Option<&str>, name: &str) -> Result<K, ConfigError> {
    let text = text.ok_or_else(|| ConfigError::UnknownKey {
        kind: K::KIND,
        name: name.to_owned(),
    })?;
    Ok(decode_key(text)?)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Path the global config is read from
pub fn config_path() -> PathBuf {
    default_config_path()
}

/// Load the global config once; later calls return the same instance.
///
/// A missing file falls back to the empty built-in config. A file that
/// exists but cannot be read or parsed is an error.
pub fn load() -> Result<&'static Config, ConfigError> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let path = config_path();
    let conf = if path.exists() {
        Config::from_path(&path)?
    } else {
        #[cfg(feature = "logging")]
        tracing::warn!(path = %path.display(), "config file not found, using built-in defaults");
        default_config()
    };

    Ok(CONFIG.get_or_init(|| conf))
}
