// src/consts.rs
//! Shared constants — sizes fixed by the NaCl box/secretbox wire format

/// Length of every key (public, private, shared) in bytes
pub const KEY_SIZE: usize = 32;

/// Length of the random nonce that prefixes every sealed/encrypted message
pub const NONCE_SIZE: usize = 24;

/// Poly1305 authentication tag appended to the ciphertext
pub const TAG_SIZE: usize = 16;

/// Smallest well-formed message: nonce + tag, empty plaintext
pub const MIN_MESSAGE_SIZE: usize = NONCE_SIZE + TAG_SIZE;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "SEALKIT_CONFIG";

/// Config file used when `SEALKIT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "sealkit.toml";
