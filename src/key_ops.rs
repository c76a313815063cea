// src/key_ops.rs
//! Key text encoding
//!
//! Keys travel as standard (RFC 4648, padded) base64 of exactly 32 raw bytes.
//! Decoding validates the length and nothing else; key content is opaque.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::consts::KEY_SIZE;
use crate::error::{CryptoError, Result};
use crate::keys::KeyMaterial;

/// Copy a slice into a key-sized array, rejecting any other length
pub(crate) fn key_array(bytes: &[u8]) -> Result<[u8; KEY_SIZE]> {
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })
}

/// Decode a base64 key into any of the typed keys.
///
/// ```
/// use sealkit::{decode_key, SharedKey};
///
/// let key: SharedKey = decode_key("QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=").unwrap();
/// assert_eq!(key.as_bytes(), &[0x42; 32]);
/// ```
pub fn decode_key<K: KeyMaterial>(text: &str) -> Result<K> {
    let decoded = Zeroizing::new(STANDARD.decode(text)?);
    let bytes = key_array(&decoded).inspect_err(|_err| {
        #[cfg(feature = "logging")]
        tracing::debug!(kind = K::KIND, error = %_err, "rejected decoded key");
    })?;
    Ok(K::from_key_bytes(bytes))
}

/// Encode any typed key as standard padded base64
pub fn encode_key<K: KeyMaterial>(key: &K) -> String {
    STANDARD.encode(key.key_bytes())
}
