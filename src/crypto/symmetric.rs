// src/crypto/symmetric.rs
//! Shared-key authenticated encryption (NaCl `secretbox`, XSalsa20-Poly1305)

use crypto_secretbox::aead::generic_array::GenericArray;
use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;

use super::envelope;
use crate::error::{CryptoError, Operation, Result};
use crate::keys::{Nonce, SharedKey};

fn cipher(key: &SharedKey) -> XSalsa20Poly1305 {
    XSalsa20Poly1305::new(GenericArray::from_slice(key.as_bytes()))
}

/// Generate a random shared key
pub fn generate_shared_key() -> SharedKey {
    SharedKey::random()
}

/// Encrypt `plaintext` under `key` → `nonce || ciphertext || tag`
pub fn encrypt(plaintext: &[u8], key: &SharedKey) -> Result<Vec<u8>> {
    let nonce = Nonce::random();
    let ciphertext = cipher(key)
        .encrypt(GenericArray::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed(Operation::Encrypt))?;
    Ok(envelope::assemble(&nonce, &ciphertext))
}

/// Decrypt a message produced by [`encrypt`] under the same key
pub fn decrypt(encrypted: &[u8], key: &SharedKey) -> Result<Vec<u8>> {
    let (nonce, ciphertext) = envelope::split(encrypted, Operation::Decrypt)?;
    cipher(key)
        .decrypt(GenericArray::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| {
            #[cfg(feature = "logging")]
            tracing::debug!(len = encrypted.len(), "encrypted bytes failed authentication");
            CryptoError::AuthenticationFailure(Operation::Decrypt)
        })
}
