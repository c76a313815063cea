// src/crypto/asymmetric.rs
//! Public-key authenticated encryption (NaCl `box`)
//!
//! X25519 key agreement between the sender's private key and the recipient's
//! public key, then XSalsa20-Poly1305 under the derived key. Output is
//! byte-compatible with NaCl/libsodium `crypto_box` prefixed by its nonce.

use crypto_box::aead::generic_array::GenericArray;
use crypto_box::aead::Aead;
use crypto_box::SalsaBox;

use super::envelope;
use crate::error::{CryptoError, Operation, Result};
use crate::keys::{KeyPair, Nonce, PrivateKey, PublicKey};

/// Key agreement between one party's public key and the other's private key
fn salsa_box(public: &PublicKey, private: &PrivateKey) -> SalsaBox {
    let public = crypto_box::PublicKey::from(*public.as_bytes());
    let secret = crypto_box::SecretKey::from(*private.as_bytes());
    SalsaBox::new(&public, &secret)
}

/// Generate a fresh key pair from the OS-seeded CSPRNG
pub fn generate_key_pair() -> KeyPair {
    KeyPair::from_private(PrivateKey::random())
}

/// Seal `plaintext` for `recipient`, authenticated as coming from `sender`.
///
/// A fresh random nonce is generated for every call and returned as the
/// first 24 bytes of the output.
pub fn seal(plaintext: &[u8], recipient: &PublicKey, sender: &PrivateKey) -> Result<Vec<u8>> {
    let nonce = Nonce::random();
    let ciphertext = salsa_box(recipient, sender)
        .encrypt(GenericArray::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|_| CryptoError::EncryptionFailed(Operation::Seal))?;
    Ok(envelope::assemble(&nonce, &ciphertext))
}

/// Open a message produced by [`seal`].
///
/// Fails with [`CryptoError::AuthenticationFailure`] when the tag does not
/// verify, whether the bytes were tampered with or any key is wrong. No
/// plaintext is returned on failure.
pub fn open(sealed: &[u8], sender: &PublicKey, recipient: &PrivateKey) -> Result<Vec<u8>> {
    let (nonce, ciphertext) = envelope::split(sealed, Operation::Open)?;
    salsa_box(sender, recipient)
        .decrypt(GenericArray::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| {
            #[cfg(feature = "logging")]
            tracing::debug!(len = sealed.len(), "sealed bytes failed authentication");
            CryptoError::AuthenticationFailure(Operation::Open)
        })
}
