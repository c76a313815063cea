// src/keys.rs
//! Typed key and nonce values
//!
//! Public, private and shared keys are all 32 bytes on the wire but are
//! distinct types here, so a public key can never be passed where a private
//! key (or a shared key, or a nonce) is expected. Secret halves live in a
//! heap `SecretBox` that is zeroized on drop.

use std::fmt;

use rand::RngCore;
use secrecy::{ExposeSecret, SecretBox};

use crate::aliases::{random_secret32, SecretBytes32};
use crate::consts::{KEY_SIZE, NONCE_SIZE};
use crate::error::{CryptoError, Result};
use crate::key_ops;

/// Common surface of the three key types, used by the base64 codec
pub trait KeyMaterial: Sized {
    /// Short name used in diagnostics and config errors
    const KIND: &'static str;

    fn from_key_bytes(bytes: [u8; KEY_SIZE]) -> Self;

    fn key_bytes(&self) -> &[u8; KEY_SIZE];
}

/// Curve25519 public key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; KEY_SIZE]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_base64()).finish()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

/// Curve25519 private key
pub struct PrivateKey(SecretBytes32);

impl PrivateKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(SecretBox::new(Box::new(bytes)))
    }

    pub(crate) fn random() -> Self {
        Self(random_secret32())
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        self.0.expose_secret()
    }

    /// Recompute the matching public key (X25519 base-point multiplication)
    pub fn public_key(&self) -> PublicKey {
        let secret = crypto_box::SecretKey::from(*self.as_bytes());
        PublicKey(*secret.public_key().as_bytes())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Symmetric key shared by both parties
pub struct SharedKey(SecretBytes32);

impl SharedKey {
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(SecretBox::new(Box::new(bytes)))
    }

    pub(crate) fn random() -> Self {
        Self(random_secret32())
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        self.0.expose_secret()
    }
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey([REDACTED])")
    }
}

macro_rules! key_material {
    ($ty:ident, $kind:literal) => {
        impl KeyMaterial for $ty {
            const KIND: &'static str = $kind;

            fn from_key_bytes(bytes: [u8; KEY_SIZE]) -> Self {
                Self::from_bytes(bytes)
            }

            fn key_bytes(&self) -> &[u8; KEY_SIZE] {
                self.as_bytes()
            }
        }

        impl $ty {
            /// Decode from standard padded base64
            pub fn from_base64(text: &str) -> Result<Self> {
                key_ops::decode_key(text)
            }

            /// Encode as standard padded base64
            pub fn to_base64(&self) -> String {
                key_ops::encode_key(self)
            }
        }

        impl TryFrom<&[u8]> for $ty {
            type Error = CryptoError;

            fn try_from(bytes: &[u8]) -> Result<Self> {
                key_ops::key_array(bytes).map(Self::from_bytes)
            }
        }
    };
}

key_material!(PublicKey, "public key");
key_material!(PrivateKey, "private key");
key_material!(SharedKey, "shared key");

/// A public/private pair produced together by generation.
///
/// Nothing ties the two halves together beyond this struct; callers own the
/// pairing.
#[derive(Debug)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl KeyPair {
    /// Rebuild a pair from a stored private key
    pub fn from_private(private: PrivateKey) -> Self {
        Self {
            public: private.public_key(),
            private,
        }
    }
}

/// 24-byte XSalsa20 nonce, always generated internally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    pub(crate) fn random() -> Self {
        let mut bytes = [0u8; NONCE_SIZE];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Read the nonce prefix of a sealed or encrypted message
    pub fn from_message(message: &[u8]) -> Result<Self> {
        match message.get(..NONCE_SIZE) {
            Some(prefix) => {
                let mut bytes = [0u8; NONCE_SIZE];
                bytes.copy_from_slice(prefix);
                Ok(Self(bytes))
            }
            None => Err(CryptoError::TruncatedMessage {
                minimum: NONCE_SIZE,
                actual: message.len(),
            }),
        }
    }

    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}
