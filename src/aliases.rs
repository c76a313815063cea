// src/aliases.rs
//! Secret containers backing the key types and the key config
//!
//! Everything here is zeroized on drop and prints `[REDACTED]` under `Debug`.
//! `PrivateKey` and `SharedKey` both wrap `SecretBytes32` in distinct
//! newtypes so the two can never be swapped.

use rand::RngCore;
use secrecy::{ExposeSecret, SecretBox, SecretString};
use serde::{Deserialize, Deserializer};

use crate::consts::KEY_SIZE;

/// 32 secret key bytes on the heap
pub type SecretBytes32 = SecretBox<[u8; KEY_SIZE]>;

/// Fill a fresh secret directly from the thread-local CSPRNG (seeded by the
/// OS), so the bytes never exist outside the zeroizing box.
///
/// An unavailable entropy source panics inside `rand`; there is nothing a
/// caller could do to recover from it.
pub(crate) fn random_secret32() -> SecretBytes32 {
    SecretBox::init_with_mut(|bytes: &mut [u8; KEY_SIZE]| rand::rng().fill_bytes(bytes))
}

/// Secret text (base64 private or shared key) as read from config
#[derive(Debug)]
pub struct SecretText(SecretString);

impl SecretText {
    pub fn new(text: String) -> Self {
        Self(SecretBox::new(text.into_boxed_str()))
    }

    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<'de> Deserialize<'de> for SecretText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}
