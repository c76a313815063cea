// src/lib.rs
//! sealkit — NaCl-compatible authenticated encryption with typed keys
//!
//! Features:
//! - `box` sealing: X25519 + XSalsa20-Poly1305, sender-authenticated
//! - `secretbox` encryption: XSalsa20-Poly1305 under a shared key
//! - Wire format `nonce (24) || ciphertext || tag (16)`, fresh nonce per call
//! - Base64 key codec and distinct public/private/shared key types
//!
//! ```
//! use sealkit::{generate_key_pair, open, seal};
//!
//! let alice = generate_key_pair();
//! let bob = generate_key_pair();
//!
//! let sealed = seal(b"hello", &bob.public, &alice.private).unwrap();
//! let opened = open(&sealed, &alice.public, &bob.private).unwrap();
//! assert_eq!(opened, b"hello");
//! ```

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod key_ops;
pub mod keys;

// Re-export everything users need at the crate root
pub use aliases::SecretText;
pub use config::{load as load_config, Config};
pub use crypto::{decrypt, encrypt, generate_key_pair, generate_shared_key, open, seal};
pub use error::{ConfigError, CryptoError, Operation, Result};
pub use key_ops::{decode_key, encode_key};
pub use keys::{KeyMaterial, KeyPair, Nonce, PrivateKey, PublicKey, SharedKey};
