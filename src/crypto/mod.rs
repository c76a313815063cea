// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no global state
//!
//! Every function works on in-memory buffers and generates its own nonce.
pub mod asymmetric;
mod envelope;
pub mod symmetric;

pub use asymmetric::{generate_key_pair, open, seal};
pub use symmetric::{decrypt, encrypt, generate_shared_key};
