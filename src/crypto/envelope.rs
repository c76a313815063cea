// src/crypto/envelope.rs
//! Wire framing shared by both ciphers: `nonce (24) || ciphertext || tag (16)`

use crate::consts::NONCE_SIZE;
use crate::error::{Operation, Result};
use crate::keys::Nonce;

/// Prefix the ciphertext with the cleartext nonce
pub(crate) fn assemble(nonce: &Nonce, ciphertext: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    message.extend_from_slice(nonce.as_bytes());
    message.extend_from_slice(ciphertext);
    message
}

/// Split a message into its nonce and ciphertext, rejecting anything shorter
/// than a nonce before any slicing happens
pub(crate) fn split(message: &[u8], _operation: Operation) -> Result<(Nonce, &[u8])> {
    let nonce = Nonce::from_message(message).inspect_err(|_err| {
        #[cfg(feature = "logging")]
        tracing::debug!(operation = %_operation, error = %_err, "rejected truncated message");
    })?;
    let (_, ciphertext) = message.split_at(NONCE_SIZE);
    Ok((nonce, ciphertext))
}
