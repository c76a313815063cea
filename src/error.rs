// src/error.rs
//! Public error types for the entire crate

use std::fmt;

use thiserror::Error;

/// Which cipher operation produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Seal,
    Open,
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Seal => "seal",
            Operation::Open => "open",
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid crypto key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The tag did not verify. Tampering and wrong keys are reported identically.
    #[error("unable to {0} bytes: authentication failed")]
    AuthenticationFailure(Operation),

    #[error("invalid base64 key encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("message too short: need at least {minimum} bytes, got {actual}")]
    TruncatedMessage { minimum: usize, actual: usize },

    #[error("unable to {0} bytes: cipher rejected the input")]
    EncryptionFailed(Operation),
}

impl CryptoError {
    /// Category shared by every code below
    pub const CATEGORY: &'static str = "crypto";

    /// Stable numeric code, compatible with the legacy error registry
    pub fn code(&self) -> u32 {
        match self {
            CryptoError::InvalidKeyLength { .. } => 100,
            CryptoError::AuthenticationFailure(Operation::Decrypt) => 102,
            CryptoError::AuthenticationFailure(_) => 101,
            CryptoError::InvalidEncoding(_) => 103,
            CryptoError::TruncatedMessage { .. } => 104,
            CryptoError::EncryptionFailed(_) => 105,
        }
    }
}

/// Errors raised while loading or querying the key configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("no {kind} named '{name}' in config")]
    UnknownKey { kind: &'static str, name: String },

    #[error("config has no [identity] section")]
    MissingIdentity,

    #[error("bad key in config: {0}")]
    Key(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
