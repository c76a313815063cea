// tests/common.rs
//! Shared helpers for the sealkit integration tests

#![allow(dead_code)] // each test binary uses a different subset

use std::path::{Path, PathBuf};

/// Install a tracing subscriber that writes through the test harness.
///
/// Only active with the `logging` feature; honours `RUST_LOG`.
pub fn setup() {
    #[cfg(feature = "logging")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        });
    }
}

/// Every copy of `message` with exactly one bit flipped, tagged `(byte, bit)`
pub fn single_bit_flips(message: &[u8]) -> impl Iterator<Item = ((usize, u8), Vec<u8>)> + '_ {
    (0..message.len()).flat_map(move |byte| {
        (0..8u8).map(move |bit| {
            let mut flipped = message.to_vec();
            flipped[byte] ^= 1 << bit;
            ((byte, bit), flipped)
        })
    })
}

/// Write a `sealkit.toml` into `dir` and return its path
pub fn write_config(dir: &Path, toml: &str) -> PathBuf {
    let path = dir.join("sealkit.toml");
    std::fs::write(&path, toml).expect("write config");
    path
}
