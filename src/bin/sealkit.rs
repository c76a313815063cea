// src/bin/sealkit.rs
//! sealkit CLI — key generation plus stdin → stdout seal/open/encrypt/decrypt
//!
//! Named keys come from the config file (`SEALKIT_CONFIG`, default `sealkit.toml`).

use std::io::{Read, Write};

use anyhow::{bail, Context, Result};
use sealkit::{
    decrypt, encrypt, generate_key_pair, generate_shared_key, load_config, open, seal,
};
use tracing::info;

const USAGE: &str =
    "usage: sealkit <keypair | secret | encrypt <key> | decrypt <key> | seal <peer> | open <peer>>";

fn read_stdin() -> Result<Vec<u8>> {
    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(bytes)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, name) = match args.as_slice() {
        [command] => (command.as_str(), None),
        [command, name] => (command.as_str(), Some(name.as_str())),
        _ => bail!(USAGE),
    };

    match (command, name) {
        ("keypair", None) => {
            let pair = generate_key_pair();
            println!("public_key = \"{}\"", pair.public.to_base64());
            println!("private_key = \"{}\"", pair.private.to_base64());
        }
        ("secret", None) => {
            println!("{}", generate_shared_key().to_base64());
        }
        ("encrypt", Some(name)) => {
            let key = load_config()?.shared_key(name)?;
            let plaintext = read_stdin()?;
            write_stdout(&encrypt(&plaintext, &key)?)?;
            info!(bytes = plaintext.len(), key = name, "encrypted");
        }
        ("decrypt", Some(name)) => {
            let key = load_config()?.shared_key(name)?;
            let plaintext = decrypt(&read_stdin()?, &key)
                .with_context(|| format!("Could not decrypt with key '{name}'"))?;
            write_stdout(&plaintext)?;
            info!(bytes = plaintext.len(), key = name, "decrypted");
        }
        ("seal", Some(peer)) => {
            let config = load_config()?;
            let recipient = config.peer(peer)?;
            let sender = config.private_key()?;
            let plaintext = read_stdin()?;
            write_stdout(&seal(&plaintext, &recipient, &sender)?)?;
            info!(bytes = plaintext.len(), peer, "sealed");
        }
        ("open", Some(peer)) => {
            let config = load_config()?;
            let sender = config.peer(peer)?;
            let recipient = config.private_key()?;
            let plaintext = open(&read_stdin()?, &sender, &recipient)
                .with_context(|| format!("Could not open message from '{peer}'"))?;
            write_stdout(&plaintext)?;
            info!(bytes = plaintext.len(), peer, "opened");
        }
        _ => bail!(USAGE),
    }

    Ok(())
}
