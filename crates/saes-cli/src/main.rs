//! Command-line interface for the S-AES teaching cipher.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use saes_core::{decrypt_block, encrypt_block, expand_key, SaesKey, State};

/// Simplified AES CLI.
#[derive(Parser)]
#[command(
    name = "saes",
    version,
    author,
    about = "Simplified AES (S-AES) over GF(2^4): encrypt, decrypt, and trace 16-bit blocks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-bit block.
    Enc {
        /// Key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-bit block.
    Dec {
        /// Key as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 4 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Run the textbook demo pair ("IB" under key "hl") and verify the round trip.
    Demo,
    /// Verify encrypt/decrypt round trips for random blocks and keys.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Demo => cmd_demo(),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = SaesKey::from(parse_word_hex(key_hex).context("parse key")?);
    let block = State::from_word(parse_word_hex(block_hex).context("parse block")?);
    let round_keys = expand_key(&key);
    let ciphertext = encrypt_block(&block, &round_keys);
    println!("ciphertext: {} ({:04x})", ciphertext, ciphertext.to_word());
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = SaesKey::from(parse_word_hex(key_hex).context("parse key")?);
    let block = State::from_word(parse_word_hex(block_hex).context("parse block")?);
    let round_keys = expand_key(&key);
    let plaintext = decrypt_block(&block, &round_keys);
    println!("plaintext: {} ({:04x})", plaintext, plaintext.to_word());
    Ok(())
}

fn cmd_demo() -> Result<()> {
    // "IB" as ASCII nibbles, keyed with "hl".
    let plaintext = State::from_word(0x4942);
    let key = SaesKey::from(0x686c);

    let round_keys = expand_key(&key);
    let ciphertext = encrypt_block(&plaintext, &round_keys);
    let decrypted = decrypt_block(&ciphertext, &round_keys);

    for round in 0..3 {
        println!("round key {}: {}", round, round_keys.get(round));
    }
    println!("plaintext:  {}", plaintext);
    println!("ciphertext: {}", ciphertext);
    println!("decrypted:  {}", decrypted);
    if decrypted != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let block = State::from_word(rng.gen());
        let key = SaesKey::from(rng.gen::<u16>());
        let round_keys = expand_key(&key);
        let ciphertext = encrypt_block(&block, &round_keys);
        let decrypted = decrypt_block(&ciphertext, &round_keys);
        if decrypted != block {
            bail!(
                "roundtrip mismatch for block {:04x} under key {:04x}",
                block.to_word(),
                key.0.to_word()
            );
        }
    }
    println!("{} random roundtrips verified", samples);
    Ok(())
}

fn parse_word_hex(hex_str: &str) -> Result<u16> {
    let bytes = hex::decode(hex_str.trim()).context("decode hex")?;
    if bytes.len() != 2 {
        bail!("S-AES blocks and keys are 16 bits (4 hex characters)");
    }
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
