//! Encrypts the textbook plaintext/key pair and prints each stage.

use saes_core::{decrypt_block, encrypt_block, expand_key, SaesKey, State};

fn main() {
    // "IB" as ASCII nibbles, keyed with "hl".
    let plaintext = State::from_word(0x4942);
    let key = SaesKey::from(0x686c);

    let round_keys = expand_key(&key);
    let ciphertext = encrypt_block(&plaintext, &round_keys);
    let decrypted = decrypt_block(&ciphertext, &round_keys);

    println!("plaintext:  {}", plaintext);
    println!("ciphertext: {}", ciphertext);
    println!("decrypted:  {}", decrypted);
    assert_eq!(decrypted, plaintext);
}
