//! S-AES key schedule and block encryption/decryption.

use crate::block::{Column, State};
use crate::field::Nibble;
use crate::key::{RoundKeys, SaesKey};

/// Round constants for rounds 1 and 2, as key-schedule columns.
const RCON: [Column; 2] = [
    Column::new(Nibble::new(0b1000), Nibble::new(0b0000)),
    Column::new(Nibble::new(0b0011), Nibble::new(0b0000)),
];

/// Expands a 16-bit key into the three round keys.
///
/// Round 0 is the key itself. For each later round, the previous right
/// column is substituted, rotated, and folded with the round constant into
/// the previous left column; the new right column chains off the new left.
pub fn expand_key(key: &SaesKey) -> RoundKeys {
    let mut keys = [key.0; 3];
    for round in 1..3 {
        let prev = keys[round - 1];
        let g = prev.right.substitute().rotate().xor(RCON[round - 1]);
        let left = g.xor(prev.left);
        let right = left.xor(prev.right);
        keys[round] = State::new(left, right);
    }
    RoundKeys(keys)
}

/// Encrypts a single 16-bit block with pre-expanded round keys.
///
/// Two full rounds after the initial key mixing; the final round omits
/// MixColumns, as in full AES.
pub fn encrypt_block(block: &State, round_keys: &RoundKeys) -> State {
    let state = block.xor(*round_keys.get(0));
    let state = state.substitute().shift_rows().mix().xor(*round_keys.get(1));
    state.substitute().shift_rows().xor(*round_keys.get(2))
}

/// Decrypts a single 16-bit block with pre-expanded round keys, applying
/// the inverse transforms in reverse order.
pub fn decrypt_block(block: &State, round_keys: &RoundKeys) -> State {
    let state = block.xor(*round_keys.get(2)).shift_rows().unsubstitute();
    let state = state.xor(*round_keys.get(1)).unmix().shift_rows().unsubstitute();
    state.xor(*round_keys.get(0))
}
