//! Simplified AES (S-AES): a 16-bit-block pedagogical cipher over GF(2^4).
//!
//! This crate implements the full AES-style round structure (SubNibbles,
//! ShiftRows, MixColumns, AddRoundKey, and the key schedule) at a scale
//! small enough to trace by hand:
//! - GF(2^4) arithmetic (reducing polynomial x^4 + x + 1) on [`Nibble`].
//! - The S-box, both as lookup tables and derived from field inversion
//!   plus an affine transform.
//! - A 2x2-nibble block state with a 2-round encrypt/decrypt pipeline.
//!
//! Every operation is total: out-of-range inputs are masked to width and
//! `invert(0) == 0` by convention, so there are no error paths anywhere in
//! the engine. This is teaching material, not production cryptography.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod field;
mod key;
mod sbox;

pub use crate::block::{Column, State};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::field::Nibble;
pub use crate::key::{RoundKeys, SaesKey};
pub use crate::sbox::{
    substitute, substitute_derived, unsubstitute, unsubstitute_derived, INV_SBOX, SBOX,
};
