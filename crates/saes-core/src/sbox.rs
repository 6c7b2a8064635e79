//! S-box tables and their affine derivation.
//!
//! The substitution is `a -> M * invert(a) ^ 0b1001` for a fixed 4x4 bit
//! matrix `M` over GF(2). The precomputed tables are the normative fast
//! path; the matrix derivation is kept alongside them and checked against
//! the tables for all 16 inputs so neither form can drift.

use crate::field::Nibble;

/// Forward substitution table over inputs 0..=15.
pub const SBOX: [u8; 16] = [9, 4, 10, 11, 13, 1, 8, 5, 6, 2, 0, 3, 12, 14, 15, 7];

/// Inverse substitution table over inputs 0..=15.
pub const INV_SBOX: [u8; 16] = [10, 5, 9, 11, 1, 7, 8, 15, 6, 0, 2, 3, 12, 4, 13, 14];

/// Affine constant XORed after the forward bit-mixing matrix.
const AFFINE_CONST: Nibble = Nibble::new(0b1001);

/// Bit-mixing matrix of the forward S-box.
const AFFINE_FWD: Matrix4 = Matrix4::new([0b0111, 0b1110, 0b1101, 0b1011]);

/// Inverse of [`AFFINE_FWD`].
const AFFINE_INV: Matrix4 = Matrix4::new([0b1101, 0b1011, 0b0111, 0b1110]);

/// Applies the S-box.
#[inline]
pub fn substitute(n: Nibble) -> Nibble {
    Nibble::new(SBOX[n.value() as usize])
}

/// Applies the inverse S-box.
#[inline]
pub fn unsubstitute(n: Nibble) -> Nibble {
    Nibble::new(INV_SBOX[n.value() as usize])
}

/// Computes the S-box from first principles: field inversion followed by
/// the affine transform. Equal to [`substitute`] for every input.
pub fn substitute_derived(n: Nibble) -> Nibble {
    AFFINE_FWD.apply(n.invert()).xor(AFFINE_CONST)
}

/// Computes the inverse S-box from first principles: undo the affine
/// transform, then invert in the field.
pub fn unsubstitute_derived(n: Nibble) -> Nibble {
    AFFINE_INV.apply(n.xor(AFFINE_CONST)).invert()
}

/// 4x4 binary matrix over GF(2), stored row-major with each row packed
/// into the low 4 bits of a `u8` (little-endian bit order within a row).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Matrix4 {
    rows: [u8; 4],
}

impl Matrix4 {
    const fn new(rows: [u8; 4]) -> Self {
        Self { rows }
    }

    /// Applies the matrix to a nibble, treating its bits as a column vector:
    /// output bit `i` is the parity of `rows[i] & value`.
    fn apply(&self, value: Nibble) -> Nibble {
        let mut out = 0u8;
        for (row_idx, row) in self.rows.iter().enumerate() {
            let parity = (row & value.value()).count_ones() as u8 & 1;
            out |= parity << row_idx;
        }
        Nibble::new(out)
    }

    #[cfg(test)]
    fn mul(&self, rhs: &Self) -> Self {
        let mut result = Self::new([0u8; 4]);
        for (row_idx, row_bits) in self.rows.iter().enumerate() {
            let mut acc = 0u8;
            let mut bits = *row_bits;
            while bits != 0 {
                let bit = bits.trailing_zeros() as usize;
                acc ^= rhs.rows[bit];
                bits &= bits - 1;
            }
            result.rows[row_idx] = acc;
        }
        result
    }

    #[cfg(test)]
    fn identity() -> Self {
        Self::new([0b0001, 0b0010, 0b0100, 0b1000])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> impl Iterator<Item = Nibble> {
        (0u8..16).map(Nibble::new)
    }

    #[test]
    fn tables_are_inverse_permutations() {
        for a in all() {
            assert_eq!(unsubstitute(substitute(a)), a);
            assert_eq!(substitute(unsubstitute(a)), a);
        }
    }

    #[test]
    fn derived_sbox_matches_table() {
        for a in all() {
            assert_eq!(substitute_derived(a), substitute(a), "input {}", a);
        }
    }

    #[test]
    fn derived_inverse_sbox_matches_table() {
        for a in all() {
            assert_eq!(unsubstitute_derived(a), unsubstitute(a), "input {}", a);
        }
    }

    #[test]
    fn affine_matrices_are_mutual_inverses() {
        assert_eq!(AFFINE_FWD.mul(&AFFINE_INV), Matrix4::identity());
        assert_eq!(AFFINE_INV.mul(&AFFINE_FWD), Matrix4::identity());
    }
}
