//! GF(2^4) field elements.

use core::fmt;

/// Reducing polynomial x^4 + x + 1.
const REDUCER: u8 = 0b1_0011;

/// A field element of GF(2^4): a nibble whose 4 bits are the coefficients
/// of a polynomial of degree at most 3 over GF(2).
///
/// Always holds a canonical 4-bit pattern; constructors mask wider inputs
/// rather than rejecting them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nibble(u8);

impl Nibble {
    /// The additive identity.
    pub const ZERO: Nibble = Nibble(0);
    /// The multiplicative identity.
    pub const ONE: Nibble = Nibble(1);

    /// Constructs a field element from the low 4 bits of `value`.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value & 0x0f)
    }

    /// Constructs a field element from individual bits, most significant first.
    pub fn from_bits(bits: [bool; 4]) -> Self {
        let mut value = 0u8;
        for bit in bits {
            value = (value << 1) | u8::from(bit);
        }
        Self(value)
    }

    /// Returns the bit at `index`, counting from the most significant (0..=3).
    #[inline]
    pub fn bit(self, index: usize) -> bool {
        debug_assert!(index < 4);
        (self.0 >> (3 - index)) & 1 == 1
    }

    /// Returns the canonical value in `0..=15`.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Field addition: bitwise XOR. Subtraction is the same map in
    /// characteristic 2.
    #[inline]
    pub const fn xor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    /// Field multiplication modulo x^4 + x + 1.
    pub const fn mul(self, rhs: Self) -> Self {
        // Carryless product of two degree-<=3 polynomials (degree <= 6).
        let mut product: u8 = 0;
        let mut i = 0;
        while i < 4 {
            if (rhs.0 >> i) & 1 == 1 {
                product ^= self.0 << i;
            }
            i += 1;
        }
        // Reduce from the highest surviving bit down to bit 4.
        let mut bit = 6;
        while bit >= 4 {
            if (product >> bit) & 1 == 1 {
                product ^= REDUCER << (bit - 4);
            }
            bit -= 1;
        }
        Self(product & 0x0f)
    }

    /// Multiplicative inverse via Fermat: the multiplicative group has
    /// order 15, so `a^15 == 1` and `a^-1 == a^14` for nonzero `a`.
    ///
    /// `invert(0)` returns 0 by convention; callers must not treat that as
    /// a true inverse.
    pub const fn invert(self) -> Self {
        let a2 = self.mul(self);
        let a4 = a2.mul(a2);
        let a8 = a4.mul(a4);
        // a^14 = a^8 * a^4 * a^2
        a8.mul(a4).mul(a2)
    }
}

impl From<u8> for Nibble {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Nibble {
    /// Renders the element as its 4-bit binary string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> impl Iterator<Item = Nibble> {
        (0u8..16).map(Nibble::new)
    }

    #[test]
    fn new_masks_to_four_bits() {
        assert_eq!(Nibble::new(0xff).value(), 0x0f);
        assert_eq!(Nibble::new(0x10).value(), 0);
        assert_eq!(Nibble::new(0x0a).value(), 0x0a);
    }

    #[test]
    fn from_bits_is_msb_first() {
        let n = Nibble::from_bits([true, false, false, true]);
        assert_eq!(n.value(), 0b1001);
        assert!(n.bit(0));
        assert!(!n.bit(1));
        assert!(!n.bit(2));
        assert!(n.bit(3));
    }

    #[test]
    fn xor_is_self_inverse() {
        for a in all() {
            assert_eq!(a.xor(a), Nibble::ZERO);
        }
    }

    #[test]
    fn mul_matches_known_products() {
        // x * x = x^2, x^3 * x = x^4 = x + 1 after reduction.
        assert_eq!(Nibble::new(0b0010).mul(Nibble::new(0b0010)).value(), 0b0100);
        assert_eq!(Nibble::new(0b1000).mul(Nibble::new(0b0010)).value(), 0b0011);
        // (x^3 + x^2 + x + 1)(x^3 + x) = x^3 + x^2 in GF(16).
        assert_eq!(Nibble::new(0b1111).mul(Nibble::new(0b1010)).value(), 0b1100);
    }

    #[test]
    fn mul_is_commutative_with_identities() {
        for a in all() {
            assert_eq!(a.mul(Nibble::ONE), a);
            assert_eq!(a.mul(Nibble::ZERO), Nibble::ZERO);
            for b in all() {
                assert_eq!(a.mul(b), b.mul(a));
            }
        }
    }

    #[test]
    fn invert_gives_multiplicative_inverse() {
        assert_eq!(Nibble::ZERO.invert(), Nibble::ZERO);
        for a in all().skip(1) {
            assert_eq!(a.mul(a.invert()), Nibble::ONE);
        }
    }

    #[test]
    fn display_renders_binary() {
        assert_eq!(Nibble::new(0b1001).to_string(), "1001");
        assert_eq!(Nibble::ZERO.to_string(), "0000");
    }
}
