//! Block representation: 2-nibble columns and the 2x2 cipher state.

use core::fmt;

use crate::field::Nibble;
use crate::sbox::{substitute, unsubstitute};

/// MixColumns matrix `[[1, 4], [4, 1]]`, row-major.
const MIX: [[Nibble; 2]; 2] = [
    [Nibble::new(1), Nibble::new(4)],
    [Nibble::new(4), Nibble::new(1)],
];

/// Inverse MixColumns matrix `[[9, 2], [2, 9]]`, row-major.
const UNMIX: [[Nibble; 2]; 2] = [
    [Nibble::new(9), Nibble::new(2)],
    [Nibble::new(2), Nibble::new(9)],
];

/// One column of the cipher state: an ordered (top, bottom) pair.
///
/// Also serves as a key-schedule word while expanding round keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Column {
    /// Top element.
    pub top: Nibble,
    /// Bottom element.
    pub bottom: Nibble,
}

impl Column {
    /// Constructs a column from its two elements.
    pub const fn new(top: Nibble, bottom: Nibble) -> Self {
        Self { top, bottom }
    }

    /// Swaps the two elements.
    #[inline]
    pub fn rotate(self) -> Self {
        Self::new(self.bottom, self.top)
    }

    /// Applies the S-box to each element.
    pub fn substitute(self) -> Self {
        Self::new(substitute(self.top), substitute(self.bottom))
    }

    /// Applies the inverse S-box to each element.
    pub fn unsubstitute(self) -> Self {
        Self::new(unsubstitute(self.top), unsubstitute(self.bottom))
    }

    /// Multiplies the column by the MixColumns matrix.
    pub fn mix(self) -> Self {
        self.mul_matrix(&MIX)
    }

    /// Multiplies the column by the inverse MixColumns matrix, undoing
    /// [`Column::mix`].
    pub fn unmix(self) -> Self {
        self.mul_matrix(&UNMIX)
    }

    /// Element-wise field addition.
    #[inline]
    pub fn xor(self, rhs: Self) -> Self {
        Self::new(self.top.xor(rhs.top), self.bottom.xor(rhs.bottom))
    }

    fn mul_matrix(self, m: &[[Nibble; 2]; 2]) -> Self {
        Self::new(
            m[0][0].mul(self.top).xor(m[0][1].mul(self.bottom)),
            m[1][0].mul(self.top).xor(m[1][1].mul(self.bottom)),
        )
    }
}

/// The full 16-bit cipher state: two columns forming a 2x2 nibble grid,
/// column-major. Represents plaintext, ciphertext, or a round key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// Left column.
    pub left: Column,
    /// Right column.
    pub right: Column,
}

impl State {
    /// Constructs a state from its two columns.
    pub const fn new(left: Column, right: Column) -> Self {
        Self { left, right }
    }

    /// Constructs a state from four nibbles in reading order: top-left,
    /// bottom-left, top-right, bottom-right.
    pub const fn from_nibbles(n: [Nibble; 4]) -> Self {
        Self::new(Column::new(n[0], n[1]), Column::new(n[2], n[3]))
    }

    /// Returns the four nibbles in reading order.
    pub const fn nibbles(self) -> [Nibble; 4] {
        [
            self.left.top,
            self.left.bottom,
            self.right.top,
            self.right.bottom,
        ]
    }

    /// Unpacks a 16-bit word into a state, most significant nibble first.
    pub const fn from_word(word: u16) -> Self {
        Self::from_nibbles([
            Nibble::new((word >> 12) as u8),
            Nibble::new((word >> 8) as u8),
            Nibble::new((word >> 4) as u8),
            Nibble::new(word as u8),
        ])
    }

    /// Packs the state back into a 16-bit word.
    pub const fn to_word(self) -> u16 {
        let n = self.nibbles();
        ((n[0].value() as u16) << 12)
            | ((n[1].value() as u16) << 8)
            | ((n[2].value() as u16) << 4)
            | n[3].value() as u16
    }

    /// Swaps the bottom-row elements across the two columns; the top row is
    /// unchanged. Self-inverse at this block size, so the same call undoes
    /// it during decryption.
    pub fn shift_rows(self) -> Self {
        Self::new(
            Column::new(self.left.top, self.right.bottom),
            Column::new(self.right.top, self.left.bottom),
        )
    }

    /// Applies the S-box to all four elements.
    pub fn substitute(self) -> Self {
        Self::new(self.left.substitute(), self.right.substitute())
    }

    /// Applies the inverse S-box to all four elements.
    pub fn unsubstitute(self) -> Self {
        Self::new(self.left.unsubstitute(), self.right.unsubstitute())
    }

    /// Applies MixColumns to each column independently.
    pub fn mix(self) -> Self {
        Self::new(self.left.mix(), self.right.mix())
    }

    /// Applies inverse MixColumns to each column independently.
    pub fn unmix(self) -> Self {
        Self::new(self.left.unmix(), self.right.unmix())
    }

    /// Element-wise field addition; the AddRoundKey primitive.
    #[inline]
    pub fn xor(self, rhs: Self) -> Self {
        Self::new(self.left.xor(rhs.left), self.right.xor(rhs.right))
    }
}

impl From<u16> for State {
    fn from(word: u16) -> Self {
        Self::from_word(word)
    }
}

impl fmt::Display for State {
    /// Renders the four nibbles as space-separated 4-bit binary strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.nibbles();
        write!(f, "{} {} {} {}", a, b, c, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> impl Iterator<Item = Column> {
        (0u8..=255).map(|bits| Column::new(Nibble::new(bits >> 4), Nibble::new(bits)))
    }

    #[test]
    fn rotate_swaps_elements() {
        let c = Column::new(Nibble::new(0b0001), Nibble::new(0b1000));
        let r = c.rotate();
        assert_eq!(r.top.value(), 0b1000);
        assert_eq!(r.bottom.value(), 0b0001);
        assert_eq!(r.rotate(), c);
    }

    #[test]
    fn unmix_inverts_mix_for_all_columns() {
        for c in columns() {
            assert_eq!(c.mix().unmix(), c);
            assert_eq!(c.unmix().mix(), c);
        }
    }

    #[test]
    fn rotate_commutes_with_substitute() {
        // The key schedule relies on substituting before rotating being the
        // same map as rotating before substituting.
        for c in columns() {
            assert_eq!(c.substitute().rotate(), c.rotate().substitute());
        }
    }

    #[test]
    fn word_round_trip_preserves_nibble_order() {
        let s = State::from_word(0x4942);
        let n = s.nibbles();
        assert_eq!(n[0].value(), 0x4);
        assert_eq!(n[1].value(), 0x9);
        assert_eq!(n[2].value(), 0x4);
        assert_eq!(n[3].value(), 0x2);
        assert_eq!(s.to_word(), 0x4942);
    }

    #[test]
    fn shift_rows_swaps_bottom_row_only() {
        let s = State::from_word(0x1234);
        let shifted = s.shift_rows();
        assert_eq!(shifted.to_word(), 0x1432);
        assert_eq!(shifted.shift_rows(), s);
    }

    #[test]
    fn xor_is_element_wise() {
        let a = State::from_word(0xffff);
        let b = State::from_word(0x5a5a);
        assert_eq!(a.xor(b).to_word(), 0xa5a5);
        assert_eq!(a.xor(a).to_word(), 0);
    }

    #[test]
    fn display_renders_binary_nibbles() {
        let s = State::from_word(0x4942);
        assert_eq!(s.to_string(), "0100 1001 0100 0010");
    }
}
