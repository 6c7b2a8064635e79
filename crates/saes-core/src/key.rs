//! Key types for S-AES.

use crate::block::State;

/// 16-bit S-AES key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaesKey(pub State);

impl From<u16> for SaesKey {
    fn from(word: u16) -> Self {
        Self(State::from_word(word))
    }
}

impl From<State> for SaesKey {
    fn from(state: State) -> Self {
        Self(state)
    }
}

/// Expanded round keys for the two-round pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [State; 3]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=2).
    #[inline]
    pub fn get(&self, round: usize) -> &State {
        &self.0[round]
    }
}
