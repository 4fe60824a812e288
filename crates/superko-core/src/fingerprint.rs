//! Fingerprint representation.
//!
//! A fingerprint is the XOR of one key per occupied vertex (plus the side to
//! move in situational mode). XOR is its own inverse, so the same operation
//! adds and removes a key.

use std::fmt;
use std::ops::{BitXor, BitXorAssign};

/// A single Zobrist key. Zero is the identity key and marks "no contribution".
pub type Key = u64;

/// The folded hash of a board state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// The fingerprint of an empty board with no side to move.
    pub const EMPTY: Fingerprint = Fingerprint(0);

    /// Creates a fingerprint from a raw u64.
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Fingerprint(bits)
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns true if this is the identity fingerprint.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Adds or removes a key.
    #[inline]
    pub fn toggle(&mut self, key: Key) {
        self.0 ^= key;
    }
}

impl BitXor for Fingerprint {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Fingerprint(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Fingerprint {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitXor<Key> for Fingerprint {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Key) -> Self::Output {
        Fingerprint(self.0 ^ rhs)
    }
}

impl BitXorAssign<Key> for Fingerprint {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Key) {
        self.0 ^= rhs;
    }
}

impl From<u64> for Fingerprint {
    fn from(bits: u64) -> Self {
        Fingerprint(bits)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:#018x})", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_is_zero() {
        assert!(Fingerprint::EMPTY.is_empty());
        assert_eq!(Fingerprint::default(), Fingerprint::EMPTY);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut fp = Fingerprint::new(0xdead_beef);
        fp.toggle(0x1234);
        assert_ne!(fp, Fingerprint::new(0xdead_beef));
        fp.toggle(0x1234);
        assert_eq!(fp, Fingerprint::new(0xdead_beef));
    }

    #[test]
    fn display_is_fixed_width_hex() {
        assert_eq!(format!("{}", Fingerprint::new(0xff)), "00000000000000ff");
        assert_eq!(
            format!("{:?}", Fingerprint::new(0xff)),
            "Fingerprint(0x00000000000000ff)"
        );
    }

    proptest! {
        #[test]
        fn xor_has_no_sign_effects(a in any::<u64>(), b in any::<u64>()) {
            let fp = Fingerprint::new(a) ^ b;
            prop_assert_eq!(fp.bits(), a ^ b);
            prop_assert_eq!((fp ^ b).bits(), a);
        }
    }
}
