//! Board geometry.

use crate::{ConfigError, StateShapeError};

/// The state of a single vertex. `0` is empty and never contributes a key.
pub type Value = u16;

/// A side-to-move identity. `0` means "no side to move" and never contributes a key.
pub type Player = u16;

/// Widest key width supported by [`crate::Key`].
pub const MAX_KEY_BITS: u32 = 64;

/// Narrowest key width considered safe against birthday collisions.
pub const MIN_SAFE_KEY_BITS: u32 = 53;

/// A validated board geometry: vertex count, non-empty value count and the
/// number of player identities tracked for situational superko.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    values: Value,
    situational: Player,
}

impl Shape {
    /// Creates a shape for `size` vertices holding values `1..=values`.
    ///
    /// `situational == 0` selects positional superko (the side to move is
    /// ignored); otherwise it is the number of distinct players.
    pub fn new(size: usize, values: Value, situational: Player) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if values == 0 {
            return Err(ConfigError::ZeroValues);
        }
        Ok(Shape {
            size,
            values,
            situational,
        })
    }

    /// Creates a positional-superko shape.
    pub fn positional(size: usize, values: Value) -> Result<Self, ConfigError> {
        Self::new(size, values, 0)
    }

    /// Number of vertices.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Highest valid vertex value.
    #[inline]
    pub const fn values(&self) -> Value {
        self.values
    }

    /// Number of player identities, 0 in positional mode.
    #[inline]
    pub const fn situational(&self) -> Player {
        self.situational
    }

    /// Returns true if the side to move contributes to the fingerprint.
    #[inline]
    pub const fn is_situational(&self) -> bool {
        self.situational > 0
    }

    /// Number of non-identity keys a table of this shape holds.
    pub fn key_count(&self) -> u128 {
        self.size as u128 * u128::from(self.values) + u128::from(self.situational)
    }

    /// Checks that `bits` is a usable key width.
    pub fn check_key_bits(bits: u32) -> Result<u32, ConfigError> {
        if bits == 0 || bits > MAX_KEY_BITS {
            return Err(ConfigError::KeyBitsOutOfRange {
                bits,
                max: MAX_KEY_BITS,
            });
        }
        Ok(bits)
    }

    /// Checks that `state` has one in-range value per vertex.
    pub fn validate_state(&self, state: &[Value]) -> Result<(), StateShapeError> {
        if state.len() != self.size {
            return Err(StateShapeError::LengthMismatch {
                expected: self.size,
                actual: state.len(),
            });
        }
        match state.iter().position(|&value| value > self.values) {
            Some(vertex) => Err(StateShapeError::ValueOutOfRange {
                vertex,
                value: state[vertex],
                max: self.values,
            }),
            None => Ok(()),
        }
    }

    /// Checks that `player` is a known identity. Any player is accepted in
    /// positional mode since it is ignored.
    pub fn validate_player(&self, player: Player) -> Result<(), StateShapeError> {
        if self.is_situational() && player > self.situational {
            return Err(StateShapeError::PlayerOutOfRange {
                player,
                max: self.situational,
            });
        }
        Ok(())
    }
}
