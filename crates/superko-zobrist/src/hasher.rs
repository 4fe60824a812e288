//! Folding board states into fingerprints.
//!
//! The fingerprint of a state is the XOR of `table.key(v, state[v])` over all
//! vertices, seeded with the identity key, and further XORed with the to-play
//! key in situational mode. An all-empty state with no side to move is
//! therefore always [`Fingerprint::EMPTY`], and a zero-length fold is
//! well defined.
//!
//! Because every key in a table is distinct, changing the value of exactly
//! one vertex always changes the fingerprint.

use superko_core::{Fingerprint, Key, Player, StateShapeError, Value, Vertex};

use crate::KeyTable;

impl KeyTable {
    /// Hashes `state` with `to_play` to move.
    ///
    /// `to_play` is ignored for positional tables.
    pub fn hash(&self, state: &[Value], to_play: Player) -> Result<Fingerprint, StateShapeError> {
        self.shape().validate_state(state)?;
        self.shape().validate_player(to_play)?;
        Ok(self.fold(state, to_play))
    }

    /// Hashes a state already known to match the table geometry.
    ///
    /// # Panics
    ///
    /// May panic if `state` has a value out of range or `to_play` is out of
    /// range in situational mode. Extra or missing vertices are not detected.
    pub fn fold(&self, state: &[Value], to_play: Player) -> Fingerprint {
        debug_assert_eq!(state.len(), self.size());
        let board = state
            .iter()
            .zip(0u32..)
            .fold(Fingerprint::EMPTY, |fp, (&value, v)| {
                fp ^ self.key(Vertex::new(v), value)
            });
        board ^ self.to_play_key(to_play)
    }

    /// Returns the key to XOR into a fingerprint when `vertex` changes from
    /// `old` to `new`. Non-zero whenever `old != new`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is off the board or either value is out of range.
    #[inline]
    pub fn delta(&self, vertex: Vertex, old: Value, new: Value) -> Key {
        self.key(vertex, old) ^ self.key(vertex, new)
    }

    /// Returns the key to XOR into a fingerprint when the side to move
    /// changes from `old` to `new`. Always zero for positional tables.
    ///
    /// # Panics
    ///
    /// Panics if either player is out of range in situational mode.
    #[inline]
    pub fn to_play_delta(&self, old: Player, new: Player) -> Key {
        self.to_play_key(old) ^ self.to_play_key(new)
    }

    /// Returns `fp` updated for a single vertex change.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`KeyTable::delta`].
    #[inline]
    pub fn update(&self, fp: Fingerprint, vertex: Vertex, old: Value, new: Value) -> Fingerprint {
        fp ^ self.delta(vertex, old, new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use superko_core::Shape;

    fn table(situational: Player) -> KeyTable {
        KeyTable::seeded(Shape::new(81, 2, situational).unwrap(), 64, 7).unwrap()
    }

    fn state_strategy() -> impl Strategy<Value = Vec<Value>> {
        prop::collection::vec(0u16..=2, 81)
    }

    #[test]
    fn empty_board_hashes_to_zero() {
        let table = table(2);
        assert_eq!(table.hash(&[0; 81], 0), Ok(Fingerprint::EMPTY));
    }

    #[test]
    fn single_stone_is_its_key() {
        let table = table(0);
        let mut state = [0; 81];
        state[40] = 1;
        assert_eq!(
            table.hash(&state, 0).unwrap().bits(),
            table.key(Vertex::new(40), 1)
        );
    }

    #[test]
    fn rejects_wrong_length() {
        let table = table(0);
        assert_eq!(
            table.hash(&[0; 80], 0),
            Err(StateShapeError::LengthMismatch {
                expected: 81,
                actual: 80
            })
        );
    }

    #[test]
    fn rejects_value_out_of_range() {
        let table = table(0);
        let mut state = [0; 81];
        state[5] = 3;
        assert_eq!(
            table.hash(&state, 0),
            Err(StateShapeError::ValueOutOfRange {
                vertex: 5,
                value: 3,
                max: 2
            })
        );
    }

    #[test]
    fn rejects_player_out_of_range() {
        let table = table(2);
        assert_eq!(
            table.hash(&[0; 81], 3),
            Err(StateShapeError::PlayerOutOfRange { player: 3, max: 2 })
        );
    }

    #[test]
    fn to_play_only_counts_when_situational() {
        let mut state = [0; 81];
        state[3] = 2;

        let positional = table(0);
        assert_eq!(positional.hash(&state, 1), positional.hash(&state, 0));

        let situational = table(2);
        assert_ne!(situational.hash(&state, 1), situational.hash(&state, 0));
        assert_ne!(situational.hash(&state, 1), situational.hash(&state, 2));
    }

    #[test]
    fn to_play_delta_switches_sides() {
        let situational = table(2);
        let state = [1; 81];
        let black = situational.hash(&state, 1).unwrap();
        let white = black ^ situational.to_play_delta(1, 2);
        assert_eq!(white, situational.hash(&state, 2).unwrap());

        let positional = table(0);
        assert_eq!(positional.to_play_delta(1, 2), 0);
    }

    #[test]
    #[should_panic]
    fn delta_panics_on_value_out_of_range() {
        table(0).delta(Vertex::new(0), 1, 3);
    }

    #[test]
    #[should_panic]
    fn to_play_delta_panics_on_unknown_player() {
        table(2).to_play_delta(1, 3);
    }

    proptest! {
        #[test]
        fn hash_is_deterministic(state in state_strategy(), to_play in 0u16..=2) {
            let table = table(2);
            prop_assert_eq!(table.hash(&state, to_play), table.hash(&state, to_play));
        }

        #[test]
        fn single_vertex_change_always_changes_hash(
            state in state_strategy(),
            v in 0usize..81,
            bump in 1u16..=2,
            to_play in 0u16..=2,
        ) {
            let table = table(2);
            let mut changed = state.clone();
            changed[v] = (state[v] + bump) % 3;
            prop_assert_ne!(table.hash(&state, to_play), table.hash(&changed, to_play));
        }

        #[test]
        fn incremental_update_matches_full_hash(
            state in state_strategy(),
            v in 0u32..81,
            new in 0u16..=2,
        ) {
            let table = table(0);
            let before = table.hash(&state, 0).unwrap();
            let mut after = state.clone();
            after[v as usize] = new;
            let updated = table.update(before, Vertex::new(v), state[v as usize], new);
            prop_assert_eq!(updated, table.hash(&after, 0).unwrap());
        }
    }
}
