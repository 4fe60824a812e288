//! Superko position registry.
//!
//! A [`PositionRegistry`] holds the fingerprints of every position live on the
//! current game line or search path. Adding a position that is already present
//! is a superko violation and is reported as [`RegistryError::Duplicate`]
//! without touching the registry; removing supports undo and backtracking.

use std::collections::HashSet;
use std::sync::Arc;

use superko_core::{Fingerprint, Player, StateShapeError, Value};

use crate::{KeyTable, RegistryError};

/// The set of positions seen on the current line.
#[derive(Debug, Clone)]
pub struct PositionRegistry {
    table: Arc<KeyTable>,
    seen: HashSet<Fingerprint>,
}

impl PositionRegistry {
    /// Creates an empty registry hashing through `table`.
    pub fn new(table: Arc<KeyTable>) -> Self {
        PositionRegistry {
            table,
            seen: HashSet::new(),
        }
    }

    /// Returns the table used to hash states.
    pub fn table(&self) -> &Arc<KeyTable> {
        &self.table
    }

    /// Registers `state` with `to_play` to move and returns its fingerprint.
    ///
    /// Fails with [`RegistryError::Duplicate`] if the position is already
    /// registered, leaving the registry unchanged.
    pub fn add(&mut self, state: &[Value], to_play: Player) -> Result<Fingerprint, RegistryError> {
        let fp = self.table.hash(state, to_play)?;
        self.insert_fingerprint(fp)
    }

    /// Registers a fingerprint computed elsewhere, e.g. incrementally.
    pub fn insert_fingerprint(&mut self, fp: Fingerprint) -> Result<Fingerprint, RegistryError> {
        if !self.seen.insert(fp) {
            tracing::debug!(fingerprint = %fp, "rejected repeated position");
            return Err(RegistryError::Duplicate(fp));
        }
        Ok(fp)
    }

    /// Removes `fp`, returning whether it was registered.
    pub fn remove(&mut self, fp: Fingerprint) -> bool {
        self.seen.remove(&fp)
    }

    /// Returns true if `fp` is registered.
    pub fn contains(&self, fp: Fingerprint) -> bool {
        self.seen.contains(&fp)
    }

    /// Returns true if `state` with `to_play` to move is registered, i.e.
    /// adding it would repeat a position.
    pub fn would_repeat(&self, state: &[Value], to_play: Player) -> Result<bool, StateShapeError> {
        Ok(self.contains(self.table.hash(state, to_play)?))
    }

    /// Number of registered positions.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns true if no position is registered.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Removes every position.
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// Iterates over registered fingerprints in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Fingerprint> + '_ {
        self.seen.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use superko_core::Shape;

    fn registry() -> PositionRegistry {
        let table = KeyTable::seeded(Shape::new(9, 2, 2).unwrap(), 64, 11).unwrap();
        PositionRegistry::new(Arc::new(table))
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = registry();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn add_returns_hash() {
        let mut registry = registry();
        let state = [0, 1, 2, 0, 0, 0, 0, 0, 1];
        let fp = registry.add(&state, 1).unwrap();
        assert_eq!(fp, registry.table().hash(&state, 1).unwrap());
        assert!(registry.contains(fp));
    }

    #[test]
    fn duplicate_is_rejected_and_registry_unchanged() {
        let mut registry = registry();
        let state = [1; 9];
        let fp = registry.add(&state, 0).unwrap();
        assert_eq!(registry.add(&state, 0), Err(RegistryError::Duplicate(fp)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_board_different_player_is_not_a_repeat() {
        let mut registry = registry();
        let state = [2; 9];
        registry.add(&state, 1).unwrap();
        assert!(registry.add(&state, 2).is_ok());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_allows_re_adding() {
        let mut registry = registry();
        let state = [0, 0, 1, 0, 0, 0, 0, 0, 0];
        let fp = registry.add(&state, 0).unwrap();
        assert!(registry.remove(fp));
        assert!(!registry.remove(fp));
        assert_eq!(registry.add(&state, 0), Ok(fp));
    }

    #[test]
    fn shape_errors_leave_registry_unchanged() {
        let mut registry = registry();
        assert!(matches!(
            registry.add(&[0; 8], 0),
            Err(RegistryError::Shape(StateShapeError::LengthMismatch { .. }))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn would_repeat_does_not_insert() {
        let mut registry = registry();
        let state = [1, 0, 0, 0, 0, 0, 0, 0, 2];
        assert_eq!(registry.would_repeat(&state, 1), Ok(false));
        assert!(registry.is_empty());
        registry.add(&state, 1).unwrap();
        assert_eq!(registry.would_repeat(&state, 1), Ok(true));
    }

    #[test]
    fn clear_empties() {
        let mut registry = registry();
        registry.add(&[1; 9], 0).unwrap();
        registry.add(&[2; 9], 0).unwrap();
        assert_eq!(registry.iter().count(), 2);
        registry.clear();
        assert!(registry.is_empty());
    }

    proptest! {
        #[test]
        fn add_twice_fails_until_removed(
            state in prop::collection::vec(0u16..=2, 9),
            to_play in 0u16..=2,
        ) {
            let mut registry = registry();
            let fp = registry.add(&state, to_play).unwrap();
            prop_assert_eq!(registry.add(&state, to_play), Err(RegistryError::Duplicate(fp)));
            prop_assert!(registry.remove(fp));
            prop_assert_eq!(registry.add(&state, to_play), Ok(fp));
        }
    }
}
