//! Game line tracking with undo.
//!
//! [`PositionHistory`] pairs a [`PositionRegistry`] with the ordered list of
//! positions on the current line, so taking back a move unregisters exactly
//! the position that move produced.

use std::sync::Arc;

use superko_core::{Fingerprint, Player, Value};

use crate::{KeyTable, PositionRegistry, RegistryError};

/// The positions reached on one game line, oldest first.
#[derive(Debug, Clone)]
pub struct PositionHistory {
    registry: PositionRegistry,
    line: Vec<Fingerprint>,
}

impl PositionHistory {
    /// Creates an empty history hashing through `table`.
    pub fn new(table: Arc<KeyTable>) -> Self {
        PositionHistory {
            registry: PositionRegistry::new(table),
            line: Vec::new(),
        }
    }

    /// Records the position reached after a move.
    ///
    /// A repeated position is rejected and the line is left unchanged, so the
    /// caller can refuse the move.
    pub fn play(&mut self, state: &[Value], to_play: Player) -> Result<Fingerprint, RegistryError> {
        let fp = self.registry.add(state, to_play)?;
        self.line.push(fp);
        Ok(fp)
    }

    /// Records a position by its precomputed fingerprint.
    pub fn play_fingerprint(&mut self, fp: Fingerprint) -> Result<Fingerprint, RegistryError> {
        self.registry.insert_fingerprint(fp)?;
        self.line.push(fp);
        Ok(fp)
    }

    /// Takes back the most recent position and returns its fingerprint.
    pub fn undo(&mut self) -> Option<Fingerprint> {
        let fp = self.line.pop()?;
        self.registry.remove(fp);
        Some(fp)
    }

    /// The most recent position.
    pub fn current(&self) -> Option<Fingerprint> {
        self.line.last().copied()
    }

    /// Every position on the line, oldest first.
    pub fn fingerprints(&self) -> &[Fingerprint] {
        &self.line
    }

    /// Number of positions on the line.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Returns true if nothing has been played.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// The registry backing this line.
    pub fn registry(&self) -> &PositionRegistry {
        &self.registry
    }
}
