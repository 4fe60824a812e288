//! One table plus one registry, built together.

use std::sync::Arc;

use rand::Rng;
use superko_core::{Fingerprint, Player, Shape, TableConfig, Value};

use crate::{Error, KeyTable, PositionRegistry, SharedRegistry};

/// A key table and an empty position registry over it.
///
/// # Example
///
/// ```
/// use superko_core::TableConfig;
/// use superko_zobrist::Superko;
///
/// let mut superko = Superko::new(&TableConfig::new(81, 2, 2).with_seed(1)).unwrap();
/// let mut board = [0; 81];
/// board[10] = 2;
/// let first = superko.add(&board, 1).unwrap();
/// assert_eq!(superko.add(&board, 1).unwrap_err().duplicate(), Some(first));
/// ```
#[derive(Debug, Clone)]
pub struct Superko {
    table: Arc<KeyTable>,
    registry: PositionRegistry,
}

impl Superko {
    /// Builds from a configuration.
    pub fn new(config: &TableConfig) -> Result<Self, Error> {
        Ok(Self::from_table(KeyTable::from_config(config)?))
    }

    /// Builds with keys drawn from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        shape: Shape,
        key_bits: u32,
        rng: &mut R,
    ) -> Result<Self, Error> {
        Ok(Self::from_table(KeyTable::build(shape, key_bits, rng)?))
    }

    /// Wraps an existing table with an empty registry.
    pub fn from_table(table: KeyTable) -> Self {
        let table = Arc::new(table);
        Superko {
            registry: PositionRegistry::new(Arc::clone(&table)),
            table,
        }
    }

    /// The key table.
    pub fn table(&self) -> &Arc<KeyTable> {
        &self.table
    }

    /// The position registry.
    pub fn registry(&self) -> &PositionRegistry {
        &self.registry
    }

    /// The position registry, mutably.
    pub fn registry_mut(&mut self) -> &mut PositionRegistry {
        &mut self.registry
    }

    /// See [`KeyTable::hash`].
    pub fn hash(&self, state: &[Value], to_play: Player) -> Result<Fingerprint, Error> {
        Ok(self.table.hash(state, to_play)?)
    }

    /// See [`PositionRegistry::add`].
    pub fn add(&mut self, state: &[Value], to_play: Player) -> Result<Fingerprint, Error> {
        Ok(self.registry.add(state, to_play)?)
    }

    /// See [`PositionRegistry::remove`].
    pub fn remove(&mut self, fp: Fingerprint) -> bool {
        self.registry.remove(fp)
    }

    /// Moves the registry behind a mutex for use by several workers.
    pub fn into_shared(self) -> SharedRegistry {
        SharedRegistry::new(self.registry)
    }

    /// Splits into the table and registry.
    pub fn into_parts(self) -> (Arc<KeyTable>, PositionRegistry) {
        (self.table, self.registry)
    }
}
