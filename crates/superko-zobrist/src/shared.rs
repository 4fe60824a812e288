//! A registry shared between search threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use superko_core::{Fingerprint, Player, StateShapeError, Value};

use crate::{KeyTable, PositionRegistry, RegistryError};

/// A [`PositionRegistry`] behind a mutex.
///
/// Hashing happens outside the lock; only the check-then-insert and removal
/// run under it, so each call is atomic with respect to other workers.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    table: Arc<KeyTable>,
    inner: Arc<Mutex<PositionRegistry>>,
}

impl SharedRegistry {
    /// Wraps `registry` for sharing.
    pub fn new(registry: PositionRegistry) -> Self {
        SharedRegistry {
            table: Arc::clone(registry.table()),
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    // Every operation leaves the set consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, PositionRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the table used to hash states.
    pub fn table(&self) -> &Arc<KeyTable> {
        &self.table
    }

    /// See [`PositionRegistry::add`].
    pub fn add(&self, state: &[Value], to_play: Player) -> Result<Fingerprint, RegistryError> {
        let fp = self.table.hash(state, to_play)?;
        self.lock().insert_fingerprint(fp)
    }

    /// See [`PositionRegistry::insert_fingerprint`].
    pub fn insert_fingerprint(&self, fp: Fingerprint) -> Result<Fingerprint, RegistryError> {
        self.lock().insert_fingerprint(fp)
    }

    /// See [`PositionRegistry::remove`].
    pub fn remove(&self, fp: Fingerprint) -> bool {
        self.lock().remove(fp)
    }

    /// See [`PositionRegistry::contains`].
    pub fn contains(&self, fp: Fingerprint) -> bool {
        self.lock().contains(fp)
    }

    /// See [`PositionRegistry::would_repeat`].
    pub fn would_repeat(&self, state: &[Value], to_play: Player) -> Result<bool, StateShapeError> {
        let fp = self.table.hash(state, to_play)?;
        Ok(self.contains(fp))
    }

    /// Number of registered positions.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no position is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns a copy of the registry as it is now.
    pub fn snapshot(&self) -> PositionRegistry {
        self.lock().clone()
    }
}

impl From<PositionRegistry> for SharedRegistry {
    fn from(registry: PositionRegistry) -> Self {
        SharedRegistry::new(registry)
    }
}
