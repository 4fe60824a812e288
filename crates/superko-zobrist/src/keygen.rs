//! Unique random key generation.
//!
//! Every key handed out by one [`KeyGenerator`] is distinct from every other
//! key it has handed out and from the identity key `0`. A table draws all of
//! its keys (vertex rows and to-play keys) from a single generator so the
//! distinctness holds across the whole table.

use std::collections::HashSet;

use rand::Rng;
use superko_core::{Key, MAX_KEY_BITS};

use crate::KeyGenError;

/// Default number of redraws allowed per key before giving up.
pub const DEFAULT_RETRY_BUDGET: u32 = 64;

/// Draws keys of a fixed bit width, never repeating one.
pub struct KeyGenerator<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    key_bits: u32,
    mask: Key,
    issued: HashSet<Key>,
    retry_budget: u32,
    collisions: u64,
}

impl<'a, R: Rng + ?Sized> KeyGenerator<'a, R> {
    /// Creates a generator for `key_bits`-wide keys (1 to 64).
    pub fn new(rng: &'a mut R, key_bits: u32) -> Self {
        debug_assert!((1..=MAX_KEY_BITS).contains(&key_bits));
        KeyGenerator {
            rng,
            key_bits,
            mask: mask_for(key_bits),
            issued: HashSet::new(),
            retry_budget: DEFAULT_RETRY_BUDGET,
            collisions: 0,
        }
    }

    /// Sets the number of redraws allowed per key.
    pub fn with_retry_budget(mut self, retry_budget: u32) -> Self {
        self.retry_budget = retry_budget;
        self
    }

    /// Refuses up front if `count` more keys would fill more than half of the
    /// non-identity key space, and reserves room for them otherwise.
    pub fn reserve(&mut self, count: u128) -> Result<(), KeyGenError> {
        let requested = self.issued.len() as u128 + count;
        let space = u128::from(self.mask);
        if requested > space / 2 {
            return Err(KeyGenError::KeySpaceExhausted {
                requested,
                key_bits: self.key_bits,
            });
        }
        if let Ok(additional) = usize::try_from(count) {
            self.issued.reserve(additional);
        }
        Ok(())
    }

    /// Draws a key not issued before and not equal to the identity key.
    pub fn next_unique(&mut self) -> Result<Key, KeyGenError> {
        let attempts = self.retry_budget.saturating_add(1);
        for attempt in 0..attempts {
            let key = self.rng.next_u64() & self.mask;
            if key != 0 && self.issued.insert(key) {
                return Ok(key);
            }
            self.collisions += 1;
            tracing::trace!(attempt, key_bits = self.key_bits, "key collision, redrawing");
        }
        Err(KeyGenError::RetriesExhausted { attempts })
    }

    /// Draws a row of `count` unique keys prefixed by the identity key.
    pub fn next_row(&mut self, count: usize) -> Result<Vec<Key>, KeyGenError> {
        let mut row = Vec::with_capacity(count + 1);
        row.push(0);
        for _ in 0..count {
            row.push(self.next_unique()?);
        }
        Ok(row)
    }

    /// Number of keys issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    /// Number of redraws caused by collisions so far.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }
}

#[inline]
fn mask_for(key_bits: u32) -> Key {
    if key_bits >= MAX_KEY_BITS {
        Key::MAX
    } else {
        (1 << key_bits) - 1
    }
}
