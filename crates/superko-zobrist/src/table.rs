//! Zobrist key tables.
//!
//! A [`KeyTable`] holds one row per vertex with `values + 1` keys each, and
//! optionally one key per player for situational superko. Index 0 of every
//! row is the identity key, so empty vertices and "no side to move" never
//! change a fingerprint. Every other key in the table is distinct.
//!
//! Tables are built once and never mutated, so an `Arc<KeyTable>` can be
//! shared between search threads without locking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use superko_core::{Key, Player, Shape, TableConfig, Value, Vertex, MIN_SAFE_KEY_BITS};

use crate::keygen::KeyGenerator;
use crate::Error;

/// Immutable per-vertex and per-player Zobrist keys for one board geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    shape: Shape,
    key_bits: u32,
    /// `size` rows of `values + 1` keys, row-major.
    vertex_keys: Vec<Key>,
    /// `situational + 1` keys, present only in situational mode.
    to_play_keys: Option<Vec<Key>>,
}

impl KeyTable {
    /// Builds a table, drawing every key from `rng`.
    ///
    /// Fails if `key_bits` is not in `1..=64` or the table needs more keys
    /// than the key width can supply without collisions.
    pub fn build<R: Rng + ?Sized>(
        shape: Shape,
        key_bits: u32,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let key_bits = Shape::check_key_bits(key_bits)?;
        if key_bits < MIN_SAFE_KEY_BITS {
            tracing::warn!(
                key_bits,
                min_safe = MIN_SAFE_KEY_BITS,
                keys = shape.key_count() as u64,
                "narrow key width, fingerprint collisions are likely"
            );
        }

        let mut keygen = KeyGenerator::new(rng, key_bits);
        keygen.reserve(shape.key_count())?;

        let width = usize::from(shape.values()) + 1;
        let mut vertex_keys = Vec::with_capacity(shape.size() * width);
        for _ in 0..shape.size() {
            vertex_keys.extend(keygen.next_row(usize::from(shape.values()))?);
        }

        let to_play_keys = if shape.is_situational() {
            Some(keygen.next_row(usize::from(shape.situational()))?)
        } else {
            None
        };

        tracing::debug!(
            size = shape.size(),
            values = shape.values(),
            situational = shape.situational(),
            key_bits,
            collisions = keygen.collisions(),
            "built key table"
        );

        Ok(KeyTable {
            shape,
            key_bits,
            vertex_keys,
            to_play_keys,
        })
    }

    /// Builds a table from a deterministic seed.
    pub fn seeded(shape: Shape, key_bits: u32, seed: u64) -> Result<Self, Error> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::build(shape, key_bits, &mut rng)
    }

    /// Builds a table from a configuration, seeding from entropy when the
    /// configuration has no seed.
    pub fn from_config(config: &TableConfig) -> Result<Self, Error> {
        let shape = config.shape()?;
        let key_bits = config.key_bits()?;
        match config.seed {
            Some(seed) => Self::seeded(shape, key_bits, seed),
            None => Self::build(shape, key_bits, &mut rand::rng()),
        }
    }

    /// The board geometry this table was built for.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Width of every key in bits.
    #[inline]
    pub fn key_bits(&self) -> u32 {
        self.key_bits
    }

    /// Number of vertices.
    #[inline]
    pub fn size(&self) -> usize {
        self.shape.size()
    }

    #[inline]
    fn row_width(&self) -> usize {
        usize::from(self.shape.values()) + 1
    }

    /// Returns the keys of one vertex, identity first.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is off the board.
    pub fn row(&self, vertex: Vertex) -> &[Key] {
        let start = vertex.index() * self.row_width();
        &self.vertex_keys[start..start + self.row_width()]
    }

    /// Returns the key for `value` at `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is off the board or `value` is out of range.
    #[inline]
    pub fn key(&self, vertex: Vertex, value: Value) -> Key {
        assert!(value <= self.shape.values(), "value {value} out of range");
        self.vertex_keys[vertex.index() * self.row_width() + usize::from(value)]
    }

    /// Returns the key for `value` at `vertex`, or None if either is out of range.
    pub fn get(&self, vertex: Vertex, value: Value) -> Option<Key> {
        if vertex.index() >= self.size() || value > self.shape.values() {
            return None;
        }
        Some(self.vertex_keys[vertex.index() * self.row_width() + usize::from(value)])
    }

    /// Returns the to-play keys, identity first, in situational mode.
    pub fn to_play_keys(&self) -> Option<&[Key]> {
        self.to_play_keys.as_deref()
    }

    /// Returns the key for `player` to move. Always the identity key in
    /// positional mode.
    ///
    /// # Panics
    ///
    /// Panics if `player` is out of range in situational mode.
    #[inline]
    pub fn to_play_key(&self, player: Player) -> Key {
        match &self.to_play_keys {
            Some(keys) => keys[usize::from(player)],
            None => 0,
        }
    }

    /// Iterates over every non-identity key in the table, vertex rows first.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        let width = self.row_width();
        let vertex = self
            .vertex_keys
            .iter()
            .enumerate()
            .filter(move |(i, _)| i % width != 0)
            .map(|(_, &key)| key);
        let to_play = self
            .to_play_keys
            .iter()
            .flat_map(|keys| keys.iter().skip(1).copied());
        vertex.chain(to_play)
    }
}
