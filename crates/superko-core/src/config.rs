//! Table configuration loading.

use serde::Deserialize;

use crate::{ConfigError, Player, Shape, Value, MAX_KEY_BITS};

/// Parameters for building a key table.
///
/// ```toml
/// size = 81
/// values = 2
/// situational = 2
/// key_bits = 64
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    pub size: usize,
    pub values: Value,
    #[serde(default)]
    pub situational: Player,
    #[serde(default = "default_key_bits")]
    pub key_bits: u32,
    /// Seed for the key generator. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_key_bits() -> u32 {
    MAX_KEY_BITS
}

impl TableConfig {
    /// Creates a configuration with 64-bit keys and no fixed seed.
    pub fn new(size: usize, values: Value, situational: Player) -> Self {
        TableConfig {
            size,
            values,
            situational,
            key_bits: default_key_bits(),
            seed: None,
        }
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the key width.
    pub fn with_key_bits(mut self, key_bits: u32) -> Self {
        self.key_bits = key_bits;
        self
    }

    /// Parses a configuration from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validates the geometry.
    pub fn shape(&self) -> Result<Shape, ConfigError> {
        Shape::new(self.size, self.values, self.situational)
    }

    /// Validates the key width.
    pub fn key_bits(&self) -> Result<u32, ConfigError> {
        Shape::check_key_bits(self.key_bits)
    }
}
